//! Singly linked list of positive values, grown at the head.

use crate::oplog::{EventSink, OperationObserver};
use crate::types::{OpEvent, StructureKind, VizError, VizResult, MIN_LIST_VALUE};

type Link = Option<Box<ListNode>>;

#[derive(Debug)]
struct ListNode {
    value: i64,
    next: Link,
}

/// Singly linked list. Only values `>= 1` are accepted.
#[derive(Debug, Default)]
pub struct SinglyLinkedList {
    head: Link,
    len: usize,
    sink: EventSink,
}

impl SinglyLinkedList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an observer notified on every change.
    pub fn set_observer(&mut self, observer: Box<dyn OperationObserver>) {
        self.sink.set(observer);
    }

    /// Detach and return the current observer.
    pub fn take_observer(&mut self) -> Option<Box<dyn OperationObserver>> {
        self.sink.take()
    }

    /// Link a new node holding `value` in front of the current head.
    pub fn insert_at_head(&mut self, value: i64) -> VizResult<()> {
        if value < MIN_LIST_VALUE {
            self.sink.emit(OpEvent::error(
                StructureKind::LinkedList,
                "Please enter a valid number.",
            ));
            return Err(VizError::InvalidValue(value));
        }
        self.sink.emit(OpEvent::info(
            StructureKind::LinkedList,
            format!("Inserting value: {} at head.", value),
        ));
        let next = self.head.take();
        self.head = Some(Box::new(ListNode { value, next }));
        self.len += 1;
        Ok(())
    }

    pub fn head(&self) -> Option<i64> {
        self.head.as_ref().map(|n| n.value)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Values from head to tail.
    pub fn to_vec(&self) -> Vec<i64> {
        let mut values = Vec::with_capacity(self.len);
        let mut current = self.head.as_deref();
        while let Some(node) = current {
            values.push(node.value);
            current = node.next.as_deref();
        }
        values
    }

    pub fn clear(&mut self) {
        self.unlink_all();
        self.sink
            .emit(OpEvent::warning(StructureKind::LinkedList, "List cleared."));
    }

    // Iterative so that dropping a long chain cannot overflow the stack.
    fn unlink_all(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
        self.len = 0;
    }
}

impl Drop for SinglyLinkedList {
    fn drop(&mut self) {
        self.unlink_all();
    }
}
