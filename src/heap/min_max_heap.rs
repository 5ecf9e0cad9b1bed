//! Binary heap stored in level order, min or max ordering fixed at construction.

use serde::Serialize;

use crate::oplog::{EventSink, OperationObserver};
use crate::types::{OpEvent, StructureKind};

/// Ordering of a heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HeapOrder {
    /// Smallest value at the root.
    Min,
    /// Largest value at the root.
    Max,
}

impl HeapOrder {
    /// Whether `a` belongs strictly above `b` under this ordering.
    fn above(self, a: i64, b: i64) -> bool {
        match self {
            Self::Min => a < b,
            Self::Max => a > b,
        }
    }

    /// Whether a parent holding `parent` may sit above a child holding `child`.
    pub fn holds(self, parent: i64, child: i64) -> bool {
        match self {
            Self::Min => parent <= child,
            Self::Max => parent >= child,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Min => "min-heap",
            Self::Max => "max-heap",
        }
    }
}

/// Index of the parent of slot `i`. Slot 0 has no parent.
pub fn parent_index(i: usize) -> Option<usize> {
    if i == 0 {
        None
    } else {
        Some((i - 1) / 2)
    }
}

/// Binary heap over `i64` values.
#[derive(Debug)]
pub struct MinMaxHeap {
    data: Vec<i64>,
    order: HeapOrder,
    sink: EventSink,
}

impl MinMaxHeap {
    /// Create an empty heap. `is_min` selects min-heap ordering, otherwise max.
    pub fn new(is_min: bool) -> Self {
        Self::with_order(if is_min { HeapOrder::Min } else { HeapOrder::Max })
    }

    /// Create an empty heap with an explicit ordering.
    pub fn with_order(order: HeapOrder) -> Self {
        Self {
            data: Vec::new(),
            order,
            sink: EventSink::default(),
        }
    }

    /// Attach an observer notified on every change.
    pub fn set_observer(&mut self, observer: Box<dyn OperationObserver>) {
        self.sink.set(observer);
    }

    /// Detach and return the current observer.
    pub fn take_observer(&mut self) -> Option<Box<dyn OperationObserver>> {
        self.sink.take()
    }

    pub fn order(&self) -> HeapOrder {
        self.order
    }

    pub fn is_min(&self) -> bool {
        self.order == HeapOrder::Min
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The root value without removing it.
    pub fn peek(&self) -> Option<i64> {
        self.data.first().copied()
    }

    /// Level-order view of the backing array.
    pub fn as_slice(&self) -> &[i64] {
        &self.data
    }

    /// Level-order snapshot of the backing array.
    pub fn to_array(&self) -> Vec<i64> {
        self.data.clone()
    }

    /// Append `value` and sift it up toward the root.
    pub fn insert(&mut self, value: i64) {
        self.data.push(value);
        self.sink.emit(OpEvent::info(
            StructureKind::Heap,
            format!("Inserted {} into {}", value, self.order.name()),
        ));
        self.sift_up(self.data.len() - 1);
    }

    /// Remove and return the root, or `None` when the heap is empty.
    pub fn extract_root(&mut self) -> Option<i64> {
        if self.data.is_empty() {
            self.sink.emit(OpEvent::warning(
                StructureKind::Heap,
                "Heap is empty, nothing to extract",
            ));
            return None;
        }
        let root = self.data.swap_remove(0);
        self.sink.emit(OpEvent::info(
            StructureKind::Heap,
            format!("Extracted root {}", root),
        ));
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Some(root)
    }

    /// Remove every value. The ordering is kept.
    pub fn clear(&mut self) {
        self.data.clear();
        self.sink
            .emit(OpEvent::warning(StructureKind::Heap, "Heap cleared"));
    }

    fn sift_up(&mut self, mut idx: usize) {
        while let Some(parent) = parent_index(idx) {
            if !self.order.above(self.data[idx], self.data[parent]) {
                break;
            }
            log::debug!(
                "heap sift-up: {} (slot {}) <-> {} (slot {})",
                self.data[idx],
                idx,
                self.data[parent],
                parent
            );
            self.data.swap(idx, parent);
            idx = parent;
        }
    }

    /// Swap with the more extreme child while that child violates the order.
    /// On a tie between the two children the left one is taken.
    fn sift_down(&mut self, mut idx: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut target = idx;

            if left < len && self.order.above(self.data[left], self.data[target]) {
                target = left;
            }
            if right < len && self.order.above(self.data[right], self.data[target]) {
                target = right;
            }
            if target == idx {
                break;
            }
            log::debug!(
                "heap sift-down: {} (slot {}) <-> {} (slot {})",
                self.data[idx],
                idx,
                self.data[target],
                target
            );
            self.data.swap(idx, target);
            idx = target;
        }
    }
}

impl Default for MinMaxHeap {
    fn default() -> Self {
        Self::new(true)
    }
}
