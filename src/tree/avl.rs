//! AVL tree over unique `i64` values.

use std::cmp::Ordering;
use std::collections::VecDeque;

use serde::Serialize;

use crate::oplog::{EventSink, OperationObserver};
use crate::types::{OpEvent, StructureKind};

use super::node::{height, rotate_left, rotate_right, Link, Node, Rotation, RotationDirection};

/// Read-only view of one node, for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNodeView {
    pub value: i64,
    pub height: u32,
    pub balance_factor: i32,
    /// Distance from the root (root is 0).
    pub depth: usize,
    pub left: Option<i64>,
    pub right: Option<i64>,
}

/// Bookkeeping for a single insert or delete.
#[derive(Default)]
struct Mutation {
    changed: bool,
    rotations: Vec<Rotation>,
}

/// Height-balanced binary search tree with set semantics.
#[derive(Debug, Default)]
pub struct AvlTree {
    root: Link,
    len: usize,
    last_rotations: Vec<Rotation>,
    sink: EventSink,
}

impl AvlTree {
    /// Create an empty tree.
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

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the root, 0 for an empty tree.
    pub fn height(&self) -> u32 {
        height(&self.root)
    }

    pub fn root_value(&self) -> Option<i64> {
        self.root.as_ref().map(|n| n.value)
    }

    pub fn contains(&self, value: i64) -> bool {
        self.find(value).is_some()
    }

    /// Height of the subtree rooted at `value`, or `None` if absent.
    pub fn height_of(&self, value: i64) -> Option<u32> {
        self.find(value).map(|n| n.height)
    }

    /// Balance factor of the node holding `value`, or `None` if absent.
    pub fn balance_of(&self, value: i64) -> Option<i32> {
        self.find(value).map(|n| n.balance())
    }

    /// Rotations performed by the most recent insert or delete.
    pub fn last_rotations(&self) -> &[Rotation] {
        &self.last_rotations
    }

    /// Insert `value`. Returns `false` if it was already present.
    pub fn insert(&mut self, value: i64) -> bool {
        let mut m = Mutation::default();
        self.root = Some(insert_node(self.root.take(), value, &mut m));
        if m.changed {
            self.len += 1;
            self.sink.emit(OpEvent::info(
                StructureKind::AvlTree,
                format!("Inserted {}", value),
            ));
        } else {
            log::debug!("avl insert: {} already present", value);
        }
        self.finish(m)
    }

    /// Delete `value`. Returns `false` if it was not present.
    pub fn delete(&mut self, value: i64) -> bool {
        let mut m = Mutation::default();
        self.root = delete_node(self.root.take(), value, &mut m);
        if m.changed {
            self.len -= 1;
            self.sink.emit(OpEvent::info(
                StructureKind::AvlTree,
                format!("Deleted {}", value),
            ));
        } else {
            log::debug!("avl delete: {} not present", value);
        }
        self.finish(m)
    }

    /// Discard every node.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
        self.last_rotations.clear();
        self.sink
            .emit(OpEvent::warning(StructureKind::AvlTree, "Tree cleared"));
    }

    /// Ascending iterator over the values.
    pub fn iter(&self) -> InOrder<'_> {
        InOrder::new(&self.root)
    }

    /// All values in ascending order.
    pub fn inorder_traversal(&self) -> Vec<i64> {
        self.iter().collect()
    }

    /// Every node in level order, left to right.
    pub fn node_views(&self) -> Vec<TreeNodeView> {
        let mut views = Vec::with_capacity(self.len);
        let mut queue: VecDeque<(&Node, usize)> = VecDeque::new();
        if let Some(root) = self.root.as_deref() {
            queue.push_back((root, 0));
        }
        while let Some((node, depth)) = queue.pop_front() {
            views.push(TreeNodeView {
                value: node.value,
                height: node.height,
                balance_factor: node.balance(),
                depth,
                left: node.left.as_ref().map(|n| n.value),
                right: node.right.as_ref().map(|n| n.value),
            });
            for child in [node.left.as_deref(), node.right.as_deref()]
                .into_iter()
                .flatten()
            {
                queue.push_back((child, depth + 1));
            }
        }
        views
    }

    fn find(&self, value: i64) -> Option<&Node> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(node),
            };
        }
        None
    }

    fn finish(&mut self, m: Mutation) -> bool {
        for rotation in &m.rotations {
            let side = match rotation.direction {
                RotationDirection::Left => "left",
                RotationDirection::Right => "right",
            };
            self.sink.emit(OpEvent::info(
                StructureKind::AvlTree,
                format!("Rotated {} at {}", side, rotation.pivot),
            ));
        }
        self.last_rotations = m.rotations;
        m.changed
    }
}

fn insert_node(link: Link, value: i64, m: &mut Mutation) -> Box<Node> {
    let Some(mut node) = link else {
        m.changed = true;
        return Node::leaf(value);
    };
    match value.cmp(&node.value) {
        Ordering::Less => node.left = Some(insert_node(node.left.take(), value, m)),
        Ordering::Greater => node.right = Some(insert_node(node.right.take(), value, m)),
        Ordering::Equal => return node,
    }
    node.update_height();

    // The inserted value decides between a single and a double rotation.
    let balance = node.balance();
    if balance > 1 {
        if let Some(left_value) = node.left.as_ref().map(|n| n.value) {
            if value > left_value {
                node.left = node.left.take().map(|l| rotate_left(l, &mut m.rotations));
            }
            return rotate_right(node, &mut m.rotations);
        }
    } else if balance < -1 {
        if let Some(right_value) = node.right.as_ref().map(|n| n.value) {
            if value < right_value {
                node.right = node.right.take().map(|r| rotate_right(r, &mut m.rotations));
            }
            return rotate_left(node, &mut m.rotations);
        }
    }
    node
}

fn delete_node(link: Link, value: i64, m: &mut Mutation) -> Link {
    let mut node = link?;
    match value.cmp(&node.value) {
        Ordering::Less => node.left = delete_node(node.left.take(), value, m),
        Ordering::Greater => node.right = delete_node(node.right.take(), value, m),
        Ordering::Equal => {
            m.changed = true;
            match (node.left.take(), node.right.take()) {
                (None, None) => return None,
                (Some(child), None) | (None, Some(child)) => return Some(child),
                (Some(left), Some(right)) => {
                    let successor = min_value(&right);
                    node.value = successor;
                    node.left = Some(left);
                    node.right = delete_node(Some(right), successor, m);
                }
            }
        }
    }
    node.update_height();

    // No single comparison value exists on delete; the child's own balance
    // picks single vs. double rotation.
    let balance = node.balance();
    if balance > 1 {
        let left_balance = node.left.as_ref().map_or(0, |n| n.balance());
        if left_balance < 0 {
            node.left = node.left.take().map(|l| rotate_left(l, &mut m.rotations));
        }
        return Some(rotate_right(node, &mut m.rotations));
    } else if balance < -1 {
        let right_balance = node.right.as_ref().map_or(0, |n| n.balance());
        if right_balance > 0 {
            node.right = node.right.take().map(|r| rotate_right(r, &mut m.rotations));
        }
        return Some(rotate_left(node, &mut m.rotations));
    }
    Some(node)
}

/// Leftmost value of a subtree.
fn min_value(node: &Node) -> i64 {
    let mut current = node;
    while let Some(left) = current.left.as_deref() {
        current = left;
    }
    current.value
}

/// Ascending in-order iterator, driven by an explicit stack.
pub struct InOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> InOrder<'a> {
    fn new(root: &'a Link) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left(root.as_deref());
        iter
    }

    fn push_left(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some(node.value)
    }
}
