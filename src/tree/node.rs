//! AVL nodes and the two rotation primitives.
//!
//! Each node exclusively owns its children through `Option<Box<Node>>`, so
//! the tree cannot contain sharing or cycles.

use serde::Serialize;

pub(crate) type Link = Option<Box<Node>>;

#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) value: i64,
    /// 1 for a leaf.
    pub(crate) height: u32,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl Node {
    pub(crate) fn leaf(value: i64) -> Box<Self> {
        Box::new(Self {
            value,
            height: 1,
            left: None,
            right: None,
        })
    }

    pub(crate) fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// height(left) - height(right).
    pub(crate) fn balance(&self) -> i32 {
        height(&self.left) as i32 - height(&self.right) as i32
    }
}

/// Height of a possibly absent subtree; 0 for `None`.
pub(crate) fn height(link: &Link) -> u32 {
    link.as_ref().map_or(0, |n| n.height)
}

/// Direction of a single rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RotationDirection {
    Left,
    Right,
}

/// A rotation performed during a mutation, around the node holding `pivot`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rotation {
    pub direction: RotationDirection,
    pub pivot: i64,
}

/// Lift the right child of `x` above it. Only `x` and its former right
/// child have their heights recomputed.
pub(crate) fn rotate_left(mut x: Box<Node>, rotations: &mut Vec<Rotation>) -> Box<Node> {
    let Some(mut y) = x.right.take() else {
        return x;
    };
    rotations.push(Rotation {
        direction: RotationDirection::Left,
        pivot: x.value,
    });
    x.right = y.left.take();
    x.update_height();
    y.left = Some(x);
    y.update_height();
    y
}

/// Lift the left child of `y` above it. Only `y` and its former left child
/// have their heights recomputed.
pub(crate) fn rotate_right(mut y: Box<Node>, rotations: &mut Vec<Rotation>) -> Box<Node> {
    let Some(mut x) = y.left.take() else {
        return y;
    };
    rotations.push(Rotation {
        direction: RotationDirection::Right,
        pivot: y.value,
    });
    y.left = x.right.take();
    y.update_height();
    x.right = Some(y);
    x.update_height();
    x
}
