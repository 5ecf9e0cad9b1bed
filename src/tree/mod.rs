//! Height-balanced binary search tree (AVL).

pub mod avl;
pub mod node;

pub use avl::{AvlTree, InOrder, TreeNodeView};
pub use node::{Rotation, RotationDirection};
