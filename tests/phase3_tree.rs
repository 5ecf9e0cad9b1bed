//! Phase 3 tests: AVL tree balancing, deletion and traversal.

use std::collections::{BTreeSet, HashMap};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use structviz::tree::{AvlTree, Rotation, RotationDirection, TreeNodeView};

// ==================== Helper ====================

fn left(pivot: i64) -> Rotation {
    Rotation {
        direction: RotationDirection::Left,
        pivot,
    }
}

fn right(pivot: i64) -> Rotation {
    Rotation {
        direction: RotationDirection::Right,
        pivot,
    }
}

fn tree_from(values: &[i64]) -> AvlTree {
    let mut tree = AvlTree::new();
    for &v in values {
        tree.insert(v);
    }
    tree
}

/// Check BST ordering, stored heights and the balance-factor bound at every node.
fn assert_avl(tree: &AvlTree) {
    let views = tree.node_views();
    let by_value: HashMap<i64, &TreeNodeView> = views.iter().map(|v| (v.value, v)).collect();
    let height = |child: Option<i64>| child.map_or(0, |c| by_value[&c].height);

    for view in &views {
        if let Some(l) = view.left {
            assert!(l < view.value, "left child {} >= {}", l, view.value);
            assert_eq!(by_value[&l].depth, view.depth + 1);
        }
        if let Some(r) = view.right {
            assert!(r > view.value, "right child {} <= {}", r, view.value);
            assert_eq!(by_value[&r].depth, view.depth + 1);
        }
        let (hl, hr) = (height(view.left), height(view.right));
        assert_eq!(view.height, 1 + hl.max(hr), "stale height at {}", view.value);
        assert_eq!(view.balance_factor, hl as i32 - hr as i32);
        assert!(
            (-1..=1).contains(&view.balance_factor),
            "node {} has balance {}",
            view.value,
            view.balance_factor
        );
    }

    let inorder = tree.inorder_traversal();
    assert!(inorder.windows(2).all(|w| w[0] < w[1]), "{:?}", inorder);
    assert_eq!(inorder.len(), tree.len());
    assert_eq!(views.len(), tree.len());
    assert_eq!(tree.height(), views.first().map_or(0, |v| v.height));
}

// ==================== Insert Tests ====================

#[test]
fn test_single_left_rotation_example() {
    let tree = tree_from(&[10, 20, 30]);
    assert_eq!(tree.last_rotations(), &[left(10)]);
    assert_eq!(tree.inorder_traversal(), vec![10, 20, 30]);
    assert_eq!(tree.root_value(), Some(20));
    assert_eq!(tree.height(), 2);
    assert_avl(&tree);
}

#[test]
fn test_single_right_rotation() {
    let tree = tree_from(&[30, 20, 10]);
    assert_eq!(tree.last_rotations(), &[right(30)]);
    assert_eq!(tree.root_value(), Some(20));
    assert_avl(&tree);
}

#[test]
fn test_left_right_double_rotation() {
    let tree = tree_from(&[30, 10, 20]);
    assert_eq!(tree.last_rotations(), &[left(10), right(30)]);
    assert_eq!(tree.root_value(), Some(20));
    assert_eq!(tree.height(), 2);
    assert_avl(&tree);
}

#[test]
fn test_right_left_double_rotation() {
    let tree = tree_from(&[10, 30, 20]);
    assert_eq!(tree.last_rotations(), &[right(30), left(10)]);
    assert_eq!(tree.root_value(), Some(20));
    assert_avl(&tree);
}

#[test]
fn test_no_rotation_when_balanced() {
    let mut tree = tree_from(&[20, 10]);
    assert!(tree.insert(30));
    assert!(tree.last_rotations().is_empty());
    assert_eq!(tree.balance_of(20), Some(0));
}

#[test]
fn test_ascending_inserts_stay_logarithmic() {
    let values: Vec<i64> = (1..=1023).collect();
    let tree = tree_from(&values);
    // A perfect tree of 1023 nodes has height 10.
    assert_eq!(tree.height(), 10);
    assert_avl(&tree);
}

#[test]
fn test_duplicate_insert_is_noop() {
    let mut tree = tree_from(&[5, 3, 8, 1]);
    let before = tree.inorder_traversal();
    let height = tree.height();

    assert!(!tree.insert(3));
    assert_eq!(tree.inorder_traversal(), before);
    assert_eq!(tree.height(), height);
    assert_eq!(tree.len(), 4);
    assert!(tree.last_rotations().is_empty());
}

#[test]
fn test_height_and_balance_accessors() {
    let tree = tree_from(&[20, 10, 30, 5]);
    assert_eq!(tree.height_of(20), Some(3));
    assert_eq!(tree.height_of(10), Some(2));
    assert_eq!(tree.height_of(5), Some(1));
    assert_eq!(tree.height_of(99), None);
    assert_eq!(tree.balance_of(20), Some(1));
    assert_eq!(tree.balance_of(10), Some(1));
    assert_eq!(tree.balance_of(99), None);
    assert!(tree.contains(30));
    assert!(!tree.contains(31));
}

#[test]
fn test_node_views_level_order() {
    let tree = tree_from(&[20, 10, 30, 5, 25]);
    let values: Vec<i64> = tree.node_views().iter().map(|v| v.value).collect();
    assert_eq!(values, vec![20, 10, 30, 5, 25]);
    let depths: Vec<usize> = tree.node_views().iter().map(|v| v.depth).collect();
    assert_eq!(depths, vec![0, 1, 1, 2, 2]);
}

#[test]
fn test_empty_tree() {
    let tree = AvlTree::new();
    assert!(tree.is_empty());
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.root_value(), None);
    assert!(tree.inorder_traversal().is_empty());
    assert!(tree.node_views().is_empty());
}

// ==================== Delete Tests ====================

#[test]
fn test_delete_leaf_triggers_right_rotation() {
    let mut tree = tree_from(&[20, 10, 30, 5]);
    assert!(tree.delete(30));
    assert_eq!(tree.last_rotations(), &[right(20)]);
    assert_eq!(tree.root_value(), Some(10));
    assert_eq!(tree.inorder_traversal(), vec![5, 10, 20]);
    assert_avl(&tree);
}

#[test]
fn test_delete_uses_child_balance_for_double_rotation() {
    let mut tree = tree_from(&[20, 10, 30, 15]);
    assert!(tree.delete(30));
    assert_eq!(tree.last_rotations(), &[left(10), right(20)]);
    assert_eq!(tree.root_value(), Some(15));
    assert_avl(&tree);
}

#[test]
fn test_delete_with_balanced_child_single_rotation() {
    let mut tree = tree_from(&[20, 10, 30, 5, 15]);
    assert!(tree.delete(30));
    assert_eq!(tree.last_rotations(), &[right(20)]);
    assert_eq!(tree.root_value(), Some(10));
    assert_eq!(tree.balance_of(10), Some(-1));
    assert_avl(&tree);
}

#[test]
fn test_delete_mirror_cases() {
    let mut tree = tree_from(&[20, 10, 30, 35]);
    tree.delete(10);
    assert_eq!(tree.last_rotations(), &[left(20)]);
    assert_eq!(tree.root_value(), Some(30));
    assert_avl(&tree);

    let mut tree = tree_from(&[20, 10, 30, 25]);
    tree.delete(10);
    assert_eq!(tree.last_rotations(), &[right(30), left(20)]);
    assert_eq!(tree.root_value(), Some(25));
    assert_avl(&tree);
}

#[test]
fn test_delete_two_children_uses_successor() {
    let mut tree = tree_from(&[20, 10, 30, 25, 35]);
    assert!(tree.delete(20));
    assert_eq!(tree.root_value(), Some(25));
    assert_eq!(tree.inorder_traversal(), vec![10, 25, 30, 35]);
    assert_avl(&tree);
}

#[test]
fn test_delete_single_child_splice() {
    let mut tree = tree_from(&[20, 10, 30, 35]);
    assert!(tree.delete(30));
    assert_eq!(tree.inorder_traversal(), vec![10, 20, 35]);
    assert_eq!(tree.node_views()[0].right, Some(35));
    assert_avl(&tree);
}

#[test]
fn test_delete_absent_is_noop() {
    let mut tree = tree_from(&[2, 1, 3]);
    assert!(!tree.delete(7));
    assert_eq!(tree.inorder_traversal(), vec![1, 2, 3]);
    assert_eq!(tree.len(), 3);

    let mut empty = AvlTree::new();
    assert!(!empty.delete(1));
    assert!(empty.is_empty());
}

#[test]
fn test_clear() {
    let mut tree = tree_from(&[1, 2, 3, 4]);
    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.height(), 0);
    assert!(tree.insert(9));
    assert_eq!(tree.inorder_traversal(), vec![9]);
}

// ==================== Randomized Tests ====================

#[test]
fn test_random_inserts_keep_invariants() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut tree = AvlTree::new();
    let mut shadow = BTreeSet::new();
    for _ in 0..600 {
        let v = rng.gen_range(-300..300);
        assert_eq!(tree.insert(v), shadow.insert(v));
        assert_avl(&tree);
    }
    assert_eq!(
        tree.inorder_traversal(),
        shadow.iter().copied().collect::<Vec<_>>()
    );
}

#[test]
fn test_delete_everything_in_random_order() {
    let mut rng = StdRng::seed_from_u64(1234);
    let mut values: Vec<i64> = (0..400).map(|i| i * 3 - 500).collect();
    values.shuffle(&mut rng);
    let mut tree = tree_from(&values);
    assert_avl(&tree);

    values.shuffle(&mut rng);
    for (i, &v) in values.iter().enumerate() {
        assert!(tree.delete(v), "failed to delete {}", v);
        assert!(!tree.contains(v));
        assert_eq!(tree.len(), values.len() - i - 1);
        assert_avl(&tree);
    }
    assert!(tree.is_empty());
    assert_eq!(tree.height(), 0);
}

#[test]
fn test_mixed_operations_match_set() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut tree = AvlTree::new();
    let mut shadow = BTreeSet::new();
    for _ in 0..3_000 {
        let v = rng.gen_range(0..150);
        if rng.gen_bool(0.55) {
            assert_eq!(tree.insert(v), shadow.insert(v));
        } else {
            assert_eq!(tree.delete(v), shadow.remove(&v));
        }
    }
    assert_avl(&tree);
    assert!(tree.iter().eq(shadow.iter().copied()));
}
