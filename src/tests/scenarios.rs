use super::*;
use crate::{max_height, Color};

#[test]
fn mixed_inserts() {
    init_logger();
    let (tree, _) = insert_checked(vec![10, 20, 30, 15, 25, 5]);
    assert_eq!(tree.in_order().collect::<Vec<_>>(), vec![5, 10, 15, 20, 25, 30]);
    assert_eq!(tree.root_color(), Some(Color::Black));
    assert!(tree.no_red_red());
}

#[test]
fn ascending_triple_rotates_left() {
    init_logger();
    let (tree, _) = insert_checked(vec![10, 20, 30]);
    check_balanced_triple(&tree);
}

#[test]
fn zig_zag_triple_rotates_twice() {
    init_logger();
    let (tree, _) = insert_checked(vec![30, 10, 20]);
    check_balanced_triple(&tree);
}

#[test]
fn fifty_ascending_keys() {
    init_logger();
    let (tree, _) = insert_checked(0..50);
    assert_eq!(tree.len(), 50);
    assert!(tree.height() <= 11);
    assert!(tree.height() <= max_height(50));
    assert!(tree.is_valid());
}

#[test]
fn create_then_insert() {
    let mut tree = RBTree::create(10);
    for key in vec![20, 30, 15, 25, 5] {
        tree.try_insert(key).unwrap();
    }
    assert_eq!(tree.len(), 6);
    assert!(tree.is_valid());
}

/// 20 at the root (black) with 10 and 30 as red children
fn check_balanced_triple(tree: &RBTree) {
    assert_eq!(tree.root_key(), Some(20));
    assert_eq!(tree.root_color(), Some(Color::Black));
    assert_eq!(tree.height(), 2);
    assert_eq!(tree.color_counts().red, 2);
    assert_eq!(tree.in_order().collect::<Vec<_>>(), vec![10, 20, 30]);
}
