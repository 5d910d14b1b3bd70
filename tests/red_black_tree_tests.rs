//! Scenario tests for RedBlackTree and RedBlackSet.
//!
//! Each scenario builds a small tree with a fixed insertion sequence and
//! checks the exact pre-order shape and coloring that results.

use redblack::{
    Color, Direction, InvariantViolation, NodeId, RedBlackSet, RedBlackTree, TraversalOrder,
    TreeError,
};
use rstest::{fixture, rstest};

// =============================================================================
// Helpers
// =============================================================================

const SCENARIO_KEYS: [i32; 9] = [7, 5, 9, 3, 6, 8, 10, 1, 2];

fn preorder(set: &RedBlackSet<i32>) -> Vec<i32> {
    set.keys_in(TraversalOrder::PreOrder)
}

/// Pre-order color tags, e.g. `"BRB"`.
fn color_tags(set: &RedBlackSet<i32>) -> String {
    set.preorder().map(|node| node.color().tag()).collect()
}

fn id_of(set: &RedBlackSet<i32>, key: i32) -> NodeId {
    set.find(&key).map(|node| node.id()).unwrap()
}

#[fixture]
fn balanced() -> RedBlackSet<i32> {
    SCENARIO_KEYS.into_iter().collect()
}

#[fixture]
fn unbalanced() -> RedBlackSet<i32> {
    let mut set = RedBlackSet::new();
    for key in SCENARIO_KEYS {
        set.insert_unbalanced(key);
    }
    set
}

// =============================================================================
// Insertion
// =============================================================================

#[rstest]
fn test_insert_scenario_shape(balanced: RedBlackSet<i32>) {
    assert_eq!(preorder(&balanced), vec![7, 5, 2, 1, 3, 6, 9, 8, 10]);
    assert_eq!(color_tags(&balanced), "BRBRRBBRR");
    assert_eq!(balanced.validate(), Ok(3));
}

#[rstest]
fn test_insert_four_keys_recolors_uncle() {
    let set: RedBlackSet<i32> = [2, 1, 3, 4].into_iter().collect();
    assert_eq!(preorder(&set), vec![2, 1, 3, 4]);
    assert_eq!(color_tags(&set), "BBBR");
}

#[rstest]
fn test_insert_ascending_seven() {
    let set: RedBlackSet<i32> = (1..=7).collect();
    assert_eq!(preorder(&set), vec![2, 1, 4, 3, 6, 5, 7]);
    assert_eq!(color_tags(&set), "BBRBBRR");
}

#[rstest]
fn test_insert_descending_seven() {
    let set: RedBlackSet<i32> = (1..=7).rev().collect();
    assert_eq!(preorder(&set), vec![6, 4, 2, 1, 3, 5, 7]);
    assert_eq!(color_tags(&set), "BRBRRBB");
}

#[rstest]
fn test_insert_unbalanced_colors_everything_red(unbalanced: RedBlackSet<i32>) {
    assert_eq!(color_tags(&unbalanced), "RRRRRRRRR");
    assert_eq!(unbalanced.validate(), Err(InvariantViolation::RedRoot));
}

// =============================================================================
// Rotations on hand-built shapes
// =============================================================================

#[rstest]
fn test_left_rotation_three_nodes() {
    let mut set = RedBlackSet::new();
    for key in [2, 1, 3] {
        set.insert_unbalanced(key);
    }
    let root = id_of(&set, 2);
    set.rotate_left(root).unwrap();
    assert_eq!(preorder(&set), vec![3, 2, 1]);
}

#[rstest]
fn test_left_rotation_at_root(mut unbalanced: RedBlackSet<i32>) {
    let root = unbalanced.root().map(|node| node.id()).unwrap();
    unbalanced.rotate_left(root).unwrap();
    assert_eq!(preorder(&unbalanced), vec![9, 7, 5, 3, 1, 2, 6, 8, 10]);
    assert_eq!(unbalanced.root().map(|node| *node.key()), Some(9));
}

#[rstest]
fn test_left_rotation_at_inner_node(mut unbalanced: RedBlackSet<i32>) {
    let nine = id_of(&unbalanced, 9);
    unbalanced.rotate_left(nine).unwrap();
    assert_eq!(preorder(&unbalanced), vec![7, 5, 3, 1, 2, 6, 10, 9, 8]);
}

#[rstest]
fn test_left_rotation_without_right_child_fails() {
    let mut set = RedBlackSet::new();
    for key in [7, 5, 9, 3] {
        set.insert_unbalanced(key);
    }
    let five = id_of(&set, 5);
    assert_eq!(
        set.rotate_left(five),
        Err(TreeError::InvalidRotation {
            node: five,
            direction: Direction::Left,
        })
    );
    assert_eq!(preorder(&set), vec![7, 5, 3, 9]);
}

#[rstest]
fn test_left_rotation_keeps_colors(mut balanced: RedBlackSet<i32>) {
    let nine = id_of(&balanced, 9);
    balanced.rotate_left(nine).unwrap();
    assert_eq!(preorder(&balanced), vec![7, 5, 2, 1, 3, 6, 10, 9, 8]);
    assert_eq!(color_tags(&balanced), "BRBRRBRBR");
}

#[rstest]
fn test_right_rotation_three_nodes() {
    let mut set = RedBlackSet::new();
    for key in [2, 1, 3] {
        set.insert_unbalanced(key);
    }
    let root = id_of(&set, 2);
    set.rotate_right(root).unwrap();
    assert_eq!(preorder(&set), vec![1, 2, 3]);
}

#[rstest]
fn test_right_rotation_at_root(mut unbalanced: RedBlackSet<i32>) {
    let root = unbalanced.root().map(|node| node.id()).unwrap();
    unbalanced.rotate_right(root).unwrap();
    assert_eq!(preorder(&unbalanced), vec![5, 3, 1, 2, 7, 6, 9, 8, 10]);
}

#[rstest]
fn test_right_rotation_at_inner_node(mut unbalanced: RedBlackSet<i32>) {
    let nine = id_of(&unbalanced, 9);
    unbalanced.rotate_right(nine).unwrap();
    assert_eq!(preorder(&unbalanced), vec![7, 5, 3, 1, 2, 6, 8, 9, 10]);
}

#[rstest]
fn test_right_rotation_without_left_child_fails() {
    let mut set = RedBlackSet::new();
    for key in [7, 5, 9, 10] {
        set.insert_unbalanced(key);
    }
    let nine = id_of(&set, 9);
    assert_eq!(
        set.rotate_right(nine),
        Err(TreeError::InvalidRotation {
            node: nine,
            direction: Direction::Right,
        })
    );
    assert_eq!(preorder(&set), vec![7, 5, 9, 10]);
}

// =============================================================================
// Deletion
// =============================================================================

#[rstest]
fn test_delete_scenario_sequence(mut balanced: RedBlackSet<i32>) {
    assert_eq!(balanced.delete(&6), Ok(6));
    assert_eq!(preorder(&balanced), vec![7, 2, 1, 5, 3, 9, 8, 10]);
    assert_eq!(color_tags(&balanced), "BRBBRBRR");
    assert!(balanced.validate().is_ok());

    assert_eq!(balanced.delete(&7), Ok(7));
    assert_eq!(preorder(&balanced), vec![8, 2, 1, 5, 3, 9, 10]);
    assert_eq!(color_tags(&balanced), "BRBBRBR");
    assert!(balanced.validate().is_ok());
}

#[rstest]
fn test_delete_sibling_rotation() {
    let mut set: RedBlackSet<i32> = [7, 5, 9, 6].into_iter().collect();
    assert_eq!(preorder(&set), vec![7, 5, 6, 9]);
    assert_eq!(color_tags(&set), "BBRB");
    set.delete(&9).unwrap();
    assert_eq!(preorder(&set), vec![6, 5, 7]);
    assert_eq!(color_tags(&set), "BBB");
}

#[rstest]
#[case(&[5, 4], vec![2, 1, 6, 3, 7], "BBRBB")]
#[case(&[5, 2], vec![3, 1, 6, 4, 7], "BBRBB")]
#[case(&[1], vec![4, 2, 3, 6, 5, 7], "BBRBRR")]
fn test_delete_from_ascending_seven(
    #[case] deletions: &[i32],
    #[case] expected_keys: Vec<i32>,
    #[case] expected_colors: &str,
) {
    let mut set: RedBlackSet<i32> = (1..=7).collect();
    for key in deletions {
        set.delete(key).unwrap();
    }
    assert_eq!(preorder(&set), expected_keys);
    assert_eq!(color_tags(&set), expected_colors);
    assert!(set.validate().is_ok());
}

#[rstest]
fn test_delete_missing_key_fails_without_change() {
    let mut set: RedBlackSet<i32> = [2, 3, 4].into_iter().collect();
    let before = set.display_colored().to_string();
    assert_eq!(set.delete(&1), Err(TreeError::KeyNotFound));
    assert_eq!(set.display_colored().to_string(), before);
}

#[rstest]
fn test_delete_from_empty_fails() {
    let mut set: RedBlackSet<i32> = RedBlackSet::new();
    assert_eq!(set.delete(&1), Err(TreeError::KeyNotFound));
}

#[rstest]
fn test_delete_everything_in_insertion_order(mut balanced: RedBlackSet<i32>) {
    for key in SCENARIO_KEYS {
        assert_eq!(balanced.delete(&key), Ok(key));
        assert!(balanced.validate().is_ok());
    }
    assert!(balanced.is_empty());
    assert!(balanced.root().is_none());
}

// =============================================================================
// Traversal orders
// =============================================================================

#[rstest]
fn test_all_orders_on_scenario(balanced: RedBlackSet<i32>) {
    assert_eq!(
        balanced.keys_in(TraversalOrder::InOrder),
        vec![1, 2, 3, 5, 6, 7, 8, 9, 10]
    );
    assert_eq!(
        balanced.keys_in(TraversalOrder::PostOrder),
        vec![1, 3, 2, 6, 5, 8, 10, 9, 7]
    );
    assert_eq!(
        balanced.display_colored().to_string(),
        "7B 5R 2B 1R 3R 6B 9B 8R 10R"
    );
}

// =============================================================================
// Map surface
// =============================================================================

#[rstest]
fn test_map_lookups_and_neighbours() {
    let tree: RedBlackTree<i32, &str> = [(20, "twenty"), (10, "ten"), (30, "thirty")]
        .into_iter()
        .collect();
    assert_eq!(tree.get(&10), Some(&"ten"));
    assert_eq!(
        tree.find_successor(&10).unwrap().map(|node| *node.value()),
        Some("twenty")
    );
    assert_eq!(
        tree.find_predecessor(&30).unwrap().map(|node| *node.key()),
        Some(20)
    );
    assert_eq!(tree.find_min().map(|node| node.color()), Ok(Color::Red));
}

#[rstest]
fn test_map_into_iter_and_back() {
    let tree: RedBlackTree<i32, i32> = (0..50).map(|key| (key, key * key)).collect();
    let rebuilt: RedBlackTree<i32, i32> = tree.clone().into_iter().collect();
    assert_eq!(tree, rebuilt);
    assert!(rebuilt.validate().is_ok());
}
