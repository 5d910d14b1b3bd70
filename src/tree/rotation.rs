//! The two shape-changing primitives.
//!
//! Every rebalancing step in insertion and deletion is a sequence of
//! recolorings and calls to [`RedBlackTree::rotate`]. Rotations preserve the
//! in-order key sequence and never touch colors.

use log::trace;

use super::RedBlackTree;
use crate::error::TreeError;
use crate::node::{Direction, NodeId};

impl<K, V> RedBlackTree<K, V> {
    /// Rotates `node` to the left, promoting its right child.
    ///
    /// ```text
    ///     x                y
    ///    / \              / \
    ///   a   y     =>     x   c
    ///      / \          / \
    ///     b   c        a   b
    /// ```
    ///
    /// Rotating a valid red-black tree by hand generally breaks its coloring;
    /// this is exposed for inspection and testing.
    ///
    /// # Errors
    ///
    /// [`TreeError::InvalidRotation`] if `node` is not a live node or has no
    /// right child. The tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::{RedBlackTree, TraversalOrder};
    ///
    /// let mut tree = RedBlackTree::new();
    /// for key in [2, 1, 3] {
    ///     tree.insert_unbalanced(key, ());
    /// }
    /// let root = tree.root().unwrap().id();
    /// tree.rotate_left(root).unwrap();
    /// assert_eq!(tree.keys_in(TraversalOrder::PreOrder), vec![3, 2, 1]);
    /// ```
    pub fn rotate_left(&mut self, node: NodeId) -> Result<(), TreeError> {
        self.checked_rotate(node, Direction::Left)
    }

    /// Rotates `node` to the right, promoting its left child.
    ///
    /// Mirror image of [`rotate_left`](Self::rotate_left).
    ///
    /// # Errors
    ///
    /// [`TreeError::InvalidRotation`] if `node` is not a live node or has no
    /// left child. The tree is left untouched.
    pub fn rotate_right(&mut self, node: NodeId) -> Result<(), TreeError> {
        self.checked_rotate(node, Direction::Right)
    }

    fn checked_rotate(&mut self, node: NodeId, direction: Direction) -> Result<(), TreeError> {
        if !self.arena.contains(node) || self.arena.child(node, direction.opposite()).is_sentinel()
        {
            return Err(TreeError::InvalidRotation { node, direction });
        }
        self.rotate(node, direction);
        Ok(())
    }

    /// Rotates `node` in `direction`. The child on the opposite side must be
    /// a real node; fixups only rotate where that holds.
    pub(super) fn rotate(&mut self, node: NodeId, direction: Direction) {
        let pivot = self.arena.child(node, direction.opposite());
        debug_assert!(!pivot.is_sentinel(), "rotation pivot must be a real node");
        if pivot.is_sentinel() {
            return;
        }
        trace!("rotate {direction} at {node}, promoting {pivot}");

        let inner = self.arena.child(pivot, direction);
        self.arena.set_child(node, direction.opposite(), inner);
        if !inner.is_sentinel() {
            self.arena.set_parent(inner, node);
        }

        self.transplant(node, pivot);

        self.arena.set_child(pivot, direction, node);
        self.arena.set_parent(node, pivot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traversal::TraversalOrder;
    use rstest::rstest;

    fn unbalanced(keys: &[i32]) -> RedBlackTree<i32, ()> {
        let mut tree = RedBlackTree::new();
        for &key in keys {
            tree.insert_unbalanced(key, ());
        }
        tree
    }

    fn id_of(tree: &RedBlackTree<i32, ()>, key: i32) -> NodeId {
        tree.find(&key).map(|node| node.id()).unwrap()
    }

    #[rstest]
    fn test_rotate_left_at_root() {
        let mut tree = unbalanced(&[2, 1, 3]);
        let root = id_of(&tree, 2);
        tree.rotate_left(root).unwrap();
        assert_eq!(tree.keys_in(TraversalOrder::PreOrder), vec![3, 2, 1]);
        assert_eq!(tree.root().map(|node| *node.key()), Some(3));
        assert!(tree.root().unwrap().parent().is_none());
    }

    #[rstest]
    fn test_rotate_right_at_root() {
        let mut tree = unbalanced(&[2, 1, 3]);
        let root = id_of(&tree, 2);
        tree.rotate_right(root).unwrap();
        assert_eq!(tree.keys_in(TraversalOrder::PreOrder), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_rotate_inner_subtree_is_reattached() {
        let mut tree = unbalanced(&[7, 5, 9, 3, 6, 8, 10, 1, 2]);
        let nine = id_of(&tree, 9);
        tree.rotate_right(nine).unwrap();
        assert_eq!(
            tree.keys_in(TraversalOrder::PreOrder),
            vec![7, 5, 3, 1, 2, 6, 8, 9, 10]
        );
        let eight = tree.find(&8).unwrap();
        assert_eq!(eight.parent().map(|parent| *parent.key()), Some(7));
        assert_eq!(eight.right().map(|right| *right.key()), Some(9));
    }

    #[rstest]
    fn test_rotate_without_child_fails_untouched() {
        let mut tree = unbalanced(&[7, 5, 9, 3]);
        let five = id_of(&tree, 5);
        let before = tree.keys_in(TraversalOrder::PreOrder);
        assert_eq!(
            tree.rotate_left(five),
            Err(TreeError::InvalidRotation {
                node: five,
                direction: Direction::Left,
            })
        );
        assert_eq!(tree.keys_in(TraversalOrder::PreOrder), before);
    }

    #[rstest]
    fn test_rotate_sentinel_fails() {
        let mut tree = unbalanced(&[1, 2]);
        assert!(tree.rotate_left(NodeId::SENTINEL).is_err());
        assert!(tree.rotate_right(NodeId::SENTINEL).is_err());
    }

    #[rstest]
    fn test_rotate_left_then_right_restores_structure() {
        let mut tree = unbalanced(&[7, 5, 9, 3, 6, 8, 10]);
        let before = tree.keys_in(TraversalOrder::PreOrder);
        let five = id_of(&tree, 5);
        tree.rotate_left(five).unwrap();
        let six = id_of(&tree, 6);
        tree.rotate_right(six).unwrap();
        assert_eq!(tree.keys_in(TraversalOrder::PreOrder), before);
    }
}
