//! Deletion: splice out a node (or its in-order successor) and run the
//! delete fixup when a black node left its position.

use std::borrow::Borrow;

use log::trace;

use super::RedBlackTree;
use crate::color::Color;
use crate::error::TreeError;
use crate::node::{Direction, NodeId};

impl<K: Ord, V> RedBlackTree<K, V> {
    /// Removes the entry stored under `key` and returns it.
    ///
    /// With duplicate keys, the first node met on the search path is removed.
    ///
    /// # Errors
    ///
    /// [`TreeError::KeyNotFound`] if `key` is absent or the tree is empty;
    /// the tree is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::{RedBlackTree, TreeError};
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(1, "one");
    /// assert_eq!(tree.delete(&1), Ok((1, "one")));
    /// assert_eq!(tree.delete(&1), Err(TreeError::KeyNotFound));
    /// ```
    pub fn delete<Q>(&mut self, key: &Q) -> Result<(K, V), TreeError>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let node = self.search(key);
        let entry = self.delete_node(node).ok_or(TreeError::KeyNotFound)?;
        self.debug_check_invariants();
        Ok(entry)
    }

    /// Removes `key` and returns its value, or `None` if it was absent.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.delete(key).ok().map(|(_, value)| value)
    }

    /// Unlinks the live node `removed`, rebalances, and frees its slot.
    fn delete_node(&mut self, removed: NodeId) -> Option<(K, V)> {
        if !self.arena.contains(removed) {
            return None;
        }

        let mut spliced_color = self.arena.color(removed);
        let replacement;
        if self.arena.left(removed).is_sentinel() {
            replacement = self.arena.right(removed);
            self.transplant(removed, replacement);
        } else if self.arena.right(removed).is_sentinel() {
            replacement = self.arena.left(removed);
            self.transplant(removed, replacement);
        } else {
            // Two children: the successor takes over `removed`'s position and color.
            let successor = self.minimum(self.arena.right(removed));
            spliced_color = self.arena.color(successor);
            replacement = self.arena.right(successor);
            if self.arena.parent(successor) == removed {
                self.arena.set_parent(replacement, successor);
            } else {
                self.transplant(successor, replacement);
                let right = self.arena.right(removed);
                self.arena.set_child(successor, Direction::Right, right);
                self.arena.set_parent(right, successor);
            }
            self.transplant(removed, successor);
            let left = self.arena.left(removed);
            self.arena.set_child(successor, Direction::Left, left);
            self.arena.set_parent(left, successor);
            self.arena.set_color(successor, self.arena.color(removed));
        }

        if spliced_color.is_black() {
            self.delete_fixup(replacement);
        }
        self.arena.reset_sentinel();
        self.length -= 1;
        self.arena.release(removed)
    }

    /// Pushes the extra black carried by `node` up the tree until it can be
    /// absorbed. `node` may be the sentinel, whose parent link then names the
    /// slot it occupies.
    fn delete_fixup(&mut self, mut node: NodeId) {
        while node != self.root && self.arena.is_black(node) {
            let parent = self.arena.parent(node);
            let side = self.arena.side_of(parent, node);
            let far = side.opposite();
            let mut sibling = self.arena.child(parent, far);

            if self.arena.is_red(sibling) {
                trace!("delete fixup at {node}: red sibling {sibling}, rotating {side}");
                self.arena.set_color(sibling, Color::Black);
                self.arena.set_color(parent, Color::Red);
                self.rotate(parent, side);
                sibling = self.arena.child(self.arena.parent(node), far);
            }

            if self.arena.is_black(self.arena.child(sibling, side))
                && self.arena.is_black(self.arena.child(sibling, far))
            {
                trace!("delete fixup at {node}: black nephews, moving up");
                self.arena.set_color(sibling, Color::Red);
                node = self.arena.parent(node);
                continue;
            }

            if self.arena.is_black(self.arena.child(sibling, far)) {
                trace!("delete fixup at {node}: far nephew black, rotating sibling {far}");
                let near_nephew = self.arena.child(sibling, side);
                self.arena.set_color(near_nephew, Color::Black);
                self.arena.set_color(sibling, Color::Red);
                self.rotate(sibling, far);
                sibling = self.arena.child(self.arena.parent(node), far);
            }

            trace!("delete fixup at {node}: far nephew red, rotating parent {side}");
            let parent = self.arena.parent(node);
            self.arena.set_color(sibling, self.arena.color(parent));
            self.arena.set_color(parent, Color::Black);
            let far_nephew = self.arena.child(sibling, far);
            self.arena.set_color(far_nephew, Color::Black);
            self.rotate(parent, side);
            node = self.root;
        }
        self.arena.set_color(node, Color::Black);
    }
}
