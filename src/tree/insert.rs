//! Insertion: BST placement of a red leaf followed by the insert fixup.

use log::trace;

use super::RedBlackTree;
use crate::color::Color;
use crate::node::{Direction, NodeId};

impl<K: Ord, V> RedBlackTree<K, V> {
    /// Inserts an entry and rebalances.
    ///
    /// Equal keys are allowed; the new entry is placed after the existing
    /// ones in key order. Returns the id of the new node, which stays valid
    /// until the next mutating call.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// for key in 1..=7 {
    ///     tree.insert(key, ());
    /// }
    /// assert_eq!(tree.display_colored().to_string(), "2B 1B 4R 3B 6B 5R 7R");
    /// assert!(tree.validate().is_ok());
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> NodeId {
        let node = self.place(key, value);
        self.insert_fixup(node);
        self.debug_check_invariants();
        node
    }

    /// Replaces the value stored under `key`, or inserts a new entry.
    ///
    /// Returns the previous value if the key was present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// assert_eq!(tree.upsert(1, "one"), None);
    /// assert_eq!(tree.upsert(1, "ONE"), Some("one"));
    /// assert_eq!(tree.len(), 1);
    /// assert_eq!(tree.get(&1), Some(&"ONE"));
    /// ```
    pub fn upsert(&mut self, key: K, value: V) -> Option<V> {
        let existing = self.search(&key);
        if let Some((_, slot)) = self.arena.entry_mut(existing) {
            return Some(std::mem::replace(slot, value));
        }
        self.insert(key, value);
        None
    }

    /// Inserts an entry as a plain binary search tree would, without any
    /// recoloring or rotation.
    ///
    /// The new node is red, including when it becomes the root, so the
    /// result is generally not a valid red-black tree. This exists to build
    /// exact shapes for exercising [`rotate_left`](Self::rotate_left) and
    /// [`rotate_right`](Self::rotate_right).
    pub fn insert_unbalanced(&mut self, key: K, value: V) -> NodeId {
        self.place(key, value)
    }

    /// Links a new red leaf at the BST position for `key`.
    fn place(&mut self, key: K, value: V) -> NodeId {
        let mut parent = NodeId::SENTINEL;
        let mut side = Direction::Left;
        let mut current = self.root;
        while let Some(current_key) = self.arena.key(current) {
            parent = current;
            side = if key < *current_key {
                Direction::Left
            } else {
                Direction::Right
            };
            current = self.arena.child(current, side);
        }

        let node = self.arena.allocate(key, value, parent);
        if parent.is_sentinel() {
            self.root = node;
        } else {
            self.arena.set_child(parent, side, node);
        }
        self.length += 1;
        node
    }

    /// Restores the red-black properties after `node` was placed as a red leaf.
    fn insert_fixup(&mut self, mut node: NodeId) {
        while self.arena.is_red(self.arena.parent(node)) {
            let parent = self.arena.parent(node);
            // A red parent is never the root, so the grandparent is real.
            let grandparent = self.arena.parent(parent);
            let side = self.arena.side_of(grandparent, parent);
            let uncle = self.arena.child(grandparent, side.opposite());

            if self.arena.is_red(uncle) {
                trace!("insert fixup at {node}: red uncle {uncle}, recoloring");
                self.arena.set_color(parent, Color::Black);
                self.arena.set_color(uncle, Color::Black);
                self.arena.set_color(grandparent, Color::Red);
                node = grandparent;
                continue;
            }

            if node == self.arena.child(parent, side.opposite()) {
                trace!("insert fixup at {node}: inner grandchild, rotating {side}");
                node = parent;
                self.rotate(node, side);
            }

            trace!("insert fixup at {node}: outer grandchild, rotating grandparent");
            let parent = self.arena.parent(node);
            let grandparent = self.arena.parent(parent);
            self.arena.set_color(parent, Color::Black);
            self.arena.set_color(grandparent, Color::Red);
            self.rotate(grandparent, side.opposite());
        }
        self.arena.set_color(self.root, Color::Black);
    }
}
