//! Mutable ordered map based on a red-black tree.
//!
//! This module provides [`RedBlackTree`], an ordered map whose nodes live in
//! an index arena with a shared black sentinel.
//!
//! # Overview
//!
//! - O(log N) insert, delete, find, successor and predecessor
//! - O(log N) min/max
//! - O(N) traversal in pre-, in- or post-order
//! - O(1) len and `is_empty`
//!
//! # Examples
//!
//! ```rust
//! use redblack::RedBlackTree;
//!
//! let mut tree = RedBlackTree::new();
//! tree.insert(3, "three");
//! tree.insert(1, "one");
//! tree.insert(2, "two");
//!
//! let keys: Vec<&i32> = tree.keys().collect();
//! assert_eq!(keys, vec![&1, &2, &3]);
//!
//! assert_eq!(tree.delete(&2), Ok((2, "two")));
//! assert!(tree.delete(&2).is_err());
//! ```
//!
//! # Internal Structure
//!
//! After every balancing insert and delete the tree satisfies:
//! 1. In-order keys are sorted; equal keys are inserted to the right
//! 2. The root, the sentinel and every empty link are black
//! 3. Red nodes have only black children
//! 4. Every path from a node down to the sentinel has the same number of black nodes
//! 5. Every child's parent link points back at its parent; the root's at the sentinel
//!
//! [`RedBlackTree::validate`] checks all of them.

mod delete;
mod insert;
mod rotation;

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use crate::arena::Arena;
use crate::error::TreeError;
use crate::node::{NodeId, NodeRef};
use crate::traversal::{ColoredPreorder, IntoIter, Iter, Keys, Traversal, TraversalOrder, Values};

// =============================================================================
// RedBlackTree Definition
// =============================================================================

/// A mutable ordered map based on a red-black tree.
///
/// Keys must implement `Ord`. Unlike `std::collections::BTreeMap`, equal keys
/// may coexist: [`insert`](Self::insert) always adds a node, placing it after
/// existing equal keys. Use [`upsert`](Self::upsert) for replace-on-equal map
/// semantics.
///
/// # Time Complexity
///
/// | Operation        | Complexity |
/// |------------------|------------|
/// | `new`            | O(1)       |
/// | `insert`         | O(log N)   |
/// | `upsert`         | O(log N)   |
/// | `delete`         | O(log N)   |
/// | `find` / `get`   | O(log N)   |
/// | `find_successor` | O(log N)   |
/// | `find_min`/`max` | O(log N)   |
/// | `traverse`       | O(N)       |
/// | `len`            | O(1)       |
///
/// # Examples
///
/// ```rust
/// use redblack::{Color, RedBlackTree};
///
/// let mut tree = RedBlackTree::new();
/// tree.insert(42, "answer");
///
/// let root = tree.root().unwrap();
/// assert_eq!(root.key(), &42);
/// assert_eq!(root.color(), Color::Black);
/// ```
#[derive(Clone)]
pub struct RedBlackTree<K, V> {
    /// Node storage; slot 0 is the sentinel
    pub(crate) arena: Arena<K, V>,
    /// Root node, the sentinel when empty
    pub(crate) root: NodeId,
    /// Number of entries
    pub(crate) length: usize,
}

impl<K, V> RedBlackTree<K, V> {
    /// Creates a new empty tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32, String> = RedBlackTree::new();
    /// assert!(tree.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty tree with room for `capacity` nodes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            root: NodeId::SENTINEL,
            length: 0,
        }
    }

    /// Returns the number of entries in the tree.
    #[inline]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the tree contains no entries.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Number of nodes the tree can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = NodeId::SENTINEL;
        self.length = 0;
    }

    // -------------------------------------------------------------------------
    // Structure access
    // -------------------------------------------------------------------------

    /// The root node, or `None` if the tree is empty.
    pub fn root(&self) -> Option<NodeRef<'_, K, V>> {
        NodeRef::new(&self.arena, self.root)
    }

    /// A view of the node `id`, or `None` if it is not a live node.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_, K, V>> {
        NodeRef::new(&self.arena, id)
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty).
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self.root, 1_usize)];
        while let Some((id, depth)) = stack.pop() {
            if id.is_sentinel() {
                continue;
            }
            deepest = deepest.max(depth);
            stack.push((self.arena.left(id), depth + 1));
            stack.push((self.arena.right(id), depth + 1));
        }
        deepest
    }

    // -------------------------------------------------------------------------
    // Traversal
    // -------------------------------------------------------------------------

    /// Starts a lazy traversal of the whole tree in `order`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::{RedBlackTree, TraversalOrder};
    ///
    /// let tree: RedBlackTree<i32, ()> = [(2, ()), (1, ()), (3, ())].into_iter().collect();
    /// let preorder: Vec<i32> = tree
    ///     .traverse(TraversalOrder::PreOrder)
    ///     .map(|node| *node.key())
    ///     .collect();
    /// assert_eq!(preorder, vec![2, 1, 3]);
    /// ```
    pub fn traverse(&self, order: TraversalOrder) -> Traversal<'_, K, V> {
        Traversal::new(&self.arena, self.root, order, self.length)
    }

    /// Shorthand for `traverse(TraversalOrder::PreOrder)`.
    pub fn preorder(&self) -> Traversal<'_, K, V> {
        self.traverse(TraversalOrder::PreOrder)
    }

    /// Shorthand for `traverse(TraversalOrder::InOrder)`.
    pub fn inorder(&self) -> Traversal<'_, K, V> {
        self.traverse(TraversalOrder::InOrder)
    }

    /// Shorthand for `traverse(TraversalOrder::PostOrder)`.
    pub fn postorder(&self) -> Traversal<'_, K, V> {
        self.traverse(TraversalOrder::PostOrder)
    }

    /// Returns an in-order iterator over the entries.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.inorder())
    }

    /// Returns an in-order iterator over the keys.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(self.inorder())
    }

    /// Returns an in-order iterator over the values.
    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(self.inorder())
    }

    /// Collects the keys in `order`.
    pub fn keys_in(&self, order: TraversalOrder) -> Vec<K>
    where
        K: Clone,
    {
        self.traverse(order).map(|node| node.key().clone()).collect()
    }

    /// Renders the tree in pre-order as `key` + color tag.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32, ()> = (1..=4).map(|key| (key, ())).collect();
    /// assert_eq!(tree.display_colored().to_string(), "2B 1B 3B 4R");
    /// ```
    pub fn display_colored(&self) -> ColoredPreorder<'_, K, V> {
        ColoredPreorder::new(self.preorder())
    }

    // -------------------------------------------------------------------------
    // Internal navigation
    // -------------------------------------------------------------------------

    /// Leftmost node of the subtree rooted at `id`; the sentinel maps to itself.
    fn minimum(&self, mut id: NodeId) -> NodeId {
        while !self.arena.left(id).is_sentinel() {
            id = self.arena.left(id);
        }
        id
    }

    fn maximum(&self, mut id: NodeId) -> NodeId {
        while !self.arena.right(id).is_sentinel() {
            id = self.arena.right(id);
        }
        id
    }

    /// In-order successor of a real node, or the sentinel if it is the last.
    fn successor(&self, id: NodeId) -> NodeId {
        let right = self.arena.right(id);
        if !right.is_sentinel() {
            return self.minimum(right);
        }
        let mut current = id;
        let mut parent = self.arena.parent(current);
        while !parent.is_sentinel() && current == self.arena.right(parent) {
            current = parent;
            parent = self.arena.parent(parent);
        }
        parent
    }

    fn predecessor(&self, id: NodeId) -> NodeId {
        let left = self.arena.left(id);
        if !left.is_sentinel() {
            return self.maximum(left);
        }
        let mut current = id;
        let mut parent = self.arena.parent(current);
        while !parent.is_sentinel() && current == self.arena.left(parent) {
            current = parent;
            parent = self.arena.parent(parent);
        }
        parent
    }

    /// Re-points whichever link referenced `old` (a parent's child link, or
    /// the root) at `new`, and sets `new`'s parent. `new` may be the sentinel.
    fn transplant(&mut self, old: NodeId, new: NodeId) {
        let parent = self.arena.parent(old);
        if parent.is_sentinel() {
            self.root = new;
        } else {
            let side = self.arena.side_of(parent, old);
            self.arena.set_child(parent, side, new);
        }
        self.arena.set_parent(new, parent);
    }
}

// =============================================================================
// Search
// =============================================================================

impl<K: Ord, V> RedBlackTree<K, V> {
    /// Walks from the root to the first node whose key equals `key`,
    /// returning the sentinel on a miss.
    fn search<Q>(&self, key: &Q) -> NodeId
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root;
        while let Some(current_key) = self.arena.key(current) {
            current = match key.cmp(current_key.borrow()) {
                Ordering::Less => self.arena.left(current),
                Ordering::Greater => self.arena.right(current),
                Ordering::Equal => return current,
            };
        }
        NodeId::SENTINEL
    }

    /// Finds the node holding `key`.
    ///
    /// The key may be any borrowed form of the tree's key type, but the
    /// ordering on the borrowed form must match the ordering on the key type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert("hello".to_string(), 42);
    ///
    /// assert_eq!(tree.find("hello").map(|node| *node.value()), Some(42));
    /// assert!(tree.find("world").is_none());
    /// ```
    pub fn find<Q>(&self, key: &Q) -> Option<NodeRef<'_, K, V>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.node(self.search(key))
    }

    /// Returns a reference to the value stored under `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.arena.entry(self.search(key)).map(|(_, value)| value)
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let id = self.search(key);
        self.arena.entry_mut(id).map(|(_, value)| value)
    }

    /// Returns `true` if the tree contains `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        !self.search(key).is_sentinel()
    }

    /// The node with the smallest key.
    ///
    /// # Errors
    ///
    /// [`TreeError::KeyNotFound`] if the tree is empty.
    pub fn find_min(&self) -> Result<NodeRef<'_, K, V>, TreeError> {
        self.node(self.minimum(self.root))
            .ok_or(TreeError::KeyNotFound)
    }

    /// The node with the largest key.
    ///
    /// # Errors
    ///
    /// [`TreeError::KeyNotFound`] if the tree is empty.
    pub fn find_max(&self) -> Result<NodeRef<'_, K, V>, TreeError> {
        self.node(self.maximum(self.root))
            .ok_or(TreeError::KeyNotFound)
    }

    /// The smallest entry.
    pub fn min(&self) -> Option<(&K, &V)> {
        self.find_min().ok().map(|node| (node.key(), node.value()))
    }

    /// The largest entry.
    pub fn max(&self) -> Option<(&K, &V)> {
        self.find_max().ok().map(|node| (node.key(), node.value()))
    }

    /// The in-order successor of the node holding `key`.
    ///
    /// Returns `Ok(None)` if `key` is the largest key.
    ///
    /// # Errors
    ///
    /// [`TreeError::KeyNotFound`] if `key` is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::{RedBlackTree, TreeError};
    ///
    /// let tree: RedBlackTree<i32, ()> = [(1, ()), (5, ()), (9, ())].into_iter().collect();
    /// assert_eq!(tree.find_successor(&1).unwrap().map(|node| *node.key()), Some(5));
    /// assert!(tree.find_successor(&9).unwrap().is_none());
    /// assert_eq!(tree.find_successor(&4).unwrap_err(), TreeError::KeyNotFound);
    /// ```
    pub fn find_successor<Q>(&self, key: &Q) -> Result<Option<NodeRef<'_, K, V>>, TreeError>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let id = self.search(key);
        if id.is_sentinel() {
            return Err(TreeError::KeyNotFound);
        }
        Ok(self.node(self.successor(id)))
    }

    /// The in-order predecessor of the node holding `key`.
    ///
    /// Returns `Ok(None)` if `key` is the smallest key.
    ///
    /// # Errors
    ///
    /// [`TreeError::KeyNotFound`] if `key` is absent.
    pub fn find_predecessor<Q>(&self, key: &Q) -> Result<Option<NodeRef<'_, K, V>>, TreeError>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let id = self.search(key);
        if id.is_sentinel() {
            return Err(TreeError::KeyNotFound);
        }
        Ok(self.node(self.predecessor(id)))
    }

    /// Runs [`validate`](Self::validate) after a balancing mutation when the
    /// `debug-invariants` feature is enabled.
    #[inline]
    #[cfg_attr(not(feature = "debug-invariants"), allow(clippy::unused_self))]
    fn debug_check_invariants(&self) {
        #[cfg(feature = "debug-invariants")]
        debug_assert_eq!(self.validate().err(), None, "red-black invariants violated");
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

impl<K, V> IntoIterator for RedBlackTree<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(mut self) -> Self::IntoIter {
        let order: Vec<NodeId> = self.inorder().map(|node| node.id()).collect();
        let entries = order
            .into_iter()
            .filter_map(|id| self.arena.release(id))
            .collect();
        IntoIter::new(entries)
    }
}

impl<'a, K, V> IntoIterator for &'a RedBlackTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Default for RedBlackTree<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for RedBlackTree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord, V> Extend<(K, V)> for RedBlackTree<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for RedBlackTree<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for RedBlackTree<K, V> {}

impl<K: Hash, V: Hash> Hash for RedBlackTree<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for (key, value) in self {
            key.hash(state);
            value.hash(state);
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for RedBlackTree<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for RedBlackTree<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V> serde::Serialize for RedBlackTree<K, V>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct RedBlackTreeVisitor<K, V> {
    marker: std::marker::PhantomData<(K, V)>,
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::de::Visitor<'de> for RedBlackTreeVisitor<K, V>
where
    K: serde::Deserialize<'de> + Ord,
    V: serde::Deserialize<'de>,
{
    type Value = RedBlackTree<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        // The size hint is untrusted; the arena grows one entry at a time.
        let mut tree = RedBlackTree::new();
        while let Some((key, value)) = access.next_entry()? {
            tree.upsert(key, value);
        }
        Ok(tree)
    }
}

/// Deserializes from a map. A key repeated in the input keeps its last value.
#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for RedBlackTree<K, V>
where
    K: serde::Deserialize<'de> + Ord,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(RedBlackTreeVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
