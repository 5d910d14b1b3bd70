//! Ordered set based on [`RedBlackTree`].
//!
//! [`RedBlackSet`] stores keys only and exposes the tree engine directly:
//! balancing insert and delete, point and neighbour lookups, the three
//! traversal orders, the rotation primitives, and invariant checking.
//!
//! # Examples
//!
//! ```rust
//! use redblack::{Color, RedBlackSet};
//!
//! let mut set = RedBlackSet::new();
//! for key in [7, 5, 9, 3, 6, 8, 10, 1, 2] {
//!     set.insert(key);
//! }
//! assert_eq!(set.display_colored().to_string(), "7B 5R 2B 1R 3R 6B 9B 8R 10R");
//!
//! set.delete(&6).unwrap();
//! set.delete(&7).unwrap();
//! assert_eq!(set.display_colored().to_string(), "8B 2R 1B 5B 3R 9B 10R");
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::iter::FromIterator;

use crate::error::TreeError;
use crate::node::{NodeId, NodeRef};
use crate::traversal::{ColoredPreorder, Keys, Traversal, TraversalOrder};
use crate::tree::RedBlackTree;
use crate::validate::InvariantViolation;

/// An ordered set of keys backed by a red-black tree.
///
/// Equal keys may coexist, exactly as in [`RedBlackTree::insert`].
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RedBlackSet<K> {
    tree: RedBlackTree<K, ()>,
}

impl<K> RedBlackSet<K> {
    /// Creates a new empty set.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            tree: RedBlackTree::new(),
        }
    }

    /// Creates an empty set with room for `capacity` keys.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tree: RedBlackTree::with_capacity(capacity),
        }
    }

    /// Returns the number of keys in the set.
    #[inline]
    pub const fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the set is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// The underlying tree.
    pub const fn as_tree(&self) -> &RedBlackTree<K, ()> {
        &self.tree
    }

    /// The root node, or `None` if the set is empty.
    pub fn root(&self) -> Option<NodeRef<'_, K, ()>> {
        self.tree.root()
    }

    /// A view of the node `id`, or `None` if it is not a live node.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_, K, ()>> {
        self.tree.node(id)
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Starts a lazy traversal in `order`.
    pub fn traverse(&self, order: TraversalOrder) -> Traversal<'_, K, ()> {
        self.tree.traverse(order)
    }

    /// Shorthand for `traverse(TraversalOrder::PreOrder)`.
    pub fn preorder(&self) -> Traversal<'_, K, ()> {
        self.tree.preorder()
    }

    /// Shorthand for `traverse(TraversalOrder::InOrder)`.
    pub fn inorder(&self) -> Traversal<'_, K, ()> {
        self.tree.inorder()
    }

    /// Shorthand for `traverse(TraversalOrder::PostOrder)`.
    pub fn postorder(&self) -> Traversal<'_, K, ()> {
        self.tree.postorder()
    }

    /// Returns an iterator over the keys in ascending order.
    pub fn iter(&self) -> Keys<'_, K, ()> {
        self.tree.keys()
    }

    /// Collects the keys in `order`.
    pub fn keys_in(&self, order: TraversalOrder) -> Vec<K>
    where
        K: Clone,
    {
        self.tree.keys_in(order)
    }

    /// Renders the set in pre-order as `key` + color tag.
    pub fn display_colored(&self) -> ColoredPreorder<'_, K, ()> {
        self.tree.display_colored()
    }

    /// Rotates `node` to the left. See [`RedBlackTree::rotate_left`].
    ///
    /// # Errors
    ///
    /// [`TreeError::InvalidRotation`] if `node` has no right child.
    pub fn rotate_left(&mut self, node: NodeId) -> Result<(), TreeError> {
        self.tree.rotate_left(node)
    }

    /// Rotates `node` to the right. See [`RedBlackTree::rotate_right`].
    ///
    /// # Errors
    ///
    /// [`TreeError::InvalidRotation`] if `node` has no left child.
    pub fn rotate_right(&mut self, node: NodeId) -> Result<(), TreeError> {
        self.tree.rotate_right(node)
    }
}

impl<K: Ord> RedBlackSet<K> {
    /// Inserts `key` and rebalances. Returns the id of the new node.
    pub fn insert(&mut self, key: K) -> NodeId {
        self.tree.insert(key, ())
    }

    /// Inserts `key` without rebalancing. See [`RedBlackTree::insert_unbalanced`].
    pub fn insert_unbalanced(&mut self, key: K) -> NodeId {
        self.tree.insert_unbalanced(key, ())
    }

    /// Removes `key` and returns the stored key.
    ///
    /// # Errors
    ///
    /// [`TreeError::KeyNotFound`] if `key` is absent or the set is empty.
    pub fn delete<Q>(&mut self, key: &Q) -> Result<K, TreeError>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.delete(key).map(|(key, ())| key)
    }

    /// Returns `true` if the set contains `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.contains_key(key)
    }

    /// Finds the node holding `key`.
    pub fn find<Q>(&self, key: &Q) -> Option<NodeRef<'_, K, ()>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.find(key)
    }

    /// The node with the smallest key.
    ///
    /// # Errors
    ///
    /// [`TreeError::KeyNotFound`] if the set is empty.
    pub fn find_min(&self) -> Result<NodeRef<'_, K, ()>, TreeError> {
        self.tree.find_min()
    }

    /// The node with the largest key.
    ///
    /// # Errors
    ///
    /// [`TreeError::KeyNotFound`] if the set is empty.
    pub fn find_max(&self) -> Result<NodeRef<'_, K, ()>, TreeError> {
        self.tree.find_max()
    }

    /// The smallest key.
    pub fn first(&self) -> Option<&K> {
        self.tree.min().map(|(key, ())| key)
    }

    /// The largest key.
    pub fn last(&self) -> Option<&K> {
        self.tree.max().map(|(key, ())| key)
    }

    /// The in-order successor of `key`, `Ok(None)` if `key` is the largest.
    ///
    /// # Errors
    ///
    /// [`TreeError::KeyNotFound`] if `key` is absent.
    pub fn find_successor<Q>(&self, key: &Q) -> Result<Option<NodeRef<'_, K, ()>>, TreeError>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.find_successor(key)
    }

    /// The in-order predecessor of `key`, `Ok(None)` if `key` is the smallest.
    ///
    /// # Errors
    ///
    /// [`TreeError::KeyNotFound`] if `key` is absent.
    pub fn find_predecessor<Q>(&self, key: &Q) -> Result<Option<NodeRef<'_, K, ()>>, TreeError>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.find_predecessor(key)
    }

    /// Checks every invariant; see [`RedBlackTree::validate`].
    ///
    /// # Errors
    ///
    /// The first [`InvariantViolation`] found.
    pub fn validate(&self) -> Result<usize, InvariantViolation> {
        self.tree.validate()
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An owning iterator over the keys of a [`RedBlackSet`] in ascending order.
pub struct IntoIter<K> {
    inner: crate::traversal::IntoIter<K, ()>,
}

impl<K> Iterator for IntoIter<K> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, ())| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K> ExactSizeIterator for IntoIter<K> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K> IntoIterator for RedBlackSet<K> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.tree.into_iter(),
        }
    }
}

impl<'a, K> IntoIterator for &'a RedBlackSet<K> {
    type Item = &'a K;
    type IntoIter = Keys<'a, K, ()>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K> Default for RedBlackSet<K> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> FromIterator<K> for RedBlackSet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<K: Ord> Extend<K> for RedBlackSet<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for RedBlackSet<K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display> fmt::Display for RedBlackSet<K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for key in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K: serde::Serialize> serde::Serialize for RedBlackSet<K> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, K> serde::Deserialize<'de> for RedBlackSet<K>
where
    K: serde::Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let keys: Vec<K> = serde::Deserialize::deserialize(deserializer)?;
        Ok(keys.into_iter().collect())
    }
}

// =============================================================================
// Tests
// =============================================================================
