//! Depth-first traversals and the in-order iterators built on them.
//!
//! Every traversal is lazy and driven by an explicit stack, so a call to
//! [`RedBlackTree::traverse`](crate::RedBlackTree::traverse) costs nothing
//! until the first `next`, and each call starts a fresh sequence.

use std::fmt;
use std::iter::FusedIterator;

use smallvec::SmallVec;

use crate::arena::Arena;
use crate::node::{NodeId, NodeRef};

/// Depth of the inline traversal stack; a balanced tree needs about
/// `2 * log2(n)` frames, so trees of many thousands of nodes never spill.
const INLINE_FRAMES: usize = 48;

/// Depth-first visiting order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TraversalOrder {
    /// Node, then left subtree, then right subtree.
    PreOrder,
    /// Left subtree, then node, then right subtree. Yields sorted keys.
    InOrder,
    /// Left subtree, then right subtree, then node.
    PostOrder,
}

#[derive(Clone, Copy, Debug)]
enum Frame {
    /// Expand this subtree according to the traversal order.
    Descend(NodeId),
    /// Yield this node.
    Emit(NodeId),
}

// =============================================================================
// Traversal
// =============================================================================

/// A lazy depth-first traversal yielding [`NodeRef`]s.
///
/// The sentinel is never yielded.
pub struct Traversal<'a, K, V> {
    arena: &'a Arena<K, V>,
    order: TraversalOrder,
    stack: SmallVec<[Frame; INLINE_FRAMES]>,
    remaining: usize,
}

impl<'a, K, V> Traversal<'a, K, V> {
    pub(crate) fn new(
        arena: &'a Arena<K, V>,
        root: NodeId,
        order: TraversalOrder,
        length: usize,
    ) -> Self {
        let mut stack = SmallVec::new();
        if !root.is_sentinel() {
            stack.push(Frame::Descend(root));
        }
        Self {
            arena,
            order,
            stack,
            remaining: length,
        }
    }

    /// The order this traversal visits nodes in.
    pub const fn order(&self) -> TraversalOrder {
        self.order
    }

    fn push_subtree(&mut self, id: NodeId) {
        if !id.is_sentinel() {
            self.stack.push(Frame::Descend(id));
        }
    }
}

impl<'a, K, V> Iterator for Traversal<'a, K, V> {
    type Item = NodeRef<'a, K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.stack.pop()? {
                Frame::Emit(id) => {
                    self.remaining = self.remaining.saturating_sub(1);
                    return NodeRef::new(self.arena, id);
                }
                Frame::Descend(id) => {
                    let left = self.arena.left(id);
                    let right = self.arena.right(id);
                    // Frames are pushed in reverse visiting order.
                    match self.order {
                        TraversalOrder::PreOrder => {
                            self.push_subtree(right);
                            self.push_subtree(left);
                            self.stack.push(Frame::Emit(id));
                        }
                        TraversalOrder::InOrder => {
                            self.push_subtree(right);
                            self.stack.push(Frame::Emit(id));
                            self.push_subtree(left);
                        }
                        TraversalOrder::PostOrder => {
                            self.stack.push(Frame::Emit(id));
                            self.push_subtree(right);
                            self.push_subtree(left);
                        }
                    }
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Traversal<'_, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for Traversal<'_, K, V> {}

impl<K, V> Clone for Traversal<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            order: self.order,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<K, V> fmt::Debug for Traversal<'_, K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Traversal")
            .field("order", &self.order)
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// In-order iterators
// =============================================================================

/// An in-order iterator over the entries of a tree.
pub struct Iter<'a, K, V> {
    inner: Traversal<'a, K, V>,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) const fn new(inner: Traversal<'a, K, V>) -> Self {
        Self { inner }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|node| (node.key(), node.value()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// An in-order iterator over the keys of a tree.
pub struct Keys<'a, K, V> {
    inner: Traversal<'a, K, V>,
}

impl<'a, K, V> Keys<'a, K, V> {
    pub(crate) const fn new(inner: Traversal<'a, K, V>) -> Self {
        Self { inner }
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|node| node.key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// An in-order iterator over the values of a tree.
pub struct Values<'a, K, V> {
    inner: Traversal<'a, K, V>,
}

impl<'a, K, V> Values<'a, K, V> {
    pub(crate) const fn new(inner: Traversal<'a, K, V>) -> Self {
        Self { inner }
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|node| node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Values<'_, K, V> {}

/// An owning in-order iterator over the entries of a tree.
pub struct IntoIter<K, V> {
    entries: std::vec::IntoIter<(K, V)>,
}

impl<K, V> IntoIter<K, V> {
    pub(crate) fn new(entries: Vec<(K, V)>) -> Self {
        Self {
            entries: entries.into_iter(),
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.entries.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {
    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

// =============================================================================
// Colored rendering
// =============================================================================

/// Pre-order rendering of `key` plus color tag, e.g. `7B 5R 2B`.
///
/// Returned by [`RedBlackTree::display_colored`](crate::RedBlackTree::display_colored).
pub struct ColoredPreorder<'a, K, V> {
    traversal: Traversal<'a, K, V>,
}

impl<'a, K, V> ColoredPreorder<'a, K, V> {
    pub(crate) const fn new(traversal: Traversal<'a, K, V>) -> Self {
        Self { traversal }
    }
}

impl<K: fmt::Display, V> fmt::Display for ColoredPreorder<'_, K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for node in self.traversal.clone() {
            if first {
                first = false;
            } else {
                formatter.write_str(" ")?;
            }
            write!(formatter, "{}{}", node.key(), node.color().tag())?;
        }
        Ok(())
    }
}
