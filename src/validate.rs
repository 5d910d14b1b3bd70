//! Structural diagnostics.
//!
//! [`RedBlackTree::validate`] walks the whole tree and reports the first
//! broken invariant it finds. It is O(N) and meant for tests and debugging;
//! the `debug-invariants` feature runs it after every balancing mutation.

use std::fmt;

use crate::node::{Links, NodeId};
use crate::tree::RedBlackTree;

/// A red-black or structural invariant that does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    /// The sentinel is not black.
    SentinelRecolored,
    /// The sentinel's links do not all point back at the sentinel.
    SentinelLinksCorrupted,
    /// The root's parent link is not the sentinel.
    RootParentNotSentinel,
    /// The root is red.
    RedRoot,
    /// A child's parent link does not point at the node holding it.
    BrokenParentLink {
        /// The child with the wrong parent link.
        node: NodeId,
    },
    /// A key is out of order relative to one of its ancestors.
    OrderViolation {
        /// The misplaced node.
        node: NodeId,
    },
    /// A red node has a red child.
    RedChildOfRed {
        /// The red parent.
        node: NodeId,
    },
    /// The two subtrees of a node have different black heights.
    BlackHeightMismatch {
        /// The node whose subtrees disagree.
        node: NodeId,
    },
    /// The number of reachable nodes differs from the recorded length.
    LengthMismatch {
        /// The recorded length.
        expected: usize,
        /// The number of nodes reachable from the root.
        actual: usize,
    },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SentinelRecolored => write!(formatter, "sentinel is not black"),
            Self::SentinelLinksCorrupted => {
                write!(formatter, "sentinel links do not point at the sentinel")
            }
            Self::RootParentNotSentinel => {
                write!(formatter, "root parent is not the sentinel")
            }
            Self::RedRoot => write!(formatter, "root is red"),
            Self::BrokenParentLink { node } => {
                write!(formatter, "parent link of {node} does not match its parent")
            }
            Self::OrderViolation { node } => write!(formatter, "key of {node} is out of order"),
            Self::RedChildOfRed { node } => write!(formatter, "red node {node} has a red child"),
            Self::BlackHeightMismatch { node } => {
                write!(formatter, "subtrees of {node} have different black heights")
            }
            Self::LengthMismatch { expected, actual } => write!(
                formatter,
                "tree records {expected} entries but {actual} are reachable"
            ),
        }
    }
}

impl std::error::Error for InvariantViolation {}

impl<K: Ord, V> RedBlackTree<K, V> {
    /// Checks every invariant and returns the black height of the root
    /// (counting the sentinel, so an empty tree has black height 1).
    ///
    /// Keys equal to a node's key may appear on either side of it after
    /// rotations; order is checked as `left <= key <= right`.
    ///
    /// # Errors
    ///
    /// The first [`InvariantViolation`] found.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::{InvariantViolation, RedBlackTree};
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(2, ());
    /// tree.insert(1, ());
    /// assert_eq!(tree.validate(), Ok(2));
    ///
    /// let mut unbalanced = RedBlackTree::new();
    /// unbalanced.insert_unbalanced(1, ());
    /// assert_eq!(unbalanced.validate(), Err(InvariantViolation::RedRoot));
    /// ```
    pub fn validate(&self) -> Result<usize, InvariantViolation> {
        let sentinel = self.arena.links(NodeId::SENTINEL);
        if sentinel.color.is_red() {
            return Err(InvariantViolation::SentinelRecolored);
        }
        if *sentinel != Links::SENTINEL {
            return Err(InvariantViolation::SentinelLinksCorrupted);
        }
        if !self.root.is_sentinel() {
            if !self.arena.parent(self.root).is_sentinel() {
                return Err(InvariantViolation::RootParentNotSentinel);
            }
            if self.arena.is_red(self.root) {
                return Err(InvariantViolation::RedRoot);
            }
        }

        let mut reachable = 0;
        let black_height = self.check_subtree(self.root, None, None, &mut reachable)?;
        if reachable != self.length {
            return Err(InvariantViolation::LengthMismatch {
                expected: self.length,
                actual: reachable,
            });
        }
        Ok(black_height)
    }

    /// Returns the black height of the subtree at `id`, counting the sentinel.
    fn check_subtree(
        &self,
        id: NodeId,
        lower: Option<&K>,
        upper: Option<&K>,
        reachable: &mut usize,
    ) -> Result<usize, InvariantViolation> {
        let Some(key) = self.arena.key(id) else {
            return Ok(1);
        };
        *reachable += 1;

        if lower.is_some_and(|lower| key < lower) || upper.is_some_and(|upper| key > upper) {
            return Err(InvariantViolation::OrderViolation { node: id });
        }

        let left = self.arena.left(id);
        let right = self.arena.right(id);
        for child in [left, right] {
            if !child.is_sentinel() && self.arena.parent(child) != id {
                return Err(InvariantViolation::BrokenParentLink { node: child });
            }
        }
        if self.arena.is_red(id) && (self.arena.is_red(left) || self.arena.is_red(right)) {
            return Err(InvariantViolation::RedChildOfRed { node: id });
        }

        let left_height = self.check_subtree(left, lower, Some(key), reachable)?;
        let right_height = self.check_subtree(right, Some(key), upper, reachable)?;
        if left_height != right_height {
            return Err(InvariantViolation::BlackHeightMismatch { node: id });
        }
        Ok(left_height + usize::from(self.arena.is_black(id)))
    }
}
