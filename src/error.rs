//! Error types returned by tree operations.

use std::fmt;

use crate::node::{Direction, NodeId};

/// Errors that can occur when operating on a [`RedBlackTree`](crate::RedBlackTree)
/// or [`RedBlackSet`](crate::RedBlackSet).
///
/// A failed operation never mutates the tree.
///
/// # Examples
///
/// ```rust
/// use redblack::{RedBlackSet, TreeError};
///
/// let mut set: RedBlackSet<i32> = RedBlackSet::new();
/// assert_eq!(set.delete(&1), Err(TreeError::KeyNotFound));
/// assert_eq!(TreeError::KeyNotFound.to_string(), "key not found");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The key is absent, or the tree is empty.
    KeyNotFound,

    /// A rotation was requested on a node lacking the child it would promote.
    ///
    /// Also returned when `node` does not name a live node of the tree.
    /// Balancing inserts and deletes never produce this error.
    InvalidRotation {
        /// The node the rotation was requested on.
        node: NodeId,
        /// The requested rotation direction.
        direction: Direction,
    },
}

impl fmt::Display for TreeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeyNotFound => write!(formatter, "key not found"),
            Self::InvalidRotation { node, direction } => {
                let required = direction.opposite();
                write!(
                    formatter,
                    "cannot rotate {direction} at {node}: the {required} child is missing"
                )
            }
        }
    }
}

impl std::error::Error for TreeError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_key_not_found_display() {
        assert_eq!(format!("{}", TreeError::KeyNotFound), "key not found");
    }

    #[rstest]
    #[case(Direction::Left, "cannot rotate left at #3: the right child is missing")]
    #[case(Direction::Right, "cannot rotate right at #3: the left child is missing")]
    fn test_invalid_rotation_display(#[case] direction: Direction, #[case] expected: &str) {
        let error = TreeError::InvalidRotation {
            node: NodeId(3),
            direction,
        };
        assert_eq!(format!("{error}"), expected);
    }

    #[rstest]
    fn test_is_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(TreeError::KeyNotFound);
        assert_eq!(error.to_string(), "key not found");
    }
}
