//! # redblack
//!
//! A mutable, arena-backed red-black tree.
//!
//! ## Overview
//!
//! - **[`RedBlackTree`]**: an ordered key/value map with balancing insert and
//!   delete, point and neighbour lookups, and O(log N) height
//! - **[`RedBlackSet`]**: the same engine storing keys only
//! - **Traversals**: lazy pre-, in- and post-order walks over [`NodeRef`] views
//! - **Rotations**: [`RedBlackTree::rotate_left`] and
//!   [`RedBlackTree::rotate_right`] are public, together with
//!   [`RedBlackTree::insert_unbalanced`], so shapes can be built and inspected
//!   by hand
//! - **Diagnostics**: [`RedBlackTree::validate`] checks every invariant
//!
//! Nodes live in a vector arena and refer to each other by [`NodeId`]. Slot 0
//! is a single black sentinel that stands in for every empty child and for
//! the root's parent.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for trees (as maps) and sets (as sequences)
//! - `debug-invariants`: run [`RedBlackTree::validate`] after every balancing
//!   insert and delete in debug builds
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use redblack::prelude::*;
//!
//! let mut set = RedBlackSet::new();
//! for key in [7, 5, 9, 3, 6, 8, 10, 1, 2] {
//!     set.insert(key);
//! }
//! assert_eq!(set.display_colored().to_string(), "7B 5R 2B 1R 3R 6B 9B 8R 10R");
//! assert_eq!(set.keys_in(TraversalOrder::InOrder), vec![1, 2, 3, 5, 6, 7, 8, 9, 10]);
//! assert!(set.validate().is_ok());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use redblack::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Color;
    pub use crate::error::TreeError;
    pub use crate::node::{Direction, NodeId, NodeRef};
    pub use crate::set::RedBlackSet;
    pub use crate::traversal::TraversalOrder;
    pub use crate::tree::RedBlackTree;
    pub use crate::validate::InvariantViolation;
}

mod arena;
mod color;
mod error;
mod node;
pub mod set;
pub mod traversal;
mod tree;
mod validate;

pub use color::Color;
pub use error::TreeError;
pub use node::{Direction, NodeId, NodeRef};
pub use set::RedBlackSet;
pub use traversal::{ColoredPreorder, Traversal, TraversalOrder};
pub use tree::RedBlackTree;
pub use validate::InvariantViolation;

static_assertions::assert_impl_all!(NodeId: Copy, Send, Sync, std::hash::Hash);
static_assertions::assert_impl_all!(RedBlackTree<i32, String>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(RedBlackSet<String>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(TreeError: std::error::Error, Send, Sync);
static_assertions::assert_impl_all!(InvariantViolation: std::error::Error, Send, Sync);
