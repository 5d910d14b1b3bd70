//! Node identifiers, link records, and read-only node views.
//!
//! Nodes live in an index arena owned by the tree. A [`NodeId`] names a slot
//! in that arena; slot 0 is reserved for the sentinel, which stands in for
//! every empty child link and for the parent of the root.

use std::fmt;

use crate::arena::Arena;
use crate::color::Color;

// =============================================================================
// NodeId
// =============================================================================

/// Index of a node slot inside a tree's arena.
///
/// Ids are stable for the lifetime of the node they name: rotations and
/// fixups relink nodes but never move them. Once a node is deleted its slot
/// may be reused by a later insertion, so ids should not be kept across
/// mutating calls.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The shared sentinel slot.
    pub const SENTINEL: Self = Self(0);

    /// Returns `true` if this id names the sentinel.
    #[inline]
    pub const fn is_sentinel(self) -> bool {
        self.0 == 0
    }

    /// Raw slot index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_sentinel() {
            formatter.write_str("#nil")
        } else {
            write!(formatter, "#{}", self.0)
        }
    }
}

// =============================================================================
// Direction
// =============================================================================

/// A child side, also used to name the direction of a rotation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    /// The left child / a left rotation.
    Left,
    /// The right child / a right rotation.
    Right,
}

impl Direction {
    /// The mirror side.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => formatter.write_str("left"),
            Self::Right => formatter.write_str("right"),
        }
    }
}

// =============================================================================
// Links
// =============================================================================

/// Structural record of one arena slot.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct Links {
    pub(crate) parent: NodeId,
    pub(crate) left: NodeId,
    pub(crate) right: NodeId,
    pub(crate) color: Color,
}

impl Links {
    /// Black, with every link pointing back at the sentinel slot.
    pub(crate) const SENTINEL: Self = Self {
        parent: NodeId::SENTINEL,
        left: NodeId::SENTINEL,
        right: NodeId::SENTINEL,
        color: Color::Black,
    };

    /// A fresh red leaf hanging under `parent`.
    pub(crate) const fn red_leaf(parent: NodeId) -> Self {
        Self {
            parent,
            left: NodeId::SENTINEL,
            right: NodeId::SENTINEL,
            color: Color::Red,
        }
    }

    pub(crate) const fn child(&self, direction: Direction) -> NodeId {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }
}

// =============================================================================
// NodeRef
// =============================================================================

/// A read-only view of a real (non-sentinel) node.
///
/// The view borrows the tree, so it cannot outlive the next mutating call.
/// Navigation methods return `None` where the underlying link is the
/// sentinel.
pub struct NodeRef<'a, K, V> {
    arena: &'a Arena<K, V>,
    id: NodeId,
    key: &'a K,
    value: &'a V,
}

impl<'a, K, V> NodeRef<'a, K, V> {
    /// Builds a view of `id`, or `None` for the sentinel and vacant slots.
    pub(crate) fn new(arena: &'a Arena<K, V>, id: NodeId) -> Option<Self> {
        arena.entry(id).map(|(key, value)| Self {
            arena,
            id,
            key,
            value,
        })
    }

    /// The arena id of this node, accepted by the rotation primitives.
    #[inline]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    /// The node's key.
    #[inline]
    pub const fn key(&self) -> &'a K {
        self.key
    }

    /// The node's value.
    #[inline]
    pub const fn value(&self) -> &'a V {
        self.value
    }

    /// The node's color.
    #[inline]
    pub fn color(&self) -> Color {
        self.arena.color(self.id)
    }

    /// Returns `true` if the node is red.
    #[inline]
    pub fn is_red(&self) -> bool {
        self.color().is_red()
    }

    /// Returns `true` if the node is black.
    #[inline]
    pub fn is_black(&self) -> bool {
        self.color().is_black()
    }

    /// The parent node, or `None` at the root.
    pub fn parent(&self) -> Option<Self> {
        Self::new(self.arena, self.arena.parent(self.id))
    }

    /// The left child, or `None` if the left link is the sentinel.
    pub fn left(&self) -> Option<Self> {
        self.child(Direction::Left)
    }

    /// The right child, or `None` if the right link is the sentinel.
    pub fn right(&self) -> Option<Self> {
        self.child(Direction::Right)
    }

    /// The child on `direction`'s side.
    pub fn child(&self, direction: Direction) -> Option<Self> {
        Self::new(self.arena, self.arena.child(self.id, direction))
    }
}

impl<K, V> Clone for NodeRef<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for NodeRef<'_, K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for NodeRef<'_, K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("NodeRef")
            .field("id", &self.id)
            .field("key", self.key)
            .field("value", self.value)
            .field("color", &self.color())
            .finish()
    }
}
