//! Index arena owning every node of a tree.
//!
//! Links and entries are stored in two parallel vectors indexed by
//! [`NodeId`]. Slot 0 belongs to the sentinel: its links are black and
//! self-referential and it never carries an entry, so `entry(SENTINEL)`
//! is `None` while `left`/`right`/`parent`/`color` may be read on it
//! unconditionally.

use crate::color::Color;
use crate::node::{Direction, Links, NodeId};

#[derive(Clone, Debug)]
pub(crate) struct Arena<K, V> {
    links: Vec<Links>,
    entries: Vec<Option<(K, V)>>,
    vacant: Vec<NodeId>,
}

impl<K, V> Arena<K, V> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let mut links = Vec::with_capacity(capacity.saturating_add(1));
        links.push(Links::SENTINEL);
        let mut entries = Vec::with_capacity(capacity.saturating_add(1));
        entries.push(None);
        Self {
            links,
            entries,
            vacant: Vec::new(),
        }
    }

    /// Number of real nodes the arena can hold without reallocating.
    pub(crate) fn capacity(&self) -> usize {
        self.entries.capacity().saturating_sub(1)
    }

    /// Drops every node and restores the pristine sentinel.
    pub(crate) fn clear(&mut self) {
        self.links.truncate(1);
        self.entries.truncate(1);
        self.vacant.clear();
        self.reset_sentinel();
    }

    /// Stores a new red leaf under `parent` and returns its id.
    ///
    /// The caller is responsible for linking the parent to the new node.
    pub(crate) fn allocate(&mut self, key: K, value: V, parent: NodeId) -> NodeId {
        let links = Links::red_leaf(parent);
        if let Some(id) = self.vacant.pop() {
            self.links[id.0] = links;
            self.entries[id.0] = Some((key, value));
            id
        } else {
            self.links.push(links);
            self.entries.push(Some((key, value)));
            NodeId(self.entries.len() - 1)
        }
    }

    /// Takes the entry out of `id` and recycles the slot.
    pub(crate) fn release(&mut self, id: NodeId) -> Option<(K, V)> {
        if id.is_sentinel() {
            return None;
        }
        let entry = self.entries.get_mut(id.0)?.take()?;
        self.links[id.0] = Links::SENTINEL;
        self.vacant.push(id);
        Some(entry)
    }

    /// Returns `true` if `id` names a live, data-bearing node.
    pub(crate) fn contains(&self, id: NodeId) -> bool {
        self.entries.get(id.0).is_some_and(Option::is_some)
    }

    pub(crate) fn entry(&self, id: NodeId) -> Option<&(K, V)> {
        self.entries.get(id.0)?.as_ref()
    }

    pub(crate) fn entry_mut(&mut self, id: NodeId) -> Option<&mut (K, V)> {
        self.entries.get_mut(id.0)?.as_mut()
    }

    pub(crate) fn key(&self, id: NodeId) -> Option<&K> {
        self.entry(id).map(|(key, _)| key)
    }

    // -------------------------------------------------------------------------
    // Link accessors
    // -------------------------------------------------------------------------

    #[inline]
    pub(crate) fn links(&self, id: NodeId) -> &Links {
        &self.links[id.0]
    }

    #[inline]
    pub(crate) fn parent(&self, id: NodeId) -> NodeId {
        self.links[id.0].parent
    }

    #[inline]
    pub(crate) fn left(&self, id: NodeId) -> NodeId {
        self.links[id.0].left
    }

    #[inline]
    pub(crate) fn right(&self, id: NodeId) -> NodeId {
        self.links[id.0].right
    }

    #[inline]
    pub(crate) fn child(&self, id: NodeId, direction: Direction) -> NodeId {
        self.links[id.0].child(direction)
    }

    #[inline]
    pub(crate) fn color(&self, id: NodeId) -> Color {
        self.links[id.0].color
    }

    #[inline]
    pub(crate) fn is_red(&self, id: NodeId) -> bool {
        self.color(id).is_red()
    }

    #[inline]
    pub(crate) fn is_black(&self, id: NodeId) -> bool {
        self.color(id).is_black()
    }

    /// The side of `parent` that `child` hangs on.
    ///
    /// Works for a sentinel `child` as long as the sentinel's parent link has
    /// been pointed at `parent`, which is how deletion tracks an empty slot.
    #[inline]
    pub(crate) fn side_of(&self, parent: NodeId, child: NodeId) -> Direction {
        if self.left(parent) == child {
            Direction::Left
        } else {
            Direction::Right
        }
    }

    /// Writing the sentinel's parent is allowed; deletion uses it transiently.
    #[inline]
    pub(crate) fn set_parent(&mut self, id: NodeId, parent: NodeId) {
        self.links[id.0].parent = parent;
    }

    #[inline]
    pub(crate) fn set_child(&mut self, id: NodeId, direction: Direction, child: NodeId) {
        debug_assert!(!id.is_sentinel(), "sentinel children are fixed");
        if id.is_sentinel() {
            return;
        }
        match direction {
            Direction::Left => self.links[id.0].left = child,
            Direction::Right => self.links[id.0].right = child,
        }
    }

    /// The sentinel only ever accepts black.
    #[inline]
    pub(crate) fn set_color(&mut self, id: NodeId, color: Color) {
        if id.is_sentinel() {
            debug_assert_eq!(color, Color::Black, "the sentinel must stay black");
            return;
        }
        self.links[id.0].color = color;
    }

    pub(crate) fn reset_sentinel(&mut self) {
        self.links[NodeId::SENTINEL.0] = Links::SENTINEL;
    }
}
