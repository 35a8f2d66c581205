// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generational node arena implementing [`Hierarchy`].

use alloc::vec;
use alloc::vec::Vec;

use kurbo::Rect;

use crate::Hierarchy;

/// Identifier for a node in an [`Outline`].
///
/// A small, copyable handle made of a slot index and a generation counter.
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `NodeId` for it becomes stale.
/// - On reuse of a freed slot its generation is incremented, so stale handles
///   never alias a different live node.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(u32, u32);

impl NodeId {
    const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    const fn idx(self) -> usize {
        self.0 as usize
    }

    /// Returns the generation of this handle.
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.1
    }
}

#[derive(Clone, Debug)]
struct NodeData {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    expanded: bool,
    bounds: Rect,
}

impl NodeData {
    fn new(parent: Option<NodeId>) -> Self {
        Self {
            parent,
            children: Vec::new(),
            expanded: false,
            bounds: Rect::ZERO,
        }
    }
}

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    data: Option<NodeData>,
}

/// An arena of tree nodes with a single synthetic root.
///
/// Nodes own their ordered child lists; the parent link is a plain handle
/// used for navigation only. Newly inserted nodes start collapsed with
/// [`Rect::ZERO`] bounds. The root starts expanded.
#[derive(Clone, Debug)]
pub struct Outline {
    slots: Vec<Slot>,
    free: Vec<u32>,
    root: NodeId,
    focused: Option<NodeId>,
    len: usize,
}

impl Default for Outline {
    fn default() -> Self {
        Self::new()
    }
}

impl Outline {
    /// Creates an outline containing only the synthetic root.
    #[must_use]
    pub fn new() -> Self {
        let mut root_data = NodeData::new(None);
        root_data.expanded = true;
        Self {
            slots: vec![Slot {
                generation: 1,
                data: Some(root_data),
            }],
            free: Vec::new(),
            root: NodeId::new(0, 1),
            focused: None,
            len: 1,
        }
    }

    /// Returns the number of live nodes, including the root.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the outline holds only the root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 1
    }

    /// Appends a new child to `parent`.
    ///
    /// Returns `None` if `parent` is not live or the arena is out of slots.
    pub fn insert(&mut self, parent: NodeId) -> Option<NodeId> {
        let index = self.get(parent)?.children.len();
        self.insert_at(parent, index)
    }

    /// Inserts a new child into `parent` at `index`.
    ///
    /// `index` is clamped to the current child count. Returns `None` if
    /// `parent` is not live.
    pub fn insert_at(&mut self, parent: NodeId, index: usize) -> Option<NodeId> {
        if !self.is_alive(parent) {
            return None;
        }
        let id = self.alloc(NodeData::new(Some(parent)))?;
        let children = &mut self.get_mut(parent)?.children;
        let index = index.min(children.len());
        children.insert(index, id);
        Some(id)
    }

    /// Removes `id` and its whole subtree.
    ///
    /// Returns the number of nodes freed. The root cannot be removed; removing
    /// it (or a stale handle) returns `0`.
    pub fn remove(&mut self, id: NodeId) -> usize {
        if id == self.root || !self.is_alive(id) {
            return 0;
        }
        if let Some(parent) = self.get(id).and_then(|n| n.parent)
            && let Some(data) = self.get_mut(parent)
        {
            data.children.retain(|&c| c != id);
        }

        let mut freed = 0;
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let Some(data) = self.slots[current.idx()].data.take() else {
                continue;
            };
            stack.extend(data.children);
            if self.focused == Some(current) {
                self.focused = None;
            }
            self.free.push(current.0);
            self.len -= 1;
            freed += 1;
        }
        freed
    }

    /// Expands `id`.
    pub fn expand(&mut self, id: NodeId) {
        self.set_expanded(id, true);
    }

    /// Collapses `id`.
    pub fn collapse(&mut self, id: NodeId) {
        self.set_expanded(id, false);
    }

    /// Flips the expansion state of `id`.
    pub fn toggle_expanded(&mut self, id: NodeId) {
        if let Some(data) = self.get_mut(id) {
            data.expanded = !data.expanded;
        }
    }

    /// Sets the tree-space bounds of `id`.
    pub fn set_bounds(&mut self, id: NodeId, bounds: Rect) {
        if let Some(data) = self.get_mut(id) {
            data.bounds = bounds;
        }
    }

    /// Returns the node that most recently requested focus, if still live.
    #[must_use]
    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Returns the number of ancestors between `id` and the root.
    ///
    /// Top-level nodes have depth `0`; the root and stale handles return `None`.
    #[must_use]
    pub fn depth(&self, id: NodeId) -> Option<usize> {
        let mut depth = 0;
        let mut current = self.get(id)?.parent?;
        while current != self.root {
            current = self.get(current)?.parent?;
            depth += 1;
        }
        Some(depth)
    }

    fn alloc(&mut self, data: NodeData) -> Option<NodeId> {
        let id = if let Some(idx) = self.free.pop() {
            let slot = &mut self.slots[idx as usize];
            slot.generation = slot.generation.wrapping_add(1);
            slot.data = Some(data);
            NodeId::new(idx, slot.generation)
        } else {
            let idx = u32::try_from(self.slots.len()).ok()?;
            self.slots.push(Slot {
                generation: 1,
                data: Some(data),
            });
            NodeId::new(idx, 1)
        };
        self.len += 1;
        Some(id)
    }

    fn get(&self, id: NodeId) -> Option<&NodeData> {
        let slot = self.slots.get(id.idx())?;
        if slot.generation != id.generation() {
            return None;
        }
        slot.data.as_ref()
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut NodeData> {
        let slot = self.slots.get_mut(id.idx())?;
        if slot.generation != id.generation() {
            return None;
        }
        slot.data.as_mut()
    }
}

impl Hierarchy for Outline {
    type Key = NodeId;

    fn root(&self) -> NodeId {
        self.root
    }

    fn is_alive(&self, key: NodeId) -> bool {
        self.get(key).is_some()
    }

    fn parent(&self, key: NodeId) -> Option<NodeId> {
        self.get(key)?.parent
    }

    fn children(&self, key: NodeId) -> &[NodeId] {
        match self.get(key) {
            Some(data) => &data.children,
            None => &[],
        }
    }

    fn is_expanded(&self, key: NodeId) -> bool {
        self.get(key).is_some_and(|n| n.expanded)
    }

    fn set_expanded(&mut self, key: NodeId, expanded: bool) {
        if let Some(data) = self.get_mut(key) {
            data.expanded = expanded;
        }
    }

    fn bounds(&self, key: NodeId) -> Option<Rect> {
        self.get(key).map(|n| n.bounds)
    }

    fn request_focus(&mut self, key: NodeId) {
        if self.is_alive(key) {
            self.focused = Some(key);
        }
    }
}
