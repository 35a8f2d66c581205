// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The hierarchy contract consumed by selection and navigation.

use core::fmt::Debug;
use core::hash::Hash;

use kurbo::{Point, Rect, Vec2};

/// A navigable hierarchy of nodes with expansion state and tree-space bounds.
///
/// This is the only view that `understory_selection` and `understory_tree` have
/// of your node model. [`Outline`](crate::Outline) is a ready-made
/// implementation; hosts that already own a scene or widget tree can implement
/// this trait over it instead.
///
/// Every hierarchy has exactly one synthetic root. The root is never shown and
/// never part of the visible set; its children are the top-level rows.
///
/// Required methods should treat keys that are not live as leaves without a
/// parent: `children` returns an empty slice, `parent` and `bounds` return `None`.
pub trait Hierarchy {
    /// Node identifier.
    type Key: Copy + Eq + Hash + Debug;

    /// Returns the synthetic root.
    fn root(&self) -> Self::Key;

    /// Returns `true` if `key` refers to a live node.
    fn is_alive(&self, key: Self::Key) -> bool;

    /// Returns the parent of `key`, or `None` for the root and dead keys.
    fn parent(&self, key: Self::Key) -> Option<Self::Key>;

    /// Returns the children of `key` in display order.
    fn children(&self, key: Self::Key) -> &[Self::Key];

    /// Returns `true` if `key` is expanded.
    fn is_expanded(&self, key: Self::Key) -> bool;

    /// Expands or collapses `key`.
    fn set_expanded(&mut self, key: Self::Key, expanded: bool);

    /// Returns the bounds of `key` in tree space.
    ///
    /// For an expanded node the bounds must enclose the rows of its visible
    /// descendants; range selection relies on this to prune whole subtrees.
    fn bounds(&self, key: Self::Key) -> Option<Rect>;

    /// Asks the host to move input focus to `key`.
    fn request_focus(&mut self, key: Self::Key);

    /// Returns `true` if `key` is the synthetic root.
    fn is_root(&self, key: Self::Key) -> bool {
        key == self.root()
    }

    /// Returns `true` if `key` has at least one child.
    fn has_children(&self, key: Self::Key) -> bool {
        !self.children(key).is_empty()
    }

    /// Returns the position of `key` within its parent's children.
    fn child_index(&self, key: Self::Key) -> Option<usize> {
        let parent = self.parent(key)?;
        self.children(parent).iter().position(|&c| c == key)
    }

    /// Expands every ancestor of `key` so that it becomes visible.
    fn expand_all_parents(&mut self, key: Self::Key) {
        let mut current = self.parent(key);
        while let Some(parent) = current {
            if !self.is_expanded(parent) {
                self.set_expanded(parent, true);
            }
            current = self.parent(parent);
        }
    }

    /// Returns `true` if `key` is live and its parent chain ends at the root.
    fn is_reachable(&self, key: Self::Key) -> bool {
        if !self.is_alive(key) {
            return false;
        }
        let root = self.root();
        let mut current = key;
        while current != root {
            match self.parent(current) {
                Some(parent) => current = parent,
                None => return false,
            }
        }
        true
    }

    /// Returns `true` if `key` is reachable and every ancestor is expanded.
    fn is_visible(&self, key: Self::Key) -> bool {
        if self.is_root(key) || !self.is_reachable(key) {
            return false;
        }
        let mut current = self.parent(key);
        while let Some(parent) = current {
            if !self.is_root(parent) && !self.is_expanded(parent) {
                return false;
            }
            current = self.parent(parent);
        }
        true
    }

    /// Returns the point of `key` used for row membership tests.
    ///
    /// This is the bounds origin shifted by `offset`, which keeps the point
    /// strictly inside the node's own row.
    fn anchor_point(&self, key: Self::Key, offset: Vec2) -> Option<Point> {
        self.bounds(key).map(|b| b.origin() + offset)
    }
}
