// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Tree`] container: hierarchy, selection store, and navigation together.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::time::Duration;

use kurbo::Point;
use understory_outline::{Hierarchy, NodeId, Outline};
use understory_selection::{
    ObserverId, SelectionChange, SelectionConfig, SelectionError, SelectionStore,
};

use crate::keys::{ArrowKeys, Key, Modifiers};
use crate::navigation::{DownExit, NavState, NavigationConfig, NavigationController};

/// Configuration for a [`Tree`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TreeConfig {
    /// Selection rules.
    pub selection: SelectionConfig,
    /// Keyboard navigation.
    pub navigation: NavigationConfig,
}

impl TreeConfig {
    /// Returns a copy with multi-select turned on or off.
    #[must_use]
    pub fn with_multi_select(mut self, enabled: bool) -> Self {
        self.selection.multi_select = enabled;
        self
    }

    /// Returns a copy with the given key repeat interval.
    #[must_use]
    pub fn with_key_repeat_interval(mut self, interval: Duration) -> Self {
        self.navigation = self.navigation.with_key_repeat_interval(interval);
        self
    }

    /// Returns a copy with the given [`DownExit`] policy.
    #[must_use]
    pub fn with_down_exit(mut self, down_exit: DownExit) -> Self {
        self.navigation = self.navigation.with_down_exit(down_exit);
        self
    }
}

/// A right-click on a node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RightClick<K> {
    /// The node under the pointer.
    pub node: K,
    /// Pointer location in tree space.
    pub location: Point,
}

type RightClickObserver<K> = Box<dyn FnMut(&RightClick<K>)>;

/// A tree view's interaction state over a [`Hierarchy`].
///
/// Owns the hierarchy, a [`SelectionStore`], and a [`NavigationController`],
/// and routes pointer gestures and keyboard input to them.
pub struct Tree<H: Hierarchy> {
    hierarchy: H,
    store: SelectionStore<H::Key>,
    navigation: NavigationController,
    right_click: Vec<RightClickObserver<H::Key>>,
}

impl<H: Hierarchy + fmt::Debug> fmt::Debug for Tree<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("hierarchy", &self.hierarchy)
            .field("store", &self.store)
            .field("navigation", &self.navigation)
            .field("right_click_observers", &self.right_click.len())
            .finish()
    }
}

impl<H: Hierarchy> Tree<H> {
    /// Creates an unfocused tree with nothing selected.
    #[must_use]
    pub fn new(hierarchy: H, config: TreeConfig) -> Self {
        Self {
            hierarchy,
            store: SelectionStore::new(config.selection),
            navigation: NavigationController::new(config.navigation),
            right_click: Vec::new(),
        }
    }

    /// Returns the hierarchy.
    pub fn hierarchy(&self) -> &H {
        &self.hierarchy
    }

    /// Returns the hierarchy mutably, e.g. to add nodes or update layout.
    ///
    /// Selected nodes removed this way are dropped by the next selection change
    /// or by [`Tree::prune_selection`].
    pub fn hierarchy_mut(&mut self) -> &mut H {
        &mut self.hierarchy
    }

    /// Returns the selection store.
    pub fn store(&self) -> &SelectionStore<H::Key> {
        &self.store
    }

    /// Returns the navigation controller.
    pub fn navigation(&self) -> &NavigationController {
        &self.navigation
    }

    /// Returns the navigation state.
    pub fn nav_state(&self) -> NavState {
        self.navigation.state(&self.hierarchy, &self.store)
    }

    /// Registers a selection observer; see [`SelectionStore::subscribe`].
    pub fn on_selection_changed<F>(&mut self, observer: F) -> ObserverId
    where
        F: FnMut(&SelectionChange<'_, H::Key>) + 'static,
    {
        self.store.subscribe(observer)
    }

    /// Removes a selection observer.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.store.unsubscribe(id)
    }

    /// Registers a right-click observer.
    pub fn on_right_click<F>(&mut self, observer: F)
    where
        F: FnMut(&RightClick<H::Key>) + 'static,
    {
        self.right_click.push(Box::new(observer));
    }

    /// Returns the primary selected node.
    pub fn selected_node(&self) -> Option<H::Key> {
        self.store.primary().copied()
    }

    /// Returns all selected nodes, primary first.
    pub fn selection(&self) -> &[H::Key] {
        self.store.items()
    }

    /// Selects exactly `node`.
    pub fn select(&mut self, node: H::Key) -> Result<(), SelectionError<H::Key>> {
        self.store.select_single(&mut self.hierarchy, node)
    }

    /// Replaces the selection with `nodes`.
    pub fn select_many(&mut self, nodes: &[H::Key]) -> Result<(), SelectionError<H::Key>> {
        self.store.select_many(&mut self.hierarchy, nodes)
    }

    /// Toggles `node`.
    pub fn toggle(&mut self, node: H::Key) -> Result<(), SelectionError<H::Key>> {
        self.store.toggle(&mut self.hierarchy, node)
    }

    /// Removes `node` from the selection if present.
    pub fn deselect(&mut self, node: H::Key) -> Result<(), SelectionError<H::Key>> {
        if !self.hierarchy.is_alive(node) {
            return Err(SelectionError::InvalidNode(node));
        }
        if self.store.contains(node) {
            self.store.toggle(&mut self.hierarchy, node)?;
        }
        Ok(())
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.store.clear();
    }

    /// Selects the visible rows between the primary node and `end`.
    pub fn select_range(&mut self, end: H::Key) -> Result<(), SelectionError<H::Key>> {
        self.store.select_range(&mut self.hierarchy, end)
    }

    /// Selects every visible node on a multi-select tree.
    pub fn select_all_visible(&mut self) {
        self.store.select_all_visible(&self.hierarchy);
    }

    /// Drops selected nodes that are no longer reachable from the root.
    pub fn prune_selection(&mut self) {
        self.store.retain_reachable(&self.hierarchy);
    }

    /// Enables or disables multi-select; see [`SelectionStore::set_multi_select`].
    pub fn set_multi_select(&mut self, enabled: bool) {
        self.store.set_multi_select(&self.hierarchy, enabled);
    }

    /// Applies a left click on `node`.
    ///
    /// Shift extends a range from the current selection, Ctrl toggles, and a plain
    /// click selects only `node`.
    pub fn click(
        &mut self,
        node: H::Key,
        modifiers: Modifiers,
    ) -> Result<(), SelectionError<H::Key>> {
        if modifiers.contains(Modifiers::SHIFT) {
            self.select_range(node)
        } else if modifiers.contains(Modifiers::CTRL) {
            self.toggle(node)
        } else {
            self.select(node)
        }
    }

    /// Reports a right click on `node` at `location` to the right-click
    /// observers. The selection is left alone. Clicks on dead nodes are ignored.
    pub fn right_click(&mut self, node: H::Key, location: Point) {
        if !self.hierarchy.is_alive(node) {
            return;
        }
        let event = RightClick { node, location };
        for observer in &mut self.right_click {
            observer(&event);
        }
    }

    /// Marks the tree focused.
    pub fn focus_gained(&mut self) {
        self.navigation.focus_gained();
    }

    /// Marks the tree unfocused.
    pub fn focus_lost(&mut self) {
        self.navigation.focus_lost();
    }

    /// Returns `true` while the tree has keyboard focus.
    pub fn has_focus(&self) -> bool {
        self.navigation.has_focus()
    }

    /// Advances keyboard navigation by one frame; see
    /// [`NavigationController::update`].
    pub fn update(&mut self, held: ArrowKeys, dt: Duration) -> bool {
        self.navigation
            .update(&mut self.hierarchy, &mut self.store, held, dt)
    }

    /// Handles a discrete key press; see [`NavigationController::key_down`].
    pub fn key_down(&mut self, key: Key, modifiers: Modifiers) -> bool {
        self.navigation
            .key_down(&mut self.hierarchy, &mut self.store, key, modifiers)
    }
}

impl Tree<Outline> {
    /// Removes `node` and its subtree from the outline and drops them from the
    /// selection. Returns the number of removed nodes.
    pub fn remove_node(&mut self, node: NodeId) -> usize {
        let removed = self.hierarchy.remove(node);
        if removed > 0 {
            self.store.retain_reachable(&self.hierarchy);
        }
        removed
    }
}
