// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree-scoped selection with change notification.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use understory_outline::{Hierarchy, visible_nodes};

use crate::range::{self, RangeConfig};
use crate::{Selection, SelectionError};

/// Configuration for a [`SelectionStore`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SelectionConfig {
    /// Whether more than one node may be selected at a time.
    pub multi_select: bool,
    /// Geometry used by [`SelectionStore::select_range`].
    pub range: RangeConfig,
}

impl SelectionConfig {
    /// A configuration allowing multiple selected nodes.
    #[must_use]
    pub fn multi() -> Self {
        Self {
            multi_select: true,
            ..Self::default()
        }
    }

    /// A configuration allowing at most one selected node.
    #[must_use]
    pub fn single() -> Self {
        Self::default()
    }
}

/// Before/after snapshots delivered to observers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SelectionChange<'a, K> {
    /// The selection before the mutation.
    pub before: &'a [K],
    /// The selection after the mutation.
    pub after: &'a [K],
}

/// Handle returned by [`SelectionStore::subscribe`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Observer<K> = Box<dyn FnMut(&SelectionChange<'_, K>)>;

/// The authoritative selection of one tree.
///
/// Every mutating operation fires at most one notification, and only when the
/// ordered contents actually changed. Observers run synchronously, in
/// registration order, and must not mutate the store they observe.
///
/// Operations take the [`Hierarchy`] explicitly because selecting a node may
/// expand its ancestors, move input focus, or read on-screen geometry.
///
/// Entries that are no longer reachable from the root (for example because the
/// host detached a selected subtree) are dropped at the start of the next
/// mutation; that mutation's notification reports them as removed.
pub struct SelectionStore<K> {
    selection: Selection<K>,
    config: SelectionConfig,
    observers: Vec<(ObserverId, Observer<K>)>,
    next_observer: u64,
}

impl<K: fmt::Debug> fmt::Debug for SelectionStore<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionStore")
            .field("selection", &self.selection)
            .field("config", &self.config)
            .field("observers", &self.observers.len())
            .field("next_observer", &self.next_observer)
            .finish()
    }
}

impl<K> SelectionStore<K> {
    /// Creates an empty store.
    #[must_use]
    pub fn new(config: SelectionConfig) -> Self {
        Self {
            selection: Selection::new(),
            config,
            observers: Vec::new(),
            next_observer: 0,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    /// Returns `true` if more than one node may be selected.
    #[must_use]
    pub fn is_multi_select(&self) -> bool {
        self.config.multi_select
    }

    /// Returns the underlying selection set.
    #[must_use]
    pub fn selection(&self) -> &Selection<K> {
        &self.selection
    }

    /// Returns the selected nodes in selection order.
    #[must_use]
    pub fn items(&self) -> &[K] {
        self.selection.items()
    }

    /// Returns the primary (first) selected node.
    #[must_use]
    pub fn primary(&self) -> Option<&K> {
        self.selection.primary()
    }

    /// Returns the number of selected nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.selection.len()
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selection.is_empty()
    }

    /// Returns the selection revision; see [`Selection::revision`].
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.selection.revision()
    }

    /// Registers `observer` to run after every change.
    pub fn subscribe<F>(&mut self, observer: F) -> ObserverId
    where
        F: FnMut(&SelectionChange<'_, K>) + 'static,
    {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes an observer. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }
}

impl<K> SelectionStore<K>
where
    K: Copy + Eq + core::hash::Hash + fmt::Debug,
{
    /// Returns `true` if `key` is selected.
    #[must_use]
    pub fn contains(&self, key: K) -> bool {
        self.selection.contains(&key)
    }

    /// Selects exactly `node`.
    ///
    /// Expands every ancestor of `node` and requests focus on it. Does nothing
    /// if `node` is already the only selected node.
    pub fn select_single<H>(&mut self, tree: &mut H, node: K) -> Result<(), SelectionError<K>>
    where
        H: Hierarchy<Key = K> + ?Sized,
    {
        ensure_alive(tree, node)?;
        let before = self.snapshot();
        self.drop_unreachable(tree);
        self.apply_single(tree, node);
        self.commit(&before);
        Ok(())
    }

    /// Replaces the selection with `nodes`.
    ///
    /// Repeated nodes keep their first position. On a single-select store only
    /// the first node is kept. Every selected node has its ancestors expanded.
    pub fn select_many<H>(&mut self, tree: &mut H, nodes: &[K]) -> Result<(), SelectionError<K>>
    where
        H: Hierarchy<Key = K> + ?Sized,
    {
        for &node in nodes {
            ensure_alive(tree, node)?;
        }
        let before = self.snapshot();
        self.drop_unreachable(tree);
        if self.selection.items() != nodes {
            if self.config.multi_select {
                self.selection.replace_with_hashed(nodes.iter().copied());
            } else {
                self.selection.replace_with_unique(nodes.first().copied());
            }
            for &node in self.selection.items() {
                tree.expand_all_parents(node);
            }
        }
        self.commit(&before);
        Ok(())
    }

    /// Adds `node` if it is not selected, removes it otherwise.
    ///
    /// On a single-select store, adding replaces the current selection.
    pub fn toggle<H>(&mut self, tree: &mut H, node: K) -> Result<(), SelectionError<K>>
    where
        H: Hierarchy<Key = K> + ?Sized,
    {
        ensure_alive(tree, node)?;
        let before = self.snapshot();
        self.drop_unreachable(tree);
        if self.selection.contains(&node) {
            self.selection.remove(&node);
        } else if self.config.multi_select {
            self.selection.add(node);
        } else {
            self.selection.select_only(node);
        }
        self.commit(&before);
        Ok(())
    }

    /// Deselects everything.
    pub fn clear(&mut self) {
        let before = self.snapshot();
        self.selection.clear();
        self.commit(&before);
    }

    /// Extends the selection to `end` using on-screen rows.
    ///
    /// See the [`range`](crate::range) module for the algorithm. Falls back to
    /// [`SelectionStore::select_single`] on single-select stores, when nothing
    /// is selected, or when no row span can be computed from the bounds.
    pub fn select_range<H>(&mut self, tree: &mut H, end: K) -> Result<(), SelectionError<K>>
    where
        H: Hierarchy<Key = K> + ?Sized,
    {
        ensure_alive(tree, end)?;
        let before = self.snapshot();
        self.drop_unreachable(tree);

        let span = if self.config.multi_select {
            range::range_span(tree, self.selection.items(), end, &self.config.range)
        } else {
            None
        };
        match span {
            Some(span) => {
                let nodes = range::nodes_in_span(tree, span, self.config.range.anchor_offset);
                self.selection.replace_with_unique(nodes);
            }
            None => self.apply_single(tree, end),
        }
        self.commit(&before);
        Ok(())
    }

    /// Selects every visible node in display order.
    ///
    /// The root is excluded, as is every descendant of a collapsed node. Does
    /// nothing on a single-select store.
    pub fn select_all_visible<H>(&mut self, tree: &H)
    where
        H: Hierarchy<Key = K> + ?Sized,
    {
        if !self.config.multi_select {
            return;
        }
        let before = self.snapshot();
        self.selection.replace_with_unique(visible_nodes(tree));
        self.commit(&before);
    }

    /// Drops selected nodes that are no longer reachable from the root.
    ///
    /// Hosts call this after detaching nodes so observers hear about the
    /// removal immediately rather than on the next mutation.
    pub fn retain_reachable<H>(&mut self, tree: &H)
    where
        H: Hierarchy<Key = K> + ?Sized,
    {
        let before = self.snapshot();
        self.drop_unreachable(tree);
        self.commit(&before);
    }

    /// Enables or disables multi-select.
    ///
    /// Disabling drops unreachable nodes, then keeps only the primary node.
    pub fn set_multi_select<H>(&mut self, tree: &H, enabled: bool)
    where
        H: Hierarchy<Key = K> + ?Sized,
    {
        self.config.multi_select = enabled;
        if !enabled {
            let before = self.snapshot();
            self.drop_unreachable(tree);
            self.selection.truncate(1);
            self.commit(&before);
        }
    }

    fn apply_single<H>(&mut self, tree: &mut H, node: K)
    where
        H: Hierarchy<Key = K> + ?Sized,
    {
        if matches!(self.selection.items(), [only] if *only == node) {
            return;
        }
        self.selection.select_only(node);
        tree.expand_all_parents(node);
        tree.request_focus(node);
    }

    fn drop_unreachable<H>(&mut self, tree: &H)
    where
        H: Hierarchy<Key = K> + ?Sized,
    {
        if self.selection.iter().all(|&key| tree.is_reachable(key)) {
            return;
        }
        #[cfg(feature = "tracing")]
        tracing::warn!(
            selected = self.selection.len(),
            "dropping selected nodes that are no longer reachable from the root"
        );
        self.selection.retain(|&key| tree.is_reachable(key));
    }

    fn snapshot(&self) -> Vec<K> {
        self.selection.items().to_vec()
    }

    fn commit(&mut self, before: &[K]) {
        if before == self.selection.items() {
            return;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            before = before.len(),
            after = self.selection.len(),
            primary = ?self.selection.primary(),
            "selection changed"
        );
        let change = SelectionChange {
            before,
            after: self.selection.items(),
        };
        for (_, observer) in &mut self.observers {
            observer(&change);
        }
    }
}

fn ensure_alive<H>(tree: &H, node: H::Key) -> Result<(), SelectionError<H::Key>>
where
    H: Hierarchy + ?Sized,
{
    if tree.is_alive(node) {
        Ok(())
    } else {
        Err(SelectionError::InvalidNode(node))
    }
}
