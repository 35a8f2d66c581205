// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ordered, duplicate-free selection set.

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashSet;

/// An ordered set of selected keys plus a revision counter.
///
/// Order is selection order and is part of the semantics: the first key is the
/// **primary** selection, and two selections holding the same keys in a
/// different order are different. Keys are unique by equality.
///
/// `Selection` knows nothing about hierarchy or geometry; it is the storage
/// behind [`SelectionStore`](crate::SelectionStore), which layers the tree
/// rules and change notification on top.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection<T> {
    items: Vec<T>,
    revision: u64,
}

impl<T> Selection<T> {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            revision: 0,
        }
    }

    /// Returns `true` if the selection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of selected keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the selected keys in selection order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns an iterator over the selected keys in selection order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns the primary (first) key, if any.
    #[must_use]
    pub fn primary(&self) -> Option<&T> {
        self.items.first()
    }

    /// Returns the current revision counter.
    ///
    /// Bumped only when the ordered contents change; no-op calls leave it alone.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Removes all keys.
    pub fn clear(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.items.clear();
        self.bump_revision();
    }

    /// Keeps only the keys for which `keep` returns `true`, preserving order.
    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) {
        let before = self.items.len();
        self.items.retain(|k| keep(k));
        if self.items.len() != before {
            self.bump_revision();
        }
    }

    /// Drops every key after the first `len`.
    pub fn truncate(&mut self, len: usize) {
        if self.items.len() > len {
            self.items.truncate(len);
            self.bump_revision();
        }
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<T> Selection<T>
where
    T: PartialEq,
{
    /// Returns `true` if the selection contains `key`.
    #[must_use]
    pub fn contains(&self, key: &T) -> bool {
        self.items.contains(key)
    }

    /// Replaces the selection with exactly `key`.
    pub fn select_only(&mut self, key: T) {
        if matches!(self.items.as_slice(), [only] if *only == key) {
            return;
        }
        self.items.clear();
        self.items.push(key);
        self.bump_revision();
    }

    /// Appends `key` if it is not already selected.
    pub fn add(&mut self, key: T) {
        if !self.contains(&key) {
            self.items.push(key);
            self.bump_revision();
        }
    }

    /// Removes `key` if present; the order of the remaining keys is kept.
    pub fn remove(&mut self, key: &T) {
        if let Some(idx) = self.items.iter().position(|k| k == key) {
            self.items.remove(idx);
            self.bump_revision();
        }
    }

    /// Removes `key` if selected, otherwise appends it.
    pub fn toggle(&mut self, key: T) {
        if self.contains(&key) {
            self.remove(&key);
        } else {
            self.items.push(key);
            self.bump_revision();
        }
    }

    /// Replaces the selection with `keys`, dropping repeated keys.
    ///
    /// De-duplication scans the accumulated output, so this is quadratic in the
    /// input length. Prefer [`Selection::replace_with_unique`] when the input is
    /// known to be duplicate-free, or [`Selection::replace_with_hashed`] for
    /// large hashable inputs.
    pub fn replace_with<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut next: Vec<T> = Vec::new();
        for key in keys {
            if !next.contains(&key) {
                next.push(key);
            }
        }
        self.install(next);
    }

    /// Replaces the selection with `keys`, which must not repeat.
    ///
    /// Intended for keys produced by a tree walk, where every node is visited
    /// once.
    ///
    /// # Panics (debug only)
    ///
    /// Panics in debug builds if the input contains duplicates.
    pub fn replace_with_unique<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = T>,
    {
        let next: Vec<T> = keys.into_iter().collect();
        #[cfg(debug_assertions)]
        debug_assert_unique(&next);
        self.install(next);
    }

    fn install(&mut self, next: Vec<T>) {
        if next == self.items {
            return;
        }
        self.items = next;
        self.bump_revision();
    }
}

impl<T> Selection<T>
where
    T: Copy + Eq + Hash,
{
    /// Replaces the selection with `keys`, dropping repeated keys in linear time.
    ///
    /// The first occurrence of each key wins, so the result matches
    /// [`Selection::replace_with`].
    pub fn replace_with_hashed<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = T>,
    {
        let iter = keys.into_iter();
        let (lower, _) = iter.size_hint();
        let mut seen: HashSet<T> = HashSet::with_capacity(lower);
        let next: Vec<T> = iter.filter(|key| seen.insert(*key)).collect();
        self.install(next);
    }
}

#[cfg(debug_assertions)]
fn debug_assert_unique<T>(items: &[T])
where
    T: PartialEq,
{
    for (i, a) in items.iter().enumerate() {
        for (j, b) in items.iter().enumerate().skip(i + 1) {
            debug_assert!(a != b, "duplicate selection key at {i} and {j}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_is_first_in_selection_order() {
        let mut sel = Selection::new();
        sel.replace_with([3, 1, 2]);
        assert_eq!(sel.primary(), Some(&3));
        sel.remove(&3);
        assert_eq!(sel.primary(), Some(&1));
    }

    #[test]
    fn reordering_counts_as_a_change() {
        let mut sel = Selection::new();
        sel.replace_with([1, 2]);
        let rev = sel.revision();
        sel.replace_with([2, 1]);
        assert_eq!(sel.items(), &[2, 1]);
        assert!(sel.revision() > rev);
    }

    #[test]
    fn retain_and_truncate_bump_only_on_change() {
        let mut sel = Selection::new();
        sel.replace_with([1, 2, 3, 4]);
        let rev = sel.revision();

        sel.retain(|_| true);
        sel.truncate(10);
        assert_eq!(sel.revision(), rev);

        sel.retain(|k| k % 2 == 0);
        assert_eq!(sel.items(), &[2, 4]);
        sel.truncate(1);
        assert_eq!(sel.items(), &[2]);
        assert_eq!(sel.revision(), rev + 2);
    }
}
