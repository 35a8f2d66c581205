// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Depth-first projection of the visible rows.

use alloc::vec::Vec;
use core::fmt;

use crate::Hierarchy;

/// Iterator over the visible nodes of a [`Hierarchy`].
///
/// Yields nodes in display order: depth-first, children in order, descending
/// only into expanded nodes. The root itself is never yielded.
pub struct VisibleNodes<'a, H: Hierarchy + ?Sized> {
    tree: &'a H,
    stack: Vec<H::Key>,
}

impl<H: Hierarchy + ?Sized> fmt::Debug for VisibleNodes<'_, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisibleNodes")
            .field("stack", &self.stack)
            .finish_non_exhaustive()
    }
}

impl<H: Hierarchy + ?Sized> Iterator for VisibleNodes<'_, H> {
    type Item = H::Key;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.stack.pop()?;
        if self.tree.is_expanded(key) {
            // Reverse so the first child is popped next.
            self.stack
                .extend(self.tree.children(key).iter().rev().copied());
        }
        Some(key)
    }
}

/// Returns an iterator over the visible nodes of `tree` in display order.
pub fn visible_nodes<H: Hierarchy + ?Sized>(tree: &H) -> VisibleNodes<'_, H> {
    let root = tree.root();
    let stack = tree.children(root).iter().rev().copied().collect();
    VisibleNodes { tree, stack }
}
