// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Selection: selection bookkeeping for hierarchical views.
//!
//! This crate owns the answer to "which nodes are selected?" for a tree view and
//! tells interested parties when that answer changes.
//!
//! - [`Selection`]: an ordered, duplicate-free set of keys. The first key is the
//!   **primary** selection. A revision counter bumps only on real changes.
//! - [`SelectionStore`]: the tree-scoped store. It applies tree rules on top of
//!   [`Selection`] (expanding ancestors of selected nodes, single vs. multi
//!   select, dropping stale entries) and notifies observers with before/after
//!   snapshots, at most once per operation and only when the contents differ.
//! - [`range`]: range selection computed from on-screen rows rather than child
//!   indices, so it follows exactly what the user sees.
//!
//! The hierarchy is reached only through [`understory_outline::Hierarchy`].
//!
//! ## Minimal example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use understory_outline::{Hierarchy, Outline, RowLayout};
//! use understory_selection::{SelectionConfig, SelectionStore};
//!
//! let mut outline = Outline::new();
//! let root = outline.root();
//! let a = outline.insert(root).unwrap();
//! let b = outline.insert(root).unwrap();
//! let c = outline.insert(root).unwrap();
//! RowLayout::default().apply(&mut outline);
//!
//! let mut store = SelectionStore::new(SelectionConfig::multi());
//! let changes = Rc::new(Cell::new(0));
//! let counter = changes.clone();
//! store.subscribe(move |_| counter.set(counter.get() + 1));
//!
//! // Plain click.
//! store.select_single(&mut outline, a).unwrap();
//! assert_eq!(store.primary(), Some(&a));
//!
//! // Shift-click on `c` selects every row in between.
//! store.select_range(&mut outline, c).unwrap();
//! assert_eq!(store.items(), &[a, b, c]);
//!
//! // Re-selecting the same single node later is a no-op.
//! store.select_single(&mut outline, b).unwrap();
//! store.select_single(&mut outline, b).unwrap();
//! assert_eq!(changes.get(), 3);
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events when the selection changes or stale
//!   entries are dropped.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
pub mod range;
mod selection;
mod store;

pub use error::SelectionError;
pub use range::{RangeConfig, RowSpan};
pub use selection::Selection;
pub use store::{ObserverId, SelectionChange, SelectionConfig, SelectionStore};
