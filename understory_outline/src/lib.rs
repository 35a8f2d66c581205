// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Outline: hierarchy, expansion state, and visible rows for tree views.
//!
//! This crate is the structural layer under a tree widget. It answers the
//! questions selection and keyboard navigation need to ask about a hierarchy:
//! who are my children, who is my parent, am I expanded, where am I on screen.
//!
//! - [`Hierarchy`]: the contract consumed by `understory_selection` and
//!   `understory_tree`. Implement it over your own scene or widget tree, or use
//!   the provided [`Outline`].
//! - [`Outline`]: a generational arena of nodes with a single synthetic root.
//!   Parents own ordered child lists; the parent link is a non-owning handle.
//! - [`visible_nodes`]: depth-first display-order iteration that skips the
//!   descendants of collapsed nodes.
//! - [`RowLayout`]: a stacked-rows layout that assigns tree-space bounds.
//!
//! It does **not** render anything or decide how rows look. Hosts run their
//! own layout and report the resulting rectangles through [`Outline::set_bounds`]
//! (or their own [`Hierarchy::bounds`]).
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_outline::{Hierarchy, Outline, RowLayout, visible_nodes};
//!
//! let mut outline = Outline::new();
//! let root = outline.root();
//! let src = outline.insert(root).unwrap();
//! let main_rs = outline.insert(src).unwrap();
//! let readme = outline.insert(root).unwrap();
//!
//! // Collapsed nodes hide their descendants.
//! let rows: Vec<_> = visible_nodes(&outline).collect();
//! assert_eq!(rows, [src, readme]);
//!
//! // Making a node visible expands its ancestors.
//! outline.expand_all_parents(main_rs);
//! let rows: Vec<_> = visible_nodes(&outline).collect();
//! assert_eq!(rows, [src, main_rs, readme]);
//!
//! // Stack rows 20px apart.
//! let layout = RowLayout { row_height: 20.0, ..RowLayout::default() };
//! assert_eq!(layout.apply(&mut outline), 60.0);
//! assert_eq!(outline.bounds(readme).unwrap().y0, 40.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod hierarchy;
mod layout;
mod outline;
mod visible;

pub use hierarchy::Hierarchy;
pub use layout::RowLayout;
pub use outline::{NodeId, Outline};
pub use visible::{VisibleNodes, visible_nodes};
