// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Tree: interaction state for hierarchical tree views.
//!
//! This crate ties a [`Hierarchy`](understory_outline::Hierarchy) to a
//! [`SelectionStore`](understory_selection::SelectionStore) and drives both
//! from pointer gestures and keyboard input.
//!
//! - [`NavigationController`]: per-frame arrow-key handling. Up/Down walk the
//!   visible rows with auto-repeat; Left/Right collapse, expand, and step
//!   between parent and child. Ctrl+A selects every visible node.
//! - [`Tree`]: a container owning the hierarchy, the store, and the controller,
//!   with click, Ctrl-click, Shift-click, and right-click handling.
//!
//! It does not draw anything, and it does not decide which node is under the
//! pointer: hosts hit test their own rows and pass node keys in.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//!
//! use understory_outline::{Hierarchy, Outline, RowLayout};
//! use understory_tree::{ArrowKeys, Modifiers, Tree, TreeConfig};
//!
//! let mut outline = Outline::new();
//! let root = outline.root();
//! let docs = outline.insert(root).unwrap();
//! let guide = outline.insert(docs).unwrap();
//! let src = outline.insert(root).unwrap();
//! RowLayout::default().apply(&mut outline);
//!
//! let mut tree = Tree::new(outline, TreeConfig::default().with_multi_select(true));
//! tree.focus_gained();
//! tree.click(docs, Modifiers::empty()).unwrap();
//!
//! let frame = Duration::from_millis(16);
//! // Right expands `docs`; releasing and pressing again enters it.
//! tree.update(ArrowKeys::RIGHT, frame);
//! tree.update(ArrowKeys::empty(), frame);
//! tree.update(ArrowKeys::RIGHT, frame);
//! assert_eq!(tree.selected_node(), Some(guide));
//!
//! tree.update(ArrowKeys::empty(), frame);
//! tree.update(ArrowKeys::DOWN, frame);
//! assert_eq!(tree.selected_node(), Some(src));
//! ```
//!
//! Rows keep whatever bounds the hierarchy reports. After expanding or
//! collapsing an [`Outline`](understory_outline::Outline), rerun its
//! [`RowLayout`](understory_outline::RowLayout) before range selection.
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events for navigation steps and selection
//!   changes.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod keys;
pub mod navigation;
mod tree;

pub use keys::{ArrowKeys, Key, Modifiers};
pub use navigation::{
    Direction, DownExit, NavState, NavigationConfig, NavigationController, down_target,
    up_target,
};
pub use tree::{RightClick, Tree, TreeConfig};
