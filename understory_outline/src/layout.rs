// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A minimal stacked-rows layout for [`Outline`].

use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::{Hierarchy, NodeId, Outline};

/// Stacks visible rows top to bottom with a fixed row height and indent.
///
/// This is a stand-in for a host layout pass: it assigns every visible node a
/// rectangle covering its own row plus the rows of its visible descendants,
/// which is the shape range selection expects from [`Hierarchy::bounds`].
/// Descendants of collapsed nodes keep whatever bounds they had.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RowLayout {
    /// Top-left corner of the first row.
    pub origin: Point,
    /// Height of one row.
    pub row_height: f64,
    /// Horizontal offset added per depth level.
    pub indent: f64,
    /// Right edge of every row, relative to `origin`.
    pub width: f64,
}

impl Default for RowLayout {
    fn default() -> Self {
        Self {
            origin: Point::ZERO,
            row_height: 20.0,
            indent: 16.0,
            width: 300.0,
        }
    }
}

impl RowLayout {
    /// Lays out all visible nodes of `outline` and returns the content height.
    ///
    /// The root receives bounds spanning the whole content.
    pub fn apply(&self, outline: &mut Outline) -> f64 {
        let root = outline.root();
        let mut y = self.origin.y;
        let mut stack: Vec<Step> = outline
            .children(root)
            .iter()
            .rev()
            .map(|&id| Step::Enter(id, 0))
            .collect();
        while let Some(step) = stack.pop() {
            match step {
                Step::Enter(id, depth) => {
                    let top = y;
                    y += self.row_height;
                    if outline.is_expanded(id) {
                        // Bounds are closed once every visible descendant is placed.
                        stack.push(Step::Exit(id, depth, top));
                        stack.extend(
                            outline
                                .children(id)
                                .iter()
                                .rev()
                                .map(|&child| Step::Enter(child, depth + 1)),
                        );
                    } else {
                        outline.set_bounds(id, self.node_rect(depth, top, y));
                    }
                }
                Step::Exit(id, depth, top) => {
                    outline.set_bounds(id, self.node_rect(depth, top, y));
                }
            }
        }
        let right = self.origin.x + self.width;
        outline.set_bounds(root, Rect::new(self.origin.x, self.origin.y, right, y));
        y - self.origin.y
    }

    /// Returns the y coordinate of row `index` (zero based).
    #[must_use]
    pub fn row_top(&self, index: usize) -> f64 {
        self.origin.y + self.row_height * index as f64
    }

    fn node_rect(&self, depth: usize, top: f64, bottom: f64) -> Rect {
        let left = self.origin.x + self.indent * depth as f64;
        let right = self.origin.x + self.width;
        Rect::new(left, top, right.max(left), bottom)
    }
}

/// Pending work for the layout walk.
enum Step {
    /// Place the row of a node at the given depth.
    Enter(NodeId, usize),
    /// Close the bounds of an expanded node at the given depth and row top.
    Exit(NodeId, usize, f64),
}
