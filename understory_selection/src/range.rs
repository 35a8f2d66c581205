// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range selection from on-screen rows.
//!
//! A range gesture (shift-click) selects everything that lies between the
//! current selection and the clicked node *as the user sees it*. Because the
//! visible order already reflects which branches are expanded, the range is
//! computed from tree-space geometry rather than from child indices:
//!
//! 1. Every selected node contributes a thin row strip starting at its anchor
//!    point; their union is the current vertical [`RowSpan`].
//! 2. The span is stretched up or down to cover the end node's strip.
//! 3. A depth-first walk over the expanded hierarchy collects every node whose
//!    anchor point falls inside the span, pruning subtrees whose bounds miss it.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Vec2};
use understory_outline::Hierarchy;

/// Tolerance used when deciding which edge of the span the end node extends.
const EDGE_EPSILON: f64 = 1e-6;

/// Geometry parameters for range selection.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RangeConfig {
    /// Height of the strip a single node contributes; roughly one row or less.
    pub strip_height: f64,
    /// Offset from a node's bounds origin to its anchor point.
    pub anchor_offset: Vec2,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            strip_height: 4.0,
            anchor_offset: Vec2::new(1.0, 1.0),
        }
    }
}

/// A half-open vertical interval `[top, bottom)` in tree space.
///
/// Horizontally unbounded: indentation never excludes a row from a range.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RowSpan {
    /// Inclusive upper edge.
    pub top: f64,
    /// Exclusive lower edge.
    pub bottom: f64,
}

impl RowSpan {
    /// The strip a node anchored at `anchor` contributes.
    #[must_use]
    pub fn strip(anchor: Point, height: f64) -> Self {
        Self {
            top: anchor.y,
            bottom: anchor.y + height,
        }
    }

    /// The smallest span covering both `self` and `other`.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            top: self.top.min(other.top),
            bottom: self.bottom.max(other.bottom),
        }
    }

    /// Stretches one edge so the span reaches `end`.
    ///
    /// If `end` starts at or above the top, the top moves up to it. Otherwise,
    /// if `end` reaches at or below the bottom, the bottom moves down to it.
    /// An `end` strip already inside the span leaves it unchanged.
    #[must_use]
    pub fn extend_to(self, end: Self) -> Self {
        if end.top - EDGE_EPSILON <= self.top {
            Self {
                top: end.top,
                ..self
            }
        } else if end.bottom + EDGE_EPSILON >= self.bottom {
            Self {
                bottom: end.bottom,
                ..self
            }
        } else {
            self
        }
    }

    /// Returns `true` if `point` lies on a row inside the span.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.y >= self.top && point.y < self.bottom
    }

    /// Returns `true` if `rect` overlaps the span vertically.
    #[must_use]
    pub fn intersects(&self, rect: Rect) -> bool {
        rect.y0 < self.bottom && rect.y1 > self.top
    }
}

/// Computes the span from `selected` to `end`.
///
/// Nodes without bounds are ignored. Returns `None` when `end` has no bounds
/// or none of `selected` does.
pub fn range_span<H>(
    tree: &H,
    selected: &[H::Key],
    end: H::Key,
    config: &RangeConfig,
) -> Option<RowSpan>
where
    H: Hierarchy + ?Sized,
{
    let strip_of = |key: H::Key| {
        tree.anchor_point(key, config.anchor_offset)
            .map(|anchor| RowSpan::strip(anchor, config.strip_height))
    };
    let current = selected
        .iter()
        .filter_map(|&key| strip_of(key))
        .reduce(RowSpan::union)?;
    Some(current.extend_to(strip_of(end)?))
}

/// Collects the visible nodes whose anchor point lies inside `span`.
///
/// Walks depth-first from the root's children in display order. A node is
/// descended into only if it is expanded and its bounds intersect the span.
pub fn nodes_in_span<H>(tree: &H, span: RowSpan, anchor_offset: Vec2) -> Vec<H::Key>
where
    H: Hierarchy + ?Sized,
{
    let mut out = Vec::new();
    let mut stack: Vec<H::Key> = tree.children(tree.root()).iter().rev().copied().collect();
    while let Some(key) = stack.pop() {
        let Some(bounds) = tree.bounds(key) else {
            continue;
        };
        if span.contains(bounds.origin() + anchor_offset) {
            out.push(key);
        }
        if tree.is_expanded(key) && span.intersects(bounds) {
            stack.extend(tree.children(key).iter().rev().copied());
        }
    }
    out
}
