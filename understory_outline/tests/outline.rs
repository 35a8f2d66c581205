// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_outline` crate.
//!
//! These exercise the provided [`Hierarchy`] helpers through [`Outline`]:
//! reachability, visibility under collapsed ancestors, and anchor points.

use kurbo::{Point, Rect, Vec2};
use understory_outline::{Hierarchy, Outline, RowLayout, visible_nodes};

fn three_levels() -> (Outline, [understory_outline::NodeId; 3]) {
    let mut outline = Outline::new();
    let root = outline.root();
    let a = outline.insert(root).unwrap();
    let a1 = outline.insert(a).unwrap();
    let a1x = outline.insert(a1).unwrap();
    (outline, [a, a1, a1x])
}

#[test]
fn expand_all_parents_makes_deep_node_visible() {
    let (mut outline, [a, a1, a1x]) = three_levels();
    assert!(!outline.is_visible(a1x));

    outline.expand_all_parents(a1x);
    assert!(outline.is_expanded(a));
    assert!(outline.is_expanded(a1));
    // The node itself is not touched.
    assert!(!outline.is_expanded(a1x));
    assert!(outline.is_visible(a1x));
}

#[test]
fn root_is_never_visible() {
    let outline = Outline::new();
    let root = outline.root();
    assert!(outline.is_root(root));
    assert!(outline.is_reachable(root));
    assert!(!outline.is_visible(root));
}

#[test]
fn removed_nodes_are_unreachable() {
    let (mut outline, [a, a1, _]) = three_levels();
    assert!(outline.is_reachable(a1));
    outline.remove(a);
    assert!(!outline.is_reachable(a1));
    assert!(outline.children(a1).is_empty());
    assert_eq!(outline.parent(a1), None);
    assert_eq!(outline.bounds(a1), None);
}

#[test]
fn collapsing_hides_whole_subtree() {
    let (mut outline, [a, a1, a1x]) = three_levels();
    outline.expand_all_parents(a1x);
    assert_eq!(visible_nodes(&outline).collect::<Vec<_>>(), [a, a1, a1x]);

    outline.collapse(a);
    assert_eq!(visible_nodes(&outline).collect::<Vec<_>>(), [a]);
    // Expansion state below the collapsed node is preserved.
    assert!(outline.is_expanded(a1));

    outline.toggle_expanded(a);
    assert_eq!(visible_nodes(&outline).count(), 3);
}

#[test]
fn anchor_point_is_offset_from_bounds_origin() {
    let (mut outline, [a, ..]) = three_levels();
    outline.set_bounds(a, Rect::new(10.0, 40.0, 200.0, 60.0));
    assert_eq!(
        outline.anchor_point(a, Vec2::new(1.0, 1.0)),
        Some(Point::new(11.0, 41.0))
    );
}

#[test]
fn layout_indents_by_depth() {
    let (mut outline, [a, a1, a1x]) = three_levels();
    outline.expand_all_parents(a1x);
    let layout = RowLayout {
        origin: Point::new(5.0, 100.0),
        row_height: 10.0,
        indent: 8.0,
        width: 120.0,
    };
    assert_eq!(layout.apply(&mut outline), 30.0);
    assert_eq!(outline.bounds(a).unwrap().x0, 5.0);
    assert_eq!(outline.bounds(a1).unwrap().x0, 13.0);
    assert_eq!(
        outline.bounds(a1x),
        Some(Rect::new(21.0, 120.0, 125.0, 130.0))
    );
    assert_eq!(
        outline.bounds(outline.root()),
        Some(Rect::new(5.0, 100.0, 125.0, 130.0))
    );
}
