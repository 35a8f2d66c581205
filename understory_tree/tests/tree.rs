// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer gestures, selection pass-throughs, and node removal on `Tree`.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Point;
use understory_outline::{Hierarchy, NodeId, Outline, RowLayout};
use understory_selection::SelectionError;
use understory_tree::{Modifiers, RightClick, Tree, TreeConfig};

/// `root → [A → [A1], B, C]`, everything collapsed.
fn build(config: TreeConfig) -> (Tree<Outline>, [NodeId; 4]) {
    let mut outline = Outline::new();
    let root = outline.root();
    let a = outline.insert(root).unwrap();
    let a1 = outline.insert(a).unwrap();
    let b = outline.insert(root).unwrap();
    let c = outline.insert(root).unwrap();
    RowLayout::default().apply(&mut outline);
    (Tree::new(outline, config), [a, a1, b, c])
}

fn multi() -> TreeConfig {
    TreeConfig::default().with_multi_select(true)
}

#[test]
fn plain_click_selects_only_the_node() {
    let (mut tree, [a, _, b, _]) = build(multi());
    tree.select_many(&[a, b]).unwrap();

    tree.click(b, Modifiers::empty()).unwrap();
    assert_eq!(tree.selection(), &[b]);
    assert_eq!(tree.hierarchy().focused(), Some(b));
}

#[test]
fn ctrl_click_toggles() {
    let (mut tree, [a, _, b, _]) = build(multi());
    tree.click(a, Modifiers::empty()).unwrap();

    tree.click(b, Modifiers::CTRL).unwrap();
    assert_eq!(tree.selection(), &[a, b]);
    tree.click(a, Modifiers::CTRL).unwrap();
    assert_eq!(tree.selection(), &[b]);
}

#[test]
fn shift_click_selects_a_range() {
    let (mut tree, [a, _, b, c]) = build(multi());
    tree.click(a, Modifiers::empty()).unwrap();

    tree.click(c, Modifiers::SHIFT).unwrap();
    assert_eq!(tree.selection(), &[a, b, c]);
    // Shift takes precedence over Ctrl; `b` is already inside the range.
    tree.click(b, Modifiers::SHIFT | Modifiers::CTRL).unwrap();
    assert_eq!(tree.selection(), &[a, b, c]);
}

#[test]
fn shift_click_on_single_select_selects_the_node() {
    let (mut tree, [a, _, _, c]) = build(TreeConfig::default());
    tree.click(a, Modifiers::empty()).unwrap();

    tree.click(c, Modifiers::SHIFT).unwrap();
    assert_eq!(tree.selection(), &[c]);
}

#[test]
fn right_click_notifies_without_touching_the_selection() {
    let (mut tree, [a, _, b, _]) = build(multi());
    tree.select(a).unwrap();
    let seen: Rc<RefCell<Vec<RightClick<NodeId>>>> = Rc::default();
    let sink = seen.clone();
    tree.on_right_click(move |event| sink.borrow_mut().push(*event));

    let location = Point::new(12.0, 30.0);
    tree.right_click(b, location);
    assert_eq!(*seen.borrow(), vec![RightClick { node: b, location }]);
    assert_eq!(tree.selection(), &[a]);
}

#[test]
fn right_click_observers_run_in_registration_order() {
    let (mut tree, [a, ..]) = build(multi());
    let order = Rc::new(RefCell::new(Vec::new()));
    for name in ["first", "second"] {
        let order = order.clone();
        tree.on_right_click(move |_| order.borrow_mut().push(name));
    }

    tree.right_click(a, Point::ZERO);
    assert_eq!(*order.borrow(), ["first", "second"]);
}

#[test]
fn deselect_removes_only_present_nodes() {
    let (mut tree, [a, _, b, c]) = build(multi());
    tree.select_many(&[a, b]).unwrap();

    tree.deselect(c).unwrap();
    assert_eq!(tree.selection(), &[a, b]);
    tree.deselect(a).unwrap();
    assert_eq!(tree.selection(), &[b]);
    assert_eq!(tree.selected_node(), Some(b));
}

#[test]
fn remove_node_drops_the_subtree_from_the_selection() {
    let (mut tree, [a, a1, b, _]) = build(multi());
    tree.select_many(&[a1, b]).unwrap();
    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = changes.clone();
    tree.on_selection_changed(move |change| {
        sink.borrow_mut().push(change.after.to_vec());
    });

    assert_eq!(tree.remove_node(a), 2);
    assert_eq!(tree.selection(), &[b]);
    assert_eq!(*changes.borrow(), vec![vec![b]]);

    assert_eq!(tree.select(a1), Err(SelectionError::InvalidNode(a1)));
    assert_eq!(tree.deselect(a), Err(SelectionError::InvalidNode(a)));
    assert_eq!(tree.remove_node(a), 0);
}

#[test]
fn nodes_removed_behind_the_trees_back_are_pruned_on_demand() {
    let (mut tree, [a, _, b, _]) = build(multi());
    tree.select_many(&[a, b]).unwrap();

    tree.hierarchy_mut().remove(a);
    assert_eq!(tree.selection(), &[a, b]);
    tree.prune_selection();
    assert_eq!(tree.selection(), &[b]);
}

#[test]
fn turning_off_multi_select_keeps_the_live_primary() {
    let (mut tree, [a, a1, b, _]) = build(multi());
    tree.select_many(&[a1, b]).unwrap();

    tree.hierarchy_mut().remove(a);
    tree.set_multi_select(false);
    assert_eq!(tree.selection(), &[b]);
    assert!(!tree.store().is_multi_select());
}

#[test]
fn select_all_visible_and_clear() {
    let (mut tree, [a, _, b, c]) = build(multi());
    tree.select_all_visible();
    assert_eq!(tree.selection(), &[a, b, c]);

    tree.clear_selection();
    assert_eq!(tree.selected_node(), None);
}
