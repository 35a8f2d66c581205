// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard navigation over the visible rows of a tree.
//!
//! [`NavigationController`] turns held arrow keys into selection moves. Vertical
//! keys auto-repeat at [`NavigationConfig::key_repeat_interval`]; horizontal
//! keys act once per press. The pure helpers [`up_target`] and [`down_target`]
//! compute where a vertical step lands without touching any state.

use core::time::Duration;

use understory_outline::Hierarchy;
use understory_selection::SelectionStore;

use crate::keys::{ArrowKeys, Key, Modifiers};

/// A single navigation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The visible row above.
    Up,
    /// The visible row below.
    Down,
    /// Collapse, or move to the parent when already collapsed.
    Left,
    /// Expand, or move to the first child when already expanded.
    Right,
}

/// Where [`Direction::Down`] goes from the last child of a subtree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DownExit {
    /// Climb ancestors until one has a next sibling. This always lands on the
    /// next visible row.
    #[default]
    NearestAncestor,
    /// Only look at the parent's next sibling. From the last leaf of a nested
    /// chain of last children this is a no-op.
    ParentOnly,
}

/// Configuration for [`NavigationController`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationConfig {
    /// Minimum time between two steps while a vertical key stays held.
    pub key_repeat_interval: Duration,
    /// Behavior of Down at the end of a subtree.
    pub down_exit: DownExit,
}

impl NavigationConfig {
    /// Default repeat interval for held vertical keys.
    pub const DEFAULT_KEY_REPEAT_INTERVAL: Duration = Duration::from_millis(120);

    /// Returns a copy with the given repeat interval.
    #[must_use]
    pub fn with_key_repeat_interval(mut self, interval: Duration) -> Self {
        self.key_repeat_interval = interval;
        self
    }

    /// Returns a copy with the given [`DownExit`] policy.
    #[must_use]
    pub fn with_down_exit(mut self, down_exit: DownExit) -> Self {
        self.down_exit = down_exit;
        self
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            key_repeat_interval: Self::DEFAULT_KEY_REPEAT_INTERVAL,
            down_exit: DownExit::default(),
        }
    }
}

/// Whether keyboard input currently drives the selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavState {
    /// No focus, nothing selected, or the primary node is the root or dead.
    Idle,
    /// Focused with a live, non-root primary node.
    Active,
}

/// Per-frame keyboard navigation state.
#[derive(Clone, Debug)]
pub struct NavigationController {
    config: NavigationConfig,
    focused: bool,
    since_repeat: Duration,
    held: ArrowKeys,
}

impl NavigationController {
    /// Creates an unfocused controller.
    #[must_use]
    pub fn new(config: NavigationConfig) -> Self {
        Self {
            config,
            focused: false,
            since_repeat: Duration::ZERO,
            held: ArrowKeys::empty(),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    /// Returns `true` while the tree has keyboard focus.
    #[must_use]
    pub fn has_focus(&self) -> bool {
        self.focused
    }

    /// Marks the tree focused and restarts the repeat timer.
    pub fn focus_gained(&mut self) {
        self.focused = true;
        self.since_repeat = Duration::ZERO;
    }

    /// Marks the tree unfocused.
    ///
    /// Held keys are still tracked while unfocused, so a key that stays down
    /// across a focus change must be released and pressed again to act at once.
    pub fn focus_lost(&mut self) {
        self.focused = false;
    }

    /// Returns the current [`NavState`].
    #[must_use]
    pub fn state<H>(&self, tree: &H, store: &SelectionStore<H::Key>) -> NavState
    where
        H: Hierarchy + ?Sized,
    {
        match store.primary() {
            Some(&primary) if self.focused && tree.is_alive(primary) && !tree.is_root(primary) => {
                NavState::Active
            }
            _ => NavState::Idle,
        }
    }

    /// Advances one frame with the arrow keys `held` during it and the frame
    /// duration `dt`.
    ///
    /// A vertical key acts as soon as it goes down and then again whenever the
    /// repeat interval has elapsed while it stays held. Holding Up and Down
    /// together does nothing. Left and Right act once per press, after any
    /// vertical move and against the new primary node; Right wins if both go
    /// down in the same frame.
    ///
    /// Returns `true` if the selection or an expansion state changed.
    pub fn update<H>(
        &mut self,
        tree: &mut H,
        store: &mut SelectionStore<H::Key>,
        held: ArrowKeys,
        dt: Duration,
    ) -> bool
    where
        H: Hierarchy + ?Sized,
    {
        let pressed = held.difference(self.held);
        self.held = held;
        if self.state(&*tree, &*store) == NavState::Idle {
            return false;
        }

        if pressed.is_empty() {
            self.since_repeat = self.since_repeat.saturating_add(dt);
        } else {
            self.since_repeat = Duration::ZERO;
        }

        let mut changed = false;
        let up = held.contains(ArrowKeys::UP);
        let down = held.contains(ArrowKeys::DOWN);
        let fresh = pressed.intersects(ArrowKeys::UP | ArrowKeys::DOWN);
        if up != down && (fresh || self.since_repeat >= self.config.key_repeat_interval) {
            let direction = if up { Direction::Up } else { Direction::Down };
            changed |= self.navigate(tree, store, direction);
            self.since_repeat = Duration::ZERO;
        }

        if pressed.contains(ArrowKeys::RIGHT) {
            changed |= self.navigate(tree, store, Direction::Right);
        } else if pressed.contains(ArrowKeys::LEFT) {
            changed |= self.navigate(tree, store, Direction::Left);
        }
        changed
    }

    /// Handles a discrete key press. Returns `true` if the key was consumed.
    ///
    /// Ctrl+A selects every visible node on a focused multi-select tree. Arrow
    /// keys take one navigation step, without key repeat, and are consumed
    /// only when the step changed something.
    pub fn key_down<H>(
        &self,
        tree: &mut H,
        store: &mut SelectionStore<H::Key>,
        key: Key,
        modifiers: Modifiers,
    ) -> bool
    where
        H: Hierarchy + ?Sized,
    {
        if !self.focused {
            return false;
        }
        match key {
            Key::Character('a' | 'A')
                if modifiers.contains(Modifiers::CTRL) && store.is_multi_select() =>
            {
                store.select_all_visible(&*tree);
                true
            }
            Key::ArrowUp => self.navigate(tree, store, Direction::Up),
            Key::ArrowDown => self.navigate(tree, store, Direction::Down),
            Key::ArrowLeft => self.navigate(tree, store, Direction::Left),
            Key::ArrowRight => self.navigate(tree, store, Direction::Right),
            Key::Character(_) => false,
        }
    }

    /// Performs one navigation step from the primary node, ignoring focus and
    /// key-repeat state.
    ///
    /// Returns `true` if the selection or an expansion state changed.
    pub fn navigate<H>(
        &self,
        tree: &mut H,
        store: &mut SelectionStore<H::Key>,
        direction: Direction,
    ) -> bool
    where
        H: Hierarchy + ?Sized,
    {
        let Some(&node) = store.primary() else {
            return false;
        };
        if !tree.is_alive(node) || tree.is_root(node) {
            return false;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(?direction, ?node, "tree navigation");

        match direction {
            Direction::Up => {
                let target = up_target(&*tree, node);
                select(tree, store, target)
            }
            Direction::Down => {
                let target = down_target(&*tree, node, self.config.down_exit);
                select(tree, store, target)
            }
            Direction::Right => {
                if !tree.is_expanded(node) {
                    tree.set_expanded(node, true);
                    true
                } else {
                    let first = tree.children(node).first().copied();
                    select(tree, store, first)
                }
            }
            Direction::Left => {
                if tree.is_expanded(node) {
                    tree.set_expanded(node, false);
                    true
                } else {
                    let parent = tree.parent(node).filter(|&p| !tree.is_root(p));
                    select(tree, store, parent)
                }
            }
        }
    }
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new(NavigationConfig::default())
    }
}

fn select<H>(tree: &mut H, store: &mut SelectionStore<H::Key>, target: Option<H::Key>) -> bool
where
    H: Hierarchy + ?Sized,
{
    let Some(target) = target else {
        return false;
    };
    let revision = store.revision();
    if let Err(err) = store.select_single(tree, target) {
        debug_assert!(false, "navigation produced a dead node: {err}");
        return false;
    }
    store.revision() != revision
}

fn sibling_index<H>(tree: &H, parent: H::Key, node: H::Key) -> Option<usize>
where
    H: Hierarchy + ?Sized,
{
    let index = tree.children(parent).iter().position(|&c| c == node);
    debug_assert!(index.is_some(), "{parent:?} does not list child {node:?}");
    index
}

/// Returns the visible row above `node`, or `None` at the top of the tree.
///
/// The previous sibling is entered through its last children as long as they
/// are expanded; the first child steps out to its parent unless that is the
/// root.
#[must_use]
pub fn up_target<H>(tree: &H, node: H::Key) -> Option<H::Key>
where
    H: Hierarchy + ?Sized,
{
    let parent = tree.parent(node)?;
    let index = sibling_index(tree, parent, node)?;
    if index == 0 {
        return (!tree.is_root(parent)).then_some(parent);
    }
    let mut target = tree.children(parent)[index - 1];
    while tree.is_expanded(target) {
        match tree.children(target).last() {
            Some(&last) => target = last,
            None => break,
        }
    }
    Some(target)
}

/// Returns the row below `node` under the given [`DownExit`] policy, or
/// `None` at the bottom of the tree.
#[must_use]
pub fn down_target<H>(tree: &H, node: H::Key, exit: DownExit) -> Option<H::Key>
where
    H: Hierarchy + ?Sized,
{
    if tree.is_expanded(node)
        && let Some(&first) = tree.children(node).first()
    {
        return Some(first);
    }
    let mut current = node;
    loop {
        let parent = tree.parent(current)?;
        let index = sibling_index(tree, parent, current)?;
        if let Some(&next) = tree.children(parent).get(index + 1) {
            return Some(next);
        }
        if tree.is_root(parent) || (exit == DownExit::ParentOnly && current != node) {
            return None;
        }
        current = parent;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use understory_outline::{NodeId, Outline};
    use understory_selection::SelectionConfig;

    /// `root → [x → [y → [z]], w]`, fully expanded.
    fn nested() -> (Outline, [NodeId; 4]) {
        let mut outline = Outline::new();
        let root = outline.root();
        let x = outline.insert(root).unwrap();
        let y = outline.insert(x).unwrap();
        let z = outline.insert(y).unwrap();
        let w = outline.insert(root).unwrap();
        outline.expand(x);
        outline.expand(y);
        (outline, [x, y, z, w])
    }

    #[test]
    fn up_descends_into_expanded_last_children() {
        let (outline, [x, y, z, w]) = nested();
        assert_eq!(up_target(&outline, w), Some(z));
        assert_eq!(up_target(&outline, z), Some(y));
        assert_eq!(up_target(&outline, y), Some(x));
        assert_eq!(up_target(&outline, x), None);
    }

    #[test]
    fn up_stops_at_collapsed_sibling() {
        let (mut outline, [x, _, _, w]) = nested();
        outline.collapse(x);
        assert_eq!(up_target(&outline, w), Some(x));
    }

    #[test]
    fn down_exit_policies_differ_on_last_child_chains() {
        let (outline, [x, y, z, w]) = nested();
        assert_eq!(down_target(&outline, x, DownExit::ParentOnly), Some(y));
        assert_eq!(down_target(&outline, z, DownExit::NearestAncestor), Some(w));
        assert_eq!(down_target(&outline, z, DownExit::ParentOnly), None);
        assert_eq!(down_target(&outline, y, DownExit::ParentOnly), Some(z));
        assert_eq!(down_target(&outline, w, DownExit::NearestAncestor), None);
    }

    #[test]
    fn down_skips_collapsed_children() {
        let (mut outline, [x, y, _, w]) = nested();
        outline.collapse(y);
        // One level of climbing is still allowed.
        assert_eq!(down_target(&outline, y, DownExit::ParentOnly), Some(w));
        outline.collapse(x);
        assert_eq!(down_target(&outline, x, DownExit::default()), Some(w));
    }

    #[test]
    fn state_requires_focus_and_a_live_non_root_primary() {
        let (mut outline, [x, ..]) = nested();
        let mut store = SelectionStore::new(SelectionConfig::multi());
        let mut nav = NavigationController::default();
        assert_eq!(nav.state(&outline, &store), NavState::Idle);

        store.select_single(&mut outline, x).unwrap();
        assert_eq!(nav.state(&outline, &store), NavState::Idle);
        nav.focus_gained();
        assert_eq!(nav.state(&outline, &store), NavState::Active);

        let root = outline.root();
        store.select_single(&mut outline, root).unwrap();
        assert_eq!(nav.state(&outline, &store), NavState::Idle);
    }
}
