// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-agnostic keyboard input types.

bitflags::bitflags! {
    /// The set of arrow keys held during a frame.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ArrowKeys: u8 {
        /// Arrow up.
        const UP    = 0b0000_0001;
        /// Arrow down.
        const DOWN  = 0b0000_0010;
        /// Arrow left.
        const LEFT  = 0b0000_0100;
        /// Arrow right.
        const RIGHT = 0b0000_1000;
    }
}

bitflags::bitflags! {
    /// Modifier keys held while a key or pointer event occurred.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT = 0b0000_0001;
        /// Control (Command on macOS hosts that map it so).
        const CTRL  = 0b0000_0010;
        /// Alt / Option.
        const ALT   = 0b0000_0100;
        /// Meta / Super.
        const META  = 0b0000_1000;
    }
}

/// A discrete key press delivered to [`Tree::key_down`](crate::Tree::key_down).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Arrow up.
    ArrowUp,
    /// Arrow down.
    ArrowDown,
    /// Arrow left.
    ArrowLeft,
    /// Arrow right.
    ArrowRight,
    /// A printable character, as produced by the host's keymap.
    Character(char),
}

impl Key {
    /// Returns the arrow flag for arrow keys.
    #[must_use]
    pub fn arrow(self) -> Option<ArrowKeys> {
        match self {
            Self::ArrowUp => Some(ArrowKeys::UP),
            Self::ArrowDown => Some(ArrowKeys::DOWN),
            Self::ArrowLeft => Some(ArrowKeys::LEFT),
            Self::ArrowRight => Some(ArrowKeys::RIGHT),
            Self::Character(_) => None,
        }
    }
}
