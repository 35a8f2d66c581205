// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by selection operations.

use core::fmt;

/// Error returned when a selection operation is handed a bad argument.
///
/// This is a caller bug: the operation made no change and fired no
/// notification.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub enum SelectionError<K> {
    /// The key does not refer to a live node of the hierarchy.
    InvalidNode(K),
}

impl<K: fmt::Debug> fmt::Debug for SelectionError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNode(key) => write!(f, "InvalidNode({key:?})"),
        }
    }
}

impl<K: fmt::Debug> fmt::Display for SelectionError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNode(key) => write!(f, "{key:?} is not a live node of this tree"),
        }
    }
}

impl<K: fmt::Debug> core::error::Error for SelectionError<K> {}
