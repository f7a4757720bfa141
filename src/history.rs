//! Append-only log of the raw command lines a session has executed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised by indexed access into a [`CommandHistory`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("history index {index} out of range for {len} entries")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Ordered record of every command line executed so far.
///
/// Insertion order is execution order and duplicates are kept. The replay
/// trigger itself is never recorded; that exclusion is enforced by the
/// interpreter, not here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandHistory {
    entries: Vec<String>,
}

impl CommandHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a command line.
    pub fn append(&mut self, command: impl Into<String>) {
        self.entries.push(command.into());
    }

    /// Returns an independent copy of all entries in execution order.
    ///
    /// Later appends do not affect a previously returned vector; replay
    /// relies on this to iterate a stable snapshot.
    pub fn all(&self) -> Vec<String> {
        self.entries.clone()
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry at `index`, or [`HistoryError::IndexOutOfRange`] when
    /// `index` is not within `[0, len())`.
    pub fn at(&self, index: usize) -> Result<&str, HistoryError> {
        self.entries
            .get(index)
            .map(String::as_str)
            .ok_or(HistoryError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            })
    }
}
