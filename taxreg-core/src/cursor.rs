//! Snapshot traversal over registered persons.
//!
//! A [`Cursor`] is produced by
//! [`TaxRegister::list_by_identity`](crate::TaxRegister::list_by_identity).
//! It owns a frozen copy of the identity-ordered view taken at call time, so
//! it stays valid and unchanged no matter what happens to the register
//! afterwards.

use serde::{Deserialize, Serialize};

/// One row of a snapshot: the person's keys at capture time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorEntry {
    pub name: String,
    pub address: String,
    pub account: String,
}

/// Read-only, ordered traversal over a snapshot of the register.
///
/// Rows come in (name, address) order. The `current_*` accessors return an
/// empty string once the cursor is past the last row — never an error — so
/// callers can drive traversal with `at_end`/`advance` alone. The cursor
/// also implements [`Iterator`], sharing the same position.
#[derive(Debug, Clone)]
pub struct Cursor {
    entries: Vec<CursorEntry>,
    index: usize,
}

impl Cursor {
    pub(crate) fn new(entries: Vec<CursorEntry>) -> Self {
        Self { entries, index: 0 }
    }

    /// True once every row has been visited. An empty snapshot starts at
    /// the end.
    pub fn at_end(&self) -> bool {
        self.index >= self.entries.len()
    }

    /// Step to the next row. No-op if already at the end.
    pub fn advance(&mut self) {
        if !self.at_end() {
            self.index += 1;
        }
    }

    pub fn current_name(&self) -> &str {
        self.current().map(|e| e.name.as_str()).unwrap_or("")
    }

    pub fn current_address(&self) -> &str {
        self.current().map(|e| e.address.as_str()).unwrap_or("")
    }

    pub fn current_account(&self) -> &str {
        self.current().map(|e| e.account.as_str()).unwrap_or("")
    }

    /// The row under the cursor, or `None` at the end.
    pub fn current(&self) -> Option<&CursorEntry> {
        self.entries.get(self.index)
    }

    /// Total number of rows in the snapshot, independent of position.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Iterator for Cursor {
    type Item = CursorEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.current().cloned();
        self.advance();
        entry
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
