//! Operation chain
//!
//! Visual feedback: the chain renders as the history trail above the display

use serde::Serialize;
use std::collections::VecDeque;

use crate::core::{Operand, Operator};

/// One applied operator together with the operand it was pressed after
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainEntry {
    /// Operand text as it was when the operator was pressed
    pub operand: Operand,
    /// The operator pressed
    pub operator: Operator,
}

impl ChainEntry {
    /// Creates a new chain entry
    #[must_use]
    pub fn new(operand: Operand, operator: Operator) -> Self {
        Self { operand, operator }
    }

    /// Returns `"<operand> <symbol>"`
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} {}", self.operand, self.operator.symbol())
    }
}

/// Ordered (operand, operator) pairs awaiting left-to-right reduction
///
/// Oldest first. The only edits are appending, dropping the newest entry
/// and clearing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Chain {
    entries: VecDeque<ChainEntry>,
}

impl Chain {
    /// Creates an empty chain
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry
    pub fn push(&mut self, entry: ChainEntry) {
        self.entries.push_back(entry);
    }

    /// Records an operand and the operator pressed after it
    pub fn record(&mut self, operand: Operand, operator: Operator) {
        self.push(ChainEntry::new(operand, operator));
    }

    /// Removes and returns the newest entry
    pub fn pop_last(&mut self) -> Option<ChainEntry> {
        self.entries.pop_back()
    }

    /// Returns the number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the chain is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clears all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the newest entry
    #[must_use]
    pub fn last(&self) -> Option<&ChainEntry> {
        self.entries.back()
    }

    /// Returns the oldest entry
    #[must_use]
    pub fn first(&self) -> Option<&ChainEntry> {
        self.entries.front()
    }

    /// Returns the entry at the given index (0 = oldest)
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ChainEntry> {
        self.entries.get(index)
    }

    /// Returns an iterator over the entries (oldest first)
    pub fn iter(&self) -> impl Iterator<Item = &ChainEntry> {
        self.entries.iter()
    }

    /// Renders the history trail, or `""` when empty
    #[must_use]
    pub fn display(&self) -> String {
        self.entries
            .iter()
            .map(ChainEntry::display)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Serializes the chain to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
