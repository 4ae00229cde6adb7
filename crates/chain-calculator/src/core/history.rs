//! Calculation history ledger
//!
//! Bounded, newest-first list of completed calculations. Lives only as long
//! as the process; nothing is written anywhere.

use crate::core::{DisplayText, Operator};
use serde::Serialize;
use std::collections::VecDeque;

/// A single completed calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    /// The rendered line, `"<left> <op> <right> = <result>"`
    pub text: String,
    /// The result on its own, for recall
    pub result: DisplayText,
}

impl HistoryEntry {
    /// Creates a new history entry
    #[must_use]
    pub fn new(left: &str, operator: Operator, right: &str, result: DisplayText) -> Self {
        Self {
            text: format!("{left} {operator} {right} = {result}"),
            result,
        }
    }

    /// Returns the formatted display string
    #[must_use]
    pub fn display(&self) -> &str {
        &self.text
    }
}

/// Calculation history
///
/// Insertion happens at the front; once `capacity` is reached the oldest
/// entry falls off the back.
#[derive(Debug, Clone)]
pub struct Ledger {
    /// Newest entry first
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Default number of entries kept
    pub const DEFAULT_CAPACITY: usize = 5;

    /// Creates an empty ledger holding up to five entries
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates a ledger with a custom bound
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(Self::DEFAULT_CAPACITY)),
            capacity,
        }
    }

    /// Records a completed calculation as the newest entry
    pub fn record(&mut self, left: &str, operator: Operator, right: &str, result: DisplayText) {
        if self.capacity == 0 {
            return;
        }
        self.entries
            .push_front(HistoryEntry::new(left, operator, right, result));
        self.entries.truncate(self.capacity);
    }

    /// Rendered entries, newest first
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.text.clone()).collect()
    }

    /// Iterates entries, newest first
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Entry at `index` (0 = newest)
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Returns the number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries kept
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
