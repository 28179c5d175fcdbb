//! Navigation sink for URL state changes
//!
//! The adapter never mutates URL state itself; it hands the complete new
//! parameter map to a `Navigator`, and the new state is observed on the next
//! read of `current()`.

use super::params::QueryParams;
use serde::{Deserialize, Serialize};

/// How a navigation affects history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMode {
    /// Add a new history entry
    Push,
    /// Overwrite the current history entry
    Replace,
}

/// Source of the current parameters and sink for navigation requests
pub trait Navigator {
    /// Parameters of the current location
    fn current(&self) -> QueryParams;

    /// Move to a location with exactly `params`
    fn navigate(&mut self, params: QueryParams, mode: HistoryMode);
}

impl<N: Navigator + ?Sized> Navigator for &mut N {
    fn current(&self) -> QueryParams {
        (**self).current()
    }

    fn navigate(&mut self, params: QueryParams, mode: HistoryMode) {
        (**self).navigate(params, mode)
    }
}

/// In-process history stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryHistory {
    entries: Vec<QueryParams>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::starting_at(QueryParams::new())
    }

    pub fn starting_at(params: QueryParams) -> Self {
        Self {
            entries: vec![params],
        }
    }

    /// Start from a raw query string such as `status=paid&page=2`
    pub fn from_query(query: &str) -> Self {
        Self::starting_at(QueryParams::parse(query))
    }

    /// All entries, oldest first; never empty
    pub fn entries(&self) -> &[QueryParams] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for MemoryHistory {
    fn current(&self) -> QueryParams {
        self.entries.last().cloned().unwrap_or_default()
    }

    fn navigate(&mut self, params: QueryParams, mode: HistoryMode) {
        match mode {
            HistoryMode::Push => self.entries.push(params),
            HistoryMode::Replace => match self.entries.last_mut() {
                Some(last) => *last = params,
                None => self.entries.push(params),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_keeps_history_length() {
        let mut history = MemoryHistory::from_query("page=2");
        history.navigate(QueryParams::parse("page=3"), HistoryMode::Replace);
        assert_eq!(history.len(), 1);
        assert_eq!(history.current().get("page"), Some("3"));
    }

    #[test]
    fn test_push_appends() {
        let mut history = MemoryHistory::new();
        history.navigate(QueryParams::parse("status=paid"), HistoryMode::Push);
        assert_eq!(history.len(), 2);
        assert!(history.entries()[0].is_empty());
    }
}
