//! Single-column sort state.
//!
//! Clicking (or pressing the sort key on) a column header walks a
//! three-step cycle: ascending, descending, then back to input order.

use crate::record::Record;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Direction of the active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first.
    Asc,
    /// Largest first.
    Desc,
}

impl SortDirection {
    /// Arrow shown next to the sorted column header.
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => f.write_str("asc"),
            SortDirection::Desc => f.write_str("desc"),
        }
    }
}

/// The active sort: which column and which way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    /// Record field the rows are ordered by.
    pub key: String,
    /// Sort direction.
    pub direction: SortDirection,
}

impl SortState {
    /// Ascending sort on `key`.
    pub fn asc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Asc,
        }
    }

    /// Descending sort on `key`.
    pub fn desc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Desc,
        }
    }

    /// Compares two records by this sort's key and direction.
    pub fn compare<R: Record>(&self, a: &R, b: &R) -> Ordering {
        let ord = a.field(&self.key).compare(&b.field(&self.key));
        match self.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }
}

/// Computes the sort state after the header of `key` is activated.
///
/// - unsorted, or sorted by another column: ascending on `key`
/// - ascending on `key`: descending on `key`
/// - descending on `key`: unsorted
pub fn next_sort(current: Option<&SortState>, key: &str) -> Option<SortState> {
    match current {
        Some(s) if s.key == key && s.direction == SortDirection::Asc => Some(SortState::desc(key)),
        Some(s) if s.key == key => None,
        _ => Some(SortState::asc(key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tri_state_cycle() {
        let first = next_sort(None, "title");
        assert_eq!(first, Some(SortState::asc("title")));
        let second = next_sort(first.as_ref(), "title");
        assert_eq!(second, Some(SortState::desc("title")));
        let third = next_sort(second.as_ref(), "title");
        assert_eq!(third, None);
    }

    #[test]
    fn test_other_column_restarts_ascending() {
        let desc = SortState::desc("title");
        assert_eq!(next_sort(Some(&desc), "company"), Some(SortState::asc("company")));
    }

    #[test]
    fn test_compare_direction() {
        let a = json!({"salary": 50});
        let b = json!({"salary": 70});
        assert_eq!(SortState::asc("salary").compare(&a, &b), Ordering::Less);
        assert_eq!(SortState::desc("salary").compare(&a, &b), Ordering::Greater);
    }
}
