//! Declarative table configuration.
//!
//! Everything about a table that can be written down as data (title,
//! search keys, filters, paging, theme, empty-state text) lives in
//! [`TableConfig`] and can be loaded from JSON. Columns, actions and
//! handlers are code and are attached to the model directly.

use crate::error::{Error, Result};
use crate::filter::FilterSpec;
use crate::paginator::PaginationMode;
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Page size used when the configuration does not give one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Paging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Rows per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Client- or server-side paging.
    #[serde(default)]
    pub mode: PaginationMode,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            mode: PaginationMode::Client,
        }
    }
}

/// Table settings that can be expressed as data.
///
/// ```rust
/// use bubbletea_datatable::config::TableConfig;
/// use bubbletea_datatable::theme::Theme;
///
/// let cfg = TableConfig::from_json(r#"{
///     "title": "Applications",
///     "search_keys": ["candidate"],
///     "theme": "primary",
///     "pagination": { "page_size": 25 }
/// }"#).unwrap();
/// assert_eq!(cfg.theme, Theme::Primary);
/// assert_eq!(cfg.pagination.unwrap().page_size, 25);
/// assert!(cfg.searchable);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Heading shown above the table.
    #[serde(default)]
    pub title: Option<String>,
    /// Whether the search box is offered.
    #[serde(default = "default_true")]
    pub searchable: bool,
    /// Record fields the search box matches against.
    #[serde(default)]
    pub search_keys: Vec<String>,
    /// Placeholder of the search box.
    #[serde(default = "default_search_placeholder")]
    pub search_placeholder: String,
    /// Whether filters are offered.
    #[serde(default = "default_true")]
    pub filterable: bool,
    /// Filter declarations.
    #[serde(default)]
    pub filters: Vec<FilterSpec>,
    /// Whether column headers sort.
    #[serde(default = "default_true")]
    pub sortable: bool,
    /// Paging; `None` shows every row.
    #[serde(default)]
    pub pagination: Option<PaginationConfig>,
    /// Color theme.
    #[serde(default)]
    pub theme: Theme,
    /// Text of the empty state.
    #[serde(default = "default_empty_message")]
    pub empty_message: String,
    /// Icon of the empty state.
    #[serde(default = "default_empty_icon")]
    pub empty_icon: String,
    /// Label of the add action, shown in the empty state when an add
    /// handler is attached.
    #[serde(default)]
    pub add_label: Option<String>,
    /// Whether the key help line is drawn.
    #[serde(default = "default_true")]
    pub show_help: bool,
}

fn default_true() -> bool {
    true
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_search_placeholder() -> String {
    "Search...".to_string()
}

fn default_empty_message() -> String {
    "No data available".to_string()
}

fn default_empty_icon() -> String {
    "📭".to_string()
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            title: None,
            searchable: true,
            search_keys: Vec::new(),
            search_placeholder: default_search_placeholder(),
            filterable: true,
            filters: Vec::new(),
            sortable: true,
            pagination: None,
            theme: Theme::Default,
            empty_message: default_empty_message(),
            empty_icon: default_empty_icon(),
            add_label: None,
            show_help: true,
        }
    }
}

impl TableConfig {
    /// Parses a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            tracing::warn!(error = %e, "malformed table configuration");
            Error::from(e)
        })
    }

    /// Checks the configuration against the table's column keys.
    ///
    /// Rejects a zero page size, repeated column or filter keys, and search
    /// or filter keys that name no column.
    pub fn validate(&self, column_keys: &[&str]) -> Result<()> {
        let result = self.check(column_keys);
        if let Err(e) = &result {
            tracing::warn!(error = %e, "invalid table configuration");
        }
        result
    }

    fn check(&self, column_keys: &[&str]) -> Result<()> {
        if let Some(p) = &self.pagination {
            if p.page_size == 0 {
                return Err(Error::InvalidPageSize);
            }
        }

        let mut columns = HashSet::new();
        for key in column_keys {
            if !columns.insert(*key) {
                return Err(Error::DuplicateColumn((*key).to_string()));
            }
        }

        for key in &self.search_keys {
            if !columns.contains(key.as_str()) {
                return Err(Error::UnknownColumn(key.clone()));
            }
        }

        let mut filters = HashSet::new();
        for spec in &self.filters {
            if !columns.contains(spec.key.as_str()) {
                return Err(Error::UnknownColumn(spec.key.clone()));
            }
            if !filters.insert(spec.key.as_str()) {
                return Err(Error::DuplicateFilter(spec.key.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterSelection;
    use crate::value::Value;

    #[test]
    fn test_defaults_from_empty_document() {
        let cfg = TableConfig::from_json("{}").expect("empty object is valid");
        assert_eq!(cfg, TableConfig::default());
        assert!(cfg.pagination.is_none());
    }

    #[test]
    fn test_full_document() {
        let cfg = TableConfig::from_json(
            r#"{
                "title": "Jobs",
                "search_keys": ["title", "company"],
                "filters": [
                    {"key": "status", "label": "Status", "options": [
                        {"value": "open", "label": "Open"},
                        {"value": "closed", "label": "Closed"}
                    ]}
                ],
                "sortable": false,
                "pagination": {"page_size": 20, "mode": {"server": {"total_count": 240}}},
                "theme": "danger",
                "add_label": "Post a job",
                "show_help": false
            }"#,
        )
        .expect("valid");
        assert_eq!(cfg.title.as_deref(), Some("Jobs"));
        assert!(!cfg.sortable);
        assert_eq!(cfg.theme, Theme::Danger);
        assert_eq!(
            cfg.pagination,
            Some(PaginationConfig {
                page_size: 20,
                mode: PaginationMode::Server { total_count: 240 },
            })
        );
        assert_eq!(
            cfg.filters[0].options[1].value,
            FilterSelection::Only(Value::from("closed"))
        );
        assert!(cfg.validate(&["title", "company", "status"]).is_ok());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(TableConfig::from_json("{"), Err(Error::Config(_))));
        assert!(matches!(
            TableConfig::from_json(r#"{"theme": "neon"}"#),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_validation_errors() {
        let mut cfg = TableConfig {
            pagination: Some(PaginationConfig {
                page_size: 0,
                mode: PaginationMode::Client,
            }),
            ..TableConfig::default()
        };
        assert!(matches!(cfg.validate(&["a"]), Err(Error::InvalidPageSize)));

        cfg.pagination = None;
        assert!(matches!(
            cfg.validate(&["a", "a"]),
            Err(Error::DuplicateColumn(k)) if k == "a"
        ));

        cfg.search_keys = vec!["missing".into()];
        assert!(matches!(
            cfg.validate(&["a"]),
            Err(Error::UnknownColumn(k)) if k == "missing"
        ));

        cfg.search_keys.clear();
        cfg.filters = vec![FilterSpec::new("a", "A"), FilterSpec::new("a", "Again")];
        assert!(matches!(
            cfg.validate(&["a"]),
            Err(Error::DuplicateFilter(k)) if k == "a"
        ));
    }
}
