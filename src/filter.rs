//! Enumerated column filters.
//!
//! Each [`FilterSpec`] offers a fixed set of options for one record field.
//! The reserved option value [`ALL`] means "no constraint"; every other
//! option keeps only the records whose field is strictly equal to it.
//! Active filters combine with AND.

use crate::record::Record;
use crate::value::Value;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// Reserved option value meaning "no constraint for this key".
pub const ALL: &str = "all";

/// What a filter currently lets through.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FilterSelection {
    /// No constraint.
    #[default]
    All,
    /// Only records whose field equals this value.
    Only(Value),
}

impl FilterSelection {
    /// Builds a selection from an option value; `"all"` becomes [`FilterSelection::All`].
    pub fn from_value(value: Value) -> Self {
        match &value {
            Value::Text(s) if s == ALL => FilterSelection::All,
            _ => FilterSelection::Only(value),
        }
    }

    /// Returns true for [`FilterSelection::All`].
    pub fn is_all(&self) -> bool {
        matches!(self, FilterSelection::All)
    }

    /// Reports whether a field value passes this selection.
    pub fn accepts(&self, field: &Value) -> bool {
        match self {
            FilterSelection::All => true,
            FilterSelection::Only(v) => v.strict_eq(field),
        }
    }
}

impl Serialize for FilterSelection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FilterSelection::All => serializer.serialize_str(ALL),
            FilterSelection::Only(v) => v.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for FilterSelection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(FilterSelection::from_value)
    }
}

/// One choice in a filter dropdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOption {
    /// Value compared against the record field.
    pub value: FilterSelection,
    /// Text shown to the user.
    pub label: String,
}

impl FilterOption {
    /// Creates an option constraining the field to `value`.
    pub fn new(value: impl Into<Value>, label: impl Into<String>) -> Self {
        Self {
            value: FilterSelection::from_value(value.into()),
            label: label.into(),
        }
    }

    /// The "no constraint" option.
    pub fn all(label: impl Into<String>) -> Self {
        Self {
            value: FilterSelection::All,
            label: label.into(),
        }
    }
}

/// A named, enumerated constraint on one record field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Record field the filter applies to.
    pub key: String,
    /// Label shown next to the filter.
    pub label: String,
    /// Declared options, in display order.
    pub options: Vec<FilterOption>,
}

impl FilterSpec {
    /// Creates a filter with no options yet.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            options: Vec::new(),
        }
    }

    /// Adds an option (builder pattern).
    pub fn with_option(mut self, value: impl Into<Value>, label: impl Into<String>) -> Self {
        self.options.push(FilterOption::new(value, label));
        self
    }

    /// Options as offered to the user: the `All` option first, followed by
    /// the declared options. A declared `"all"` option takes the first slot
    /// with its own label; otherwise one labelled "All" is supplied.
    pub fn choices(&self) -> Vec<FilterOption> {
        let mut out = Vec::with_capacity(self.options.len() + 1);
        match self.options.iter().find(|o| o.value.is_all()) {
            Some(all) => out.push(all.clone()),
            None => out.push(FilterOption::all("All")),
        }
        out.extend(self.options.iter().filter(|o| !o.value.is_all()).cloned());
        out
    }

    /// Label of the option matching `selection`, if any.
    pub fn label_for(&self, selection: &FilterSelection) -> Option<String> {
        self.choices()
            .into_iter()
            .find(|o| &o.value == selection)
            .map(|o| o.label)
    }

    /// The selection following `current` in [`choices`](Self::choices), wrapping around.
    pub fn next_selection(&self, current: &FilterSelection) -> FilterSelection {
        let choices = self.choices();
        let idx = choices.iter().position(|o| &o.value == current);
        match idx {
            Some(i) => choices[(i + 1) % choices.len()].value.clone(),
            None => FilterSelection::All,
        }
    }
}

/// The filter selections currently in effect, keyed by record field.
///
/// Keys never set read as [`FilterSelection::All`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActiveFilters {
    selections: BTreeMap<String, FilterSelection>,
}

impl ActiveFilters {
    /// No filters active.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the selection for `key`. Selecting `All` removes the entry.
    pub fn set(&mut self, key: impl Into<String>, selection: FilterSelection) {
        let key = key.into();
        if selection.is_all() {
            self.selections.remove(&key);
        } else {
            self.selections.insert(key, selection);
        }
    }

    /// The selection for `key`.
    pub fn get(&self, key: &str) -> &FilterSelection {
        static ALL_SELECTION: FilterSelection = FilterSelection::All;
        self.selections.get(key).unwrap_or(&ALL_SELECTION)
    }

    /// Returns true if any filter differs from `All`.
    pub fn is_active(&self) -> bool {
        !self.selections.is_empty()
    }

    /// Resets every filter to `All`.
    pub fn clear(&mut self) {
        self.selections.clear();
    }

    /// Iterates over the constraining selections.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterSelection)> {
        self.selections.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Reports whether a record passes every active filter.
    pub fn accepts<R: Record>(&self, record: &R) -> bool {
        self.selections
            .iter()
            .all(|(key, selection)| selection.accepts(&record.field(key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn job(status: &str, kind: &str) -> serde_json::Value {
        json!({"status": status, "type": kind})
    }

    #[test]
    fn test_filters_compose_with_and() {
        let mut filters = ActiveFilters::new();
        filters.set("status", FilterSelection::Only("OPEN".into()));
        filters.set("type", FilterSelection::Only("FULL-TIME".into()));

        assert!(filters.accepts(&job("OPEN", "FULL-TIME")));
        assert!(!filters.accepts(&job("OPEN", "PART-TIME")));
        assert!(!filters.accepts(&job("CLOSED", "FULL-TIME")));

        // Relaxing one filter leaves the other in force.
        filters.set("type", FilterSelection::All);
        assert!(filters.accepts(&job("OPEN", "PART-TIME")));
        assert!(!filters.accepts(&job("CLOSED", "PART-TIME")));
    }

    #[test]
    fn test_all_sentinel() {
        assert!(FilterSelection::from_value("all".into()).is_all());
        assert!(!FilterSelection::from_value("ALL".into()).is_all());
        let mut filters = ActiveFilters::new();
        filters.set("status", FilterSelection::from_value("all".into()));
        assert!(!filters.is_active());
        assert!(filters.get("status").is_all());
    }

    #[test]
    fn test_strict_equality_across_types() {
        let mut filters = ActiveFilters::new();
        filters.set("level", FilterSelection::Only(Value::from("2")));
        assert!(!filters.accepts(&json!({"level": 2})));
        filters.set("level", FilterSelection::Only(Value::Int(2)));
        assert!(filters.accepts(&json!({"level": 2})));
    }

    #[test]
    fn test_choices_and_cycling() {
        let spec = FilterSpec::new("status", "Status")
            .with_option("open", "Open")
            .with_option("closed", "Closed");
        let labels: Vec<String> = spec.choices().into_iter().map(|o| o.label).collect();
        assert_eq!(labels, vec!["All", "Open", "Closed"]);

        let mut sel = FilterSelection::All;
        sel = spec.next_selection(&sel);
        assert_eq!(sel, FilterSelection::Only("open".into()));
        sel = spec.next_selection(&sel);
        assert_eq!(sel, FilterSelection::Only("closed".into()));
        sel = spec.next_selection(&sel);
        assert!(sel.is_all());
        assert_eq!(spec.label_for(&FilterSelection::Only("closed".into())), Some("Closed".into()));
    }

    #[test]
    fn test_declared_all_option_keeps_its_label() {
        let spec = FilterSpec::new("type", "Type")
            .with_option("all", "Any type")
            .with_option("remote", "Remote");
        let labels: Vec<String> = spec.choices().into_iter().map(|o| o.label).collect();
        assert_eq!(labels, vec!["Any type", "Remote"]);
    }

    #[test]
    fn test_deserialize_spec() {
        let spec: FilterSpec = serde_json::from_value(json!({
            "key": "status",
            "label": "Status",
            "options": [
                {"value": "all", "label": "All statuses"},
                {"value": "open", "label": "Open"},
                {"value": 3, "label": "Three"}
            ]
        }))
        .expect("valid spec");
        assert!(spec.options[0].value.is_all());
        assert_eq!(spec.options[2].value, FilterSelection::Only(Value::Int(3)));
    }
}
