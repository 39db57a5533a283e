//! The record abstraction the data table is generic over.

use crate::value::Value;

/// A row of data the table can display.
///
/// The table reads fields by key for search, filtering, sorting and default
/// cell rendering. Keys that don't name a field return [`Value::Null`].
///
/// # Examples
///
/// ```rust
/// use bubbletea_datatable::record::Record;
/// use bubbletea_datatable::value::Value;
///
/// #[derive(Clone)]
/// struct Job {
///     title: String,
///     company: String,
///     salary: i64,
/// }
///
/// impl Record for Job {
///     fn field(&self, key: &str) -> Value {
///         match key {
///             "title" => self.title.as_str().into(),
///             "company" => self.company.as_str().into(),
///             "salary" => self.salary.into(),
///             _ => Value::Null,
///         }
///     }
/// }
///
/// let job = Job { title: "Backend Engineer".into(), company: "Acme".into(), salary: 90_000 };
/// assert_eq!(job.field("salary"), Value::Int(90_000));
/// assert!(job.field("nope").is_null());
/// ```
pub trait Record {
    /// Returns the value stored under `key`.
    fn field(&self, key: &str) -> Value;
}

/// JSON objects are records; non-objects have no fields.
impl Record for serde_json::Value {
    fn field(&self, key: &str) -> Value {
        self.get(key).map_or(Value::Null, Value::from)
    }
}

impl Record for serde_json::Map<String, serde_json::Value> {
    fn field(&self, key: &str) -> Value {
        self.get(key).map_or(Value::Null, Value::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_records() {
        let row = json!({"id": 7, "status": "open", "remote": true});
        assert_eq!(row.field("id"), Value::Int(7));
        assert_eq!(row.field("status"), Value::from("open"));
        assert_eq!(row.field("remote"), Value::Bool(true));
        assert!(row.field("missing").is_null());
        assert!(json!([1, 2]).field("0").is_null());

        let map = row.as_object().cloned().unwrap_or_default();
        assert_eq!(map.field("status"), Value::from("open"));
    }
}
