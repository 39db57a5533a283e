//! Field values exposed by records.
//!
//! Rows coming back from a table store are loosely typed, so a record hands
//! the table a [`Value`] per field. The table needs three things from it:
//! a display string (search and default cell rendering), an ordering (column
//! sorting) and an equality (filters).

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A dynamically typed field value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Missing or null field.
    #[default]
    Null,
    /// Boolean field.
    Bool(bool),
    /// Integer field.
    Int(i64),
    /// Floating point field.
    Float(f64),
    /// Text field.
    Text(String),
}

impl Value {
    /// Returns true for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    fn as_number(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Strict equality used by filters.
    ///
    /// Values of different kinds are never equal, except that integers and
    /// floats are both numbers and compare numerically. `Null` equals `Null`.
    pub fn strict_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (a, b) => match (a.as_number(), b.as_number()) {
                (Some(x), Some(y)) => x == y,
                _ => false,
            },
        }
    }

    /// Ordering used by column sorting.
    ///
    /// Numbers compare numerically, text lexicographically and `false < true`.
    /// Values of different kinds order by kind: `Null < Bool < number < Text`.
    /// The result is a total order, NaN included.
    pub fn compare(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Int(a), Value::Float(b)) => (*a as f64).total_cmp(b),
            (Value::Float(a), Value::Int(b)) => a.total_cmp(&(*b as f64)),
            (Value::Float(a), Value::Float(b)) => a.total_cmp(b),
            (a, b) => a.rank().cmp(&b.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Int(_) | Value::Float(_) => 2,
            Value::Text(_) => 3,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.strict_eq(other)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl From<&serde_json::Value> for Value {
    fn from(v: &serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(Value::Int)
                .or_else(|| n.as_f64().map(Value::Float))
                .unwrap_or(Value::Null),
            serde_json::Value::String(s) => Value::Text(s.clone()),
            // Nested structures are shown the way they serialize.
            other => Value::Text(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_coercion() {
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Int(-7).to_string(), "-7");
        assert_eq!(Value::Float(2.0).to_string(), "2");
        assert_eq!(Value::Float(2.5).to_string(), "2.5");
        assert_eq!(Value::from("Remote").to_string(), "Remote");
    }

    #[test]
    fn test_strict_eq_does_not_coerce_text() {
        assert!(Value::Int(1).strict_eq(&Value::Float(1.0)));
        assert!(!Value::Int(1).strict_eq(&Value::from("1")));
        assert!(!Value::Bool(true).strict_eq(&Value::from("true")));
        assert!(Value::Null.strict_eq(&Value::Null));
        assert!(!Value::Null.strict_eq(&Value::from("")));
    }

    #[test]
    fn test_compare() {
        assert_eq!(Value::Int(2).compare(&Value::Int(10)), Ordering::Less);
        assert_eq!(Value::Int(2).compare(&Value::Float(1.5)), Ordering::Greater);
        assert_eq!(Value::from("b").compare(&Value::from("a")), Ordering::Greater);
        assert_eq!(Value::Null.compare(&Value::Int(-100)), Ordering::Less);
        assert_eq!(Value::Bool(false).compare(&Value::Bool(true)), Ordering::Less);
        // Different kinds order by kind, not by display.
        assert_eq!(Value::Int(10).compare(&Value::from("9")), Ordering::Less);
        assert_eq!(Value::Int(1).compare(&Value::from("10")), Ordering::Less);
        assert_eq!(Value::from("").compare(&Value::Bool(true)), Ordering::Greater);
        assert_eq!(Value::Bool(true).compare(&Value::Float(-1.0)), Ordering::Less);
    }

    #[test]
    fn test_compare_is_total_with_nan() {
        let nan = Value::Float(f64::NAN);
        assert_eq!(nan.compare(&nan), Ordering::Equal);
        assert_eq!(Value::Float(1.0).compare(&nan), Ordering::Less);
        assert_eq!(nan.compare(&Value::Int(i64::MAX)), Ordering::Greater);

        let mut values = vec![
            Value::from("b"),
            Value::Float(f64::NAN),
            Value::Int(3),
            Value::Null,
            Value::Float(2.5),
            Value::Bool(true),
            Value::from("a"),
            Value::Int(-1),
        ];
        values.sort_by(Value::compare);
        let shown: Vec<String> = values.iter().map(ToString::to_string).collect();
        assert_eq!(shown, ["", "true", "-1", "2.5", "3", "NaN", "a", "b"]);
    }

    #[test]
    fn test_from_json() {
        let v: serde_json::Value = serde_json::json!({"n": 3, "f": 0.5, "s": "x", "a": [1]});
        assert_eq!(Value::from(&v["n"]), Value::Int(3));
        assert_eq!(Value::from(&v["f"]), Value::Float(0.5));
        assert_eq!(Value::from(&v["s"]), Value::from("x"));
        assert_eq!(Value::from(&v["a"]), Value::from("[1]"));
        assert!(Value::from(&v["missing"]).is_null());
    }
}
