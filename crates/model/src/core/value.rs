use serde::{Deserialize, Serialize};
use std::fmt;

/// Scalar cell value as it arrives from the open-API JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Value {
    Int(i64),
    Uint(u64),
    Float(f64),
    String(String),
    Boolean(bool),
    Null,
}

impl Value {
    /// Converts a JSON value into a cell value. Row shapes are not validated;
    /// nested arrays/objects are kept verbatim as compact JSON text.
    pub fn from_json(value: &serde_json::Value) -> Value {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(*b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::Uint(u)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::String(s.clone()),
            other => Value::String(other.to_string()),
        }
    }

    /// Text written into a CSV cell. `Null` renders as an empty field;
    /// quoting is left to the CSV writer.
    pub fn as_csv_field(&self) -> String {
        match self {
            Value::Int(v) => v.to_string(),
            Value::Uint(v) => v.to_string(),
            Value::Float(v) => v.to_string(),
            Value::String(v) => v.clone(),
            Value::Boolean(v) => v.to_string(),
            Value::Null => String::new(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Uint(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "{v}"),
            Value::Boolean(v) => write!(f, "{v}"),
            Value::Null => write!(f, "NULL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_scalars() {
        assert_eq!(Value::from_json(&json!(42)), Value::Int(42));
        assert_eq!(Value::from_json(&json!(18446744073709551615u64)), Value::Uint(u64::MAX));
        assert_eq!(Value::from_json(&json!(1.5)), Value::Float(1.5));
        assert_eq!(Value::from_json(&json!("강남구")), Value::String("강남구".into()));
        assert_eq!(Value::from_json(&json!(true)), Value::Boolean(true));
        assert_eq!(Value::from_json(&json!(null)), Value::Null);
    }

    #[test]
    fn test_from_json_keeps_nested_values_as_text() {
        let value = Value::from_json(&json!({"a": 1}));
        assert_eq!(value, Value::String("{\"a\":1}".into()));
    }

    #[test]
    fn test_null_renders_as_empty_csv_field() {
        assert_eq!(Value::Null.as_csv_field(), "");
        assert_eq!(Value::Int(7).as_csv_field(), "7");
    }
}
