use crate::core::value::Value;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldValue {
    pub name: String,
    pub value: Value,
}

/// One record from the API, fields in the order the upstream sent them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowData {
    pub field_values: Vec<FieldValue>,
}

impl RowData {
    pub fn new(field_values: Vec<FieldValue>) -> Self {
        RowData { field_values }
    }

    /// Builds a row from one JSON object. Whatever fields the upstream
    /// returns become columns for that batch; no schema is enforced.
    pub fn from_object(object: &serde_json::Map<String, serde_json::Value>) -> Self {
        let field_values = object
            .iter()
            .map(|(name, value)| FieldValue {
                name: name.clone(),
                value: Value::from_json(value),
            })
            .collect();
        RowData { field_values }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.field_values
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(field))
            .map(|f| &f.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_object_preserves_field_order() {
        let object = serde_json::from_str::<serde_json::Value>(
            r#"{"RCPT_YR": "2025", "CGG_NM": "강남구", "THING_AMT": 150000}"#,
        )
        .unwrap();
        let row = RowData::from_object(object.as_object().unwrap());

        let names: Vec<&str> = row.field_values.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["RCPT_YR", "CGG_NM", "THING_AMT"]);
        assert_eq!(row.get("thing_amt"), Some(&Value::Int(150000)));
        assert_eq!(row.get("missing"), None);
    }
}
