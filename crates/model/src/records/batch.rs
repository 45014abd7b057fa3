use crate::records::row::RowData;
use serde::{Deserialize, Serialize};

/// One fetched window of rows, ready for tabular output.
///
/// `columns` is the union of field names across all rows, in order of first
/// appearance. Fields may vary row to row within and across runs; rows
/// missing a column render it as null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Batch {
    pub columns: Vec<String>,
    pub rows: Vec<RowData>,
}

impl Batch {
    pub fn from_rows(rows: Vec<RowData>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for row in &rows {
            for field in &row.field_values {
                if !columns.iter().any(|c| c == &field.name) {
                    columns.push(field.name.clone());
                }
            }
        }
        Batch { columns, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::row::RowData;

    fn row(json: &str) -> RowData {
        let value: serde_json::Value = serde_json::from_str(json).unwrap();
        RowData::from_object(value.as_object().unwrap())
    }

    #[test]
    fn test_columns_are_first_appearance_union() {
        let batch = Batch::from_rows(vec![
            row(r#"{"a": 1, "b": 2}"#),
            row(r#"{"b": 3, "c": 4}"#),
        ]);
        assert_eq!(batch.columns, vec!["a", "b", "c"]);
        assert_eq!(batch.len(), 2);
    }

    #[test]
    fn test_empty_batch() {
        let batch = Batch::from_rows(Vec::new());
        assert!(batch.is_empty());
        assert!(batch.columns.is_empty());
    }
}
