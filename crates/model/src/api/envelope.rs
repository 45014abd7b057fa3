use crate::{
    api::error::EnvelopeError,
    records::{batch::Batch, row::RowData},
};
use serde::{Deserialize, Serialize};

/// Status block the open API embeds alongside the data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResult {
    pub code: String,
    pub message: String,
}

/// Parsed API response envelope: a JSON object keyed by the service name,
/// holding row objects plus bookkeeping fields.
///
/// A missing service key, or a missing/empty `row` array, is not an error;
/// the envelope simply carries zero rows and the run becomes a no-op.
#[derive(Debug, Clone)]
pub struct Envelope {
    pub service: String,
    pub list_total_count: Option<u64>,
    pub result: Option<ApiResult>,
    rows: Vec<RowData>,
}

impl Envelope {
    /// Parses the raw response body. Only syntactically invalid JSON fails.
    pub fn parse(body: &str, service: &str) -> Result<Envelope, EnvelopeError> {
        let root: serde_json::Value = serde_json::from_str(body)?;

        let Some(payload) = root.get(service) else {
            return Ok(Envelope {
                service: service.to_string(),
                list_total_count: None,
                result: None,
                rows: Vec::new(),
            });
        };

        let list_total_count = payload.get("list_total_count").and_then(|v| v.as_u64());
        let result = payload.get("RESULT").map(|r| ApiResult {
            code: text_field(r, "CODE"),
            message: text_field(r, "MESSAGE"),
        });

        let rows = match payload.get("row").and_then(|v| v.as_array()) {
            Some(items) => items
                .iter()
                .filter_map(|item| item.as_object())
                .map(RowData::from_object)
                .collect(),
            None => Vec::new(),
        };

        Ok(Envelope {
            service: service.to_string(),
            list_total_count,
            result,
            rows,
        })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn into_batch(self) -> Batch {
        Batch::from_rows(self.rows)
    }
}

fn text_field(value: &serde_json::Value, key: &str) -> String {
    value
        .get(key)
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::value::Value;

    const SERVICE: &str = "tbLnOpendataRtmsV";

    #[test]
    fn test_parse_rows() {
        let body = r#"{"tbLnOpendataRtmsV": {"row": [{"a":1},{"a":2}]}}"#;
        let envelope = Envelope::parse(body, SERVICE).unwrap();
        assert_eq!(envelope.row_count(), 2);

        let batch = envelope.into_batch();
        assert_eq!(batch.columns, vec!["a"]);
        assert_eq!(batch.rows[0].get("a"), Some(&Value::Int(1)));
        assert_eq!(batch.rows[1].get("a"), Some(&Value::Int(2)));
    }

    #[test]
    fn test_missing_service_key_is_empty_not_error() {
        let envelope = Envelope::parse(r#"{"otherService": {"row": [{"a":1}]}}"#, SERVICE).unwrap();
        assert!(envelope.is_empty());
    }

    #[test]
    fn test_missing_row_field_is_empty_not_error() {
        let envelope = Envelope::parse(r#"{"tbLnOpendataRtmsV": {}}"#, SERVICE).unwrap();
        assert!(envelope.is_empty());
    }

    #[test]
    fn test_bookkeeping_fields() {
        let body = r#"{"tbLnOpendataRtmsV": {
            "list_total_count": 12345,
            "RESULT": {"CODE": "INFO-000", "MESSAGE": "정상 처리되었습니다"},
            "row": [{"a":1}]
        }}"#;
        let envelope = Envelope::parse(body, SERVICE).unwrap();
        assert_eq!(envelope.list_total_count, Some(12345));
        assert_eq!(envelope.result.as_ref().unwrap().code, "INFO-000");
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Envelope::parse("not json", SERVICE).is_err());
    }
}
