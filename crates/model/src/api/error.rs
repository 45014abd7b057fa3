use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("Response body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
