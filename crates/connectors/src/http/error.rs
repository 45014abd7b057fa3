use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    /// Transport-level failure (DNS, connect, timeout, body read).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with something other than 200.
    #[error("Unexpected status {status} from {endpoint}")]
    UnexpectedStatus { status: u16, endpoint: String },
}
