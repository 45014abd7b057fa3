use connectors::{file::csv::error::FileError, http::error::SourceError};
use model::api::error::EnvelopeError;
use thiserror::Error;

/// Top-level errors for one pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The fetch task failed. The failure notifier has already fired;
    /// `message` carries the alert it logged.
    #[error("{message}")]
    Fetch {
        message: String,
        #[source]
        source: SourceError,
    },

    #[error("Failed to parse the API response: {0}")]
    Parse(#[from] EnvelopeError),

    #[error("Failed to append to the CSV sink: {0}")]
    Sink(#[from] FileError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}
