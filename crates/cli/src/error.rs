use connectors::http::error::SourceError;
use pipeline_config::error::ConfigError;
use pipeline_runtime::error::PipelineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Pipeline run failed: {0}")]
    Pipeline(#[from] PipelineError),

    #[error("Connection test failed: {0}")]
    Source(#[from] SourceError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(serde_json::Error),
}
