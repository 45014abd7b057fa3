use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read env file: {0}")]
    EnvFile(String),

    #[error("SEOUL_DATA_API_KEY is not set")]
    MissingApiKey,

    #[error("Failed to read the settings file: {0}")]
    SettingsRead(#[from] std::io::Error),

    #[error("Failed to parse the settings file as JSON: {0}")]
    SettingsParse(#[from] serde_json::Error),

    #[error("Invalid settings: {0}")]
    Invalid(String),
}
