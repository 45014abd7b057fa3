use crate::{env::EnvManager, error::ConfigError};
use serde::Serialize;
use std::fmt;
use tracing::warn;

pub const BASE_URL_VAR: &str = "SEOUL_OPENAPI_BASE_URL";
pub const API_KEY_VAR: &str = "SEOUL_DATA_API_KEY";

const DEFAULT_BASE_URL: &str = "http://openapi.seoul.go.kr:8088";

/// Open-API connection resolved to runtime configuration.
///
/// Resolved once per run rather than once per process, so a rotated key is
/// picked up on the next scheduled run without a restart.
#[derive(Clone, Serialize)]
pub struct Connection {
    pub name: String,
    pub base_url: String,
    #[serde(skip_serializing)]
    pub api_key: String,
}

impl Connection {
    pub fn resolve(env: &EnvManager) -> Result<Connection, ConfigError> {
        let base_url = env
            .get(BASE_URL_VAR)
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        let api_key = env
            .get(API_KEY_VAR)
            .ok_or(ConfigError::MissingApiKey)?
            .to_string();

        if api_key.is_empty() {
            // Not a hard error: the upstream rejects the request remotely.
            warn!("{API_KEY_VAR} is empty; the open API will refuse the call");
        }

        Ok(Connection {
            name: "seoul_openapi".to_string(),
            base_url,
            api_key,
        })
    }
}

// The key must never leak through Debug output or error payloads.
impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("name", &self.name)
            .field("base_url", &self.base_url)
            .field("api_key", &"***")
            .finish()
    }
}
