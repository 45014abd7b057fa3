use crate::http::error::SourceError;
use async_trait::async_trait;
use tracing::info;

/// Data source for one scheduled run. The executor depends on this trait,
/// never on the HTTP client, so tests can substitute a canned source.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Performs one outbound fetch and returns the raw response body.
    async fn fetch(&self) -> Result<String, SourceError>;

    /// Endpoint description safe for logs (credentials redacted).
    fn endpoint(&self) -> String;
}

/// Seoul open-data API source.
///
/// The upstream contract puts the API key directly into the URL path:
/// `{base_url}/{key}/json/{service}/{start}/{end}/`. Keys embedded in URLs
/// are commonly logged by intermediaries, so the key is stripped from every
/// URL this type exposes through `endpoint()` or errors.
pub struct OpenApiSource {
    base_url: String,
    api_key: String,
    service: String,
    start_index: u32,
    end_index: u32,
    client: reqwest::Client,
}

impl OpenApiSource {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        service: impl Into<String>,
        start_index: u32,
        end_index: u32,
    ) -> Self {
        OpenApiSource {
            base_url: base_url.into(),
            api_key: api_key.into(),
            service: service.into(),
            start_index,
            end_index,
            client: reqwest::Client::new(),
        }
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    fn request_url(&self) -> String {
        format!(
            "{}/{}/json/{}/{}/{}/",
            self.base_url.trim_end_matches('/'),
            self.api_key,
            self.service,
            self.start_index,
            self.end_index
        )
    }
}

#[async_trait]
impl DataSource for OpenApiSource {
    async fn fetch(&self) -> Result<String, SourceError> {
        info!("Calling open API: {}", self.endpoint());

        let response = self.client.get(self.request_url()).send().await?;
        let status = response.status();

        // Success is strictly 200; the upstream reports its own errors with
        // other codes and a JSON body.
        if status != reqwest::StatusCode::OK {
            return Err(SourceError::UnexpectedStatus {
                status: status.as_u16(),
                endpoint: self.endpoint(),
            });
        }

        let body = response.text().await?;

        // Full response at info level, matching the legacy operator's
        // log_response behaviour. Verbose for large windows.
        info!("Open API response: {body}");

        Ok(body)
    }

    fn endpoint(&self) -> String {
        if self.api_key.is_empty() {
            return self.request_url();
        }
        self.request_url().replace(&self.api_key, "***")
    }
}
