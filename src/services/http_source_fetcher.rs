//! Source fetcher implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::domain::{AppError, RegistryConfig};
use crate::ports::SourceFetcher;

const USER_AGENT: &str = concat!("reuseit/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTP client for raw source files.
#[derive(Debug, Clone)]
pub struct HttpSourceFetcher {
    client: Client,
}

impl HttpSourceFetcher {
    /// Create a new fetcher honoring the configured timeout.
    pub fn new(config: &RegistryConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl SourceFetcher for HttpSourceFetcher {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, AppError> {
        tracing::debug!(%url, "fetching source file");

        let response = self.client.get(url.clone()).send().map_err(|e| AppError::FetchFailed {
            url: url.to_string(),
            reason: format!("request failed: {}", e),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::FetchFailed {
                url: url.to_string(),
                reason: format!(
                    "server responded {} {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("")
                )
                .trim_end()
                .to_string(),
            });
        }

        let body = response.bytes().map_err(|e| AppError::FetchFailed {
            url: url.to_string(),
            reason: format!("failed to read body: {}", e),
        })?;
        tracing::debug!(%url, bytes = body.len(), "fetched source file");
        Ok(body.to_vec())
    }
}
