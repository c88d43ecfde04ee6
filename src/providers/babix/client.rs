use std::time::Duration;

use super::errors::ServiceError;
use super::types::{AskRequest, AskResponse};
use crate::config::Config;

/// Default base URL for a locally running backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Connection settings for the answering service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Base URL without trailing slash.
    pub base_url: String,
    /// Per-request deadline. The session itself enforces no timeout.
    pub timeout: Duration,
}

impl ServiceConfig {
    /// Creates service settings, normalizing the base URL.
    pub fn new(base_url: &str, timeout_secs: u32) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(u64::from(timeout_secs)),
        }
    }

    /// Builds service settings from config, letting `BABIX_BASE_URL`
    /// override (test rigs, proxies).
    pub fn from_env(config: &Config) -> Self {
        let base_url = std::env::var("BABIX_BASE_URL")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| config.base_url.clone());
        Self::new(&base_url, config.request_timeout_secs)
    }
}

/// HTTP client for the answering service.
pub struct BabixClient {
    config: ServiceConfig,
    http: reqwest::Client,
}

impl BabixClient {
    /// Creates a new client with the given settings.
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Sends one question and returns the parsed answer.
    ///
    /// Issues exactly one request; every failure mode (transport, timeout,
    /// non-success status, malformed body) folds into [`ServiceError`].
    pub async fn ask(&self, question: &str) -> Result<AskResponse, ServiceError> {
        let url = format!("{}/api/ask", self.config.base_url);
        tracing::debug!(%url, "asking the answering service");

        let mut request = self.http.post(&url).json(&AskRequest { question });
        if !self.config.timeout.is_zero() {
            request = request.timeout(self.config.timeout);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ServiceError::from_request(&e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ServiceError::from_request(&e))?;

        if !status.is_success() {
            return Err(ServiceError::http_status(status.as_u16(), &body));
        }

        serde_json::from_str(&body)
            .map_err(|e| ServiceError::parse(format!("invalid response body: {}", e)))
    }
}
