//! Fact API client.

use crate::config::ApiConfig;
use crate::models::FactCandidate;
use crate::{Error, Result};
use serde::Deserialize;
use std::time::Duration;

/// Source of new facts.
pub trait FactSource {
    /// Fetches one fact.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FetchFailed`] if no usable fact could be obtained.
    fn fetch(&self) -> Result<FactCandidate>;
}

/// Response body of the fact API.
#[derive(Debug, Deserialize)]
struct FactResponse {
    fact: String,
    #[serde(default)]
    length: Option<u32>,
}

/// Parses a fact API response body.
///
/// # Errors
///
/// Returns [`Error::FetchFailed`] if the body is not a fact object or the
/// fact text is blank.
pub fn parse_fact_response(body: &str) -> Result<FactCandidate> {
    let response: FactResponse = serde_json::from_str(body).map_err(|e| Error::FetchFailed {
        cause: format!("invalid response body: {e}"),
    })?;

    FactCandidate::new(response.fact, response.length).map_err(|e| Error::FetchFailed {
        cause: e.to_string(),
    })
}

/// Blocking client for `catfact.ninja`-style endpoints.
pub struct CatFactClient {
    /// API endpoint.
    endpoint: String,
    /// HTTP client.
    client: reqwest::blocking::Client,
}

impl CatFactClient {
    /// Creates a client for the default endpoint with default timeouts.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&ApiConfig::default())
    }

    /// Creates a client from API settings.
    #[must_use]
    pub fn from_config(config: &ApiConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            client: build_http_client(config),
        }
    }

    /// Sets the API endpoint.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Returns the API endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request(&self) -> Result<FactCandidate> {
        let response = self
            .client
            .get(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .map_err(|e| {
                let error_kind = if e.is_timeout() {
                    "timeout"
                } else if e.is_connect() {
                    "connect"
                } else if e.is_request() {
                    "request"
                } else {
                    "unknown"
                };
                tracing::error!(
                    endpoint = %self.endpoint,
                    error = %e,
                    error_kind = error_kind,
                    "Fact request failed"
                );
                Error::FetchFailed {
                    cause: format!("{error_kind} error: {e}"),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(
                endpoint = %self.endpoint,
                status = %status,
                "Fact API returned error status"
            );
            return Err(Error::FetchFailed {
                cause: format!("API returned status: {status}"),
            });
        }

        let body = response.text().map_err(|e| Error::FetchFailed {
            cause: format!("failed to read response body: {e}"),
        })?;

        parse_fact_response(&body).inspect_err(|e| {
            tracing::error!(endpoint = %self.endpoint, error = %e, "Failed to parse fact response");
        })
    }
}

impl Default for CatFactClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FactSource for CatFactClient {
    fn fetch(&self) -> Result<FactCandidate> {
        let result = self.request();
        let status = if result.is_ok() { "success" } else { "error" };
        metrics::counter!("catfacts_fetch_total", "status" => status).increment(1);
        result
    }
}

/// Builds a blocking HTTP client with the configured timeouts.
fn build_http_client(config: &ApiConfig) -> reqwest::blocking::Client {
    let mut builder = reqwest::blocking::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));
    if config.timeout_ms > 0 {
        builder = builder.timeout(Duration::from_millis(config.timeout_ms));
    }
    if config.connect_timeout_ms > 0 {
        builder = builder.connect_timeout(Duration::from_millis(config.connect_timeout_ms));
    }

    builder.build().unwrap_or_else(|err| {
        tracing::warn!("Failed to build HTTP client: {err}");
        reqwest::blocking::Client::new()
    })
}
