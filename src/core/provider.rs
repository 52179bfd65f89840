//! News search providers.
//!
//! `NewsProvider` is the seam between the HTTP adapter and the
//! upstream API. `SerpApiClient` is the production implementation;
//! tests substitute their own.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::core::config::ProviderConfig;
use crate::core::error::{RelayError, Result};
use crate::core::types::{NewsQuery, OutboundQueryParams, ProviderResponse};

/// Source of news search results.
#[async_trait]
pub trait NewsProvider: Send + Sync + fmt::Debug {
    /// Run one search and return the provider's news results as-is.
    ///
    /// # Errors
    /// - `RelayError::ProviderError` - transport failure, non-2xx status,
    ///   malformed body, or an error reported by the provider
    /// - `RelayError::MissingField` - response lacks the results field
    async fn search_news(&self, query: &NewsQuery) -> Result<Vec<Value>>;
}

/// SerpApi client issuing `GET <base_url>?engine=..&q=..` requests.
pub struct SerpApiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    engine: String,
    gl: String,
    hl: String,
}

// Hand-written so the api_key never reaches logs.
impl fmt::Debug for SerpApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerpApiClient")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("engine", &self.engine)
            .field("gl", &self.gl)
            .field("hl", &self.hl)
            .finish()
    }
}

impl SerpApiClient {
    /// Build a client from provider configuration.
    ///
    /// # Errors
    /// - `RelayError::ConfigError` - the HTTP client could not be built
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_sec))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RelayError::ConfigError(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            engine: config.engine.clone(),
            gl: config.gl.clone(),
            hl: config.hl.clone(),
        })
    }

    /// Upstream endpoint this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Outbound query parameters for a search.
    pub fn params_for(&self, query: &NewsQuery) -> OutboundQueryParams {
        OutboundQueryParams {
            engine: self.engine.clone(),
            q: query.query.clone(),
            start: query.start.clone(),
            gl: self.gl.clone(),
            hl: self.hl.clone(),
            api_key: self.api_key.clone(),
        }
    }

    /// Build, without sending, the request for a search.
    pub fn build_request(&self, query: &NewsQuery) -> Result<reqwest::Request> {
        self.client
            .get(&self.base_url)
            .query(&self.params_for(query))
            .build()
            .map_err(|e| RelayError::ProviderError(format!("Failed to build request: {e}")))
    }
}

/// Turn a raw upstream reply into news results.
///
/// Non-2xx replies are errors even when their body parses; SerpApi's
/// `error` message is carried into the error when present.
pub fn interpret_response(status: reqwest::StatusCode, body: &[u8]) -> Result<Vec<Value>> {
    if !status.is_success() {
        let detail = serde_json::from_slice::<ProviderResponse>(body)
            .ok()
            .and_then(|r| r.error_message())
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_string());
        return Err(RelayError::ProviderError(format!(
            "Provider returned {}: {}",
            status.as_u16(),
            detail
        )));
    }

    let parsed: ProviderResponse = serde_json::from_slice(body)
        .map_err(|e| RelayError::ProviderError(format!("Malformed provider response: {e}")))?;

    parsed.into_news_results()
}

#[async_trait]
impl NewsProvider for SerpApiClient {
    async fn search_news(&self, query: &NewsQuery) -> Result<Vec<Value>> {
        let request = self.build_request(query)?;

        tracing::debug!(
            base_url = %self.base_url,
            q = %query.query,
            start = %query.start,
            "Sending provider request"
        );

        let response = self.client.execute(request).await.map_err(|e| {
            let err = RelayError::from(e);
            tracing::warn!(error = %err, "Provider request failed");
            err
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            let err = RelayError::from(e);
            tracing::warn!(error = %err, "Failed to read provider response");
            err
        })?;

        let results = interpret_response(status, &body).inspect_err(|e| {
            tracing::warn!(status = %status.as_u16(), error = %e, "Provider response rejected");
        })?;

        tracing::debug!(count = results.len(), "Provider returned news results");
        Ok(results)
    }
}
