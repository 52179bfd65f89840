//! Core data types for the relay.
//!
//! This module defines the inbound request, the outbound query
//! parameters sent to the provider, and the subset of the provider
//! response the relay consumes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::error::{RelayError, Result};

/// Fixed payload returned by the liveness route
pub const LIVENESS_MESSAGE: &str = "agent running at port 3000";

/// Field of the provider response that is relayed back to the caller
pub const NEWS_RESULTS_FIELD: &str = "news_results";

/// Liveness response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LivenessResponse {
    pub response: String,
}

impl Default for LivenessResponse {
    fn default() -> Self {
        Self {
            response: LIVENESS_MESSAGE.to_string(),
        }
    }
}

/// Body of `POST /tool`
///
/// Both fields are optional; absent or `null` values become the
/// empty string. `startIndex` may be a string or a number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RelayRequest {
    #[serde(default, deserialize_with = "text_or_empty")]
    pub query: String,

    #[serde(
        default,
        rename = "startIndex",
        deserialize_with = "text_or_number_or_empty"
    )]
    pub start_index: String,
}

impl RelayRequest {
    /// Parse a raw request body
    ///
    /// # Errors
    ///
    /// - `InvalidRequest`: body is empty, not JSON, not an object, or
    ///   a field has an unsupported JSON type
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        if body.iter().all(|b| b.is_ascii_whitespace()) {
            return Err(RelayError::InvalidRequest(
                "Request body is empty".to_string(),
            ));
        }

        let value: Value = serde_json::from_slice(body)
            .map_err(|e| RelayError::InvalidRequest(format!("Body is not valid JSON: {e}")))?;

        if !value.is_object() {
            return Err(RelayError::InvalidRequest(
                "Body must be a JSON object".to_string(),
            ));
        }

        serde_json::from_value(value).map_err(|e| RelayError::InvalidRequest(e.to_string()))
    }
}

fn text_or_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn text_or_number_or_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!(
            "startIndex must be a string or number, got {other}"
        ))),
    }
}

/// Search input handed to a provider
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsQuery {
    /// Search terms (`q`)
    pub query: String,

    /// Result offset (`start`), passed through verbatim
    pub start: String,
}

impl From<RelayRequest> for NewsQuery {
    fn from(req: RelayRequest) -> Self {
        Self {
            query: req.query,
            start: req.start_index,
        }
    }
}

/// Query-string parameters of the upstream search request
///
/// Field order is the order parameters appear on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundQueryParams {
    pub engine: String,
    pub q: String,
    pub start: String,
    pub gl: String,
    pub hl: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

/// The part of a provider response the relay reads
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderResponse {
    #[serde(default)]
    pub news_results: Option<Vec<Value>>,

    /// SerpApi reports request failures in this field, usually as a string
    #[serde(default)]
    pub error: Option<Value>,
}

impl ProviderResponse {
    /// Extract the news results
    ///
    /// # Errors
    ///
    /// - `ProviderError`: the provider reported an error message
    /// - `MissingField`: `news_results` is absent
    pub fn into_news_results(self) -> Result<Vec<Value>> {
        let message = self.error_message();
        match (self.news_results, message) {
            (Some(results), _) => Ok(results),
            (None, Some(message)) => Err(RelayError::ProviderError(message)),
            (None, None) => Err(RelayError::MissingField(NEWS_RESULTS_FIELD.to_string())),
        }
    }

    /// Provider-reported error as text; non-string values keep their JSON form
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(|e| match e.as_str() {
            Some(text) => text.to_string(),
            None => e.to_string(),
        })
    }
}
