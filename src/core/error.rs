//! Error types for the relay.
//!
//! This module defines the error taxonomy used throughout the
//! service. The mapping to HTTP status codes lives in the HTTP
//! adapter (`http::error`).

use thiserror::Error;

/// Result type alias for relay operations
pub type Result<T> = std::result::Result<T, RelayError>;

/// Main error type for the relay service
#[derive(Error, Debug)]
pub enum RelayError {
    /// The inbound body could not be interpreted as a relay request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Network failure, timeout, non-2xx status or malformed JSON upstream
    #[error("Provider error: {0}")]
    ProviderError(String),

    /// The upstream response was valid JSON but lacked an expected field
    #[error("Missing field in provider response: {0}")]
    MissingField(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl RelayError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if the caller sent something we could not use
    pub fn is_bad_request(&self) -> bool {
        matches!(self, RelayError::InvalidRequest(_))
    }

    /// Check if the failure originated at the provider
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            RelayError::ProviderError(_) | RelayError::MissingField(_)
        )
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            "request timed out"
        } else if err.is_connect() {
            "connection failed"
        } else if err.is_decode() {
            "malformed response body"
        } else {
            "request failed"
        };
        // reqwest includes the full URL (and thus the api_key) in its
        // Display output, so only the kind and status are kept.
        match err.status() {
            Some(status) => RelayError::ProviderError(format!("{kind} (status {status})")),
            None => RelayError::ProviderError(kind.to_string()),
        }
    }
}
