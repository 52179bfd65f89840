//! HTTP mapping for relay errors.
//!
//! Converts `RelayError` into status codes and JSON error bodies
//! for API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::core::error::RelayError;

impl RelayError {
    /// Convert error to appropriate HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            RelayError::ProviderError(_) | RelayError::MissingField(_) => StatusCode::BAD_GATEWAY,
            RelayError::ConfigError(_) | RelayError::IoError(_) | RelayError::TomlError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Implement IntoResponse for automatic error conversion in Axum
impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
