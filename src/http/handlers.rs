//! HTTP request handlers for the relay
//!
//! Implements the liveness route and the relay route.

use std::sync::Arc;

use axum::{body::Bytes, extract::State, response::IntoResponse, Json};
use serde_json::Value;

use crate::core::error::RelayError;
use crate::core::services::Services;
use crate::core::types::{LivenessResponse, NewsQuery, RelayRequest};

/// Liveness handler
///
/// Returns the fixed status payload, unconditionally.
pub async fn liveness_handler() -> impl IntoResponse {
    Json(LivenessResponse::default())
}

/// Relay handler
///
/// Parses the inbound body, performs exactly one provider search
/// and returns the provider's news results unchanged.
///
/// # Arguments
///
/// * `state` - Shared application state
/// * `body` - Raw request body, parsed regardless of content type
///
/// # Returns
///
/// The provider's `news_results` array on success
///
/// # Errors
///
/// - `InvalidRequest`: Body is not a usable JSON object
/// - `ProviderError`: Upstream call failed or returned garbage
/// - `MissingField`: Upstream response lacks `news_results`
pub async fn tool_handler(
    State(services): State<Arc<Services>>,
    body: Bytes,
) -> Result<Json<Vec<Value>>, RelayError> {
    let query = NewsQuery::from(RelayRequest::from_slice(&body)?);

    tracing::info!(q = %query.query, start = %query.start, "Relaying news search");

    let results = services.provider.search_news(&query).await?;

    Ok(Json(results))
}
