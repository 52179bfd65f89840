//! Middleware for the relay
//!
//! Provides request logging with duration tracking.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{error, info, warn};

/// How a finished request is reported in the logs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// 1xx-3xx, logged at INFO
    Completed,
    /// 4xx caused by the caller, logged at WARN
    Rejected,
    /// 502, the news provider failed; logged at ERROR
    UpstreamFailed,
    /// Any other 5xx, logged at ERROR
    Failed,
}

impl RequestOutcome {
    pub fn for_status(status: StatusCode) -> Self {
        if status == StatusCode::BAD_GATEWAY {
            RequestOutcome::UpstreamFailed
        } else if status.is_server_error() {
            RequestOutcome::Failed
        } else if status.is_client_error() {
            RequestOutcome::Rejected
        } else {
            RequestOutcome::Completed
        }
    }
}

/// Request logging middleware
///
/// Logs every request with method, URI, status code, and duration at a
/// level picked by [`RequestOutcome::for_status`].
pub async fn log_request(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;

    let duration_ms = start.elapsed().as_millis() as u64;
    let status = response.status().as_u16();

    match RequestOutcome::for_status(response.status()) {
        RequestOutcome::Completed => {
            info!(%method, %uri, status, duration_ms, "Request completed")
        }
        RequestOutcome::Rejected => {
            warn!(%method, %uri, status, duration_ms, "Request rejected")
        }
        RequestOutcome::UpstreamFailed => {
            error!(%method, %uri, status, duration_ms, "Request failed: news provider unavailable")
        }
        RequestOutcome::Failed => {
            error!(%method, %uri, status, duration_ms, "Request failed")
        }
    }

    response
}
