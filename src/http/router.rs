//! Router assembly.

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::core::services::Services;
use crate::http::{handlers, middleware as http_middleware};

/// Build the application router with routes, middleware and state.
pub fn router(services: Arc<Services>) -> Router {
    Router::new()
        .route("/", get(handlers::liveness_handler))
        .route("/tool", post(handlers::tool_handler))
        .layer(middleware::from_fn(http_middleware::log_request))
        .layer(CorsLayer::permissive())
        .with_state(services)
}
