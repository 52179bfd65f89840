//! HTTP adapter
//!
//! Depends only on core/.
//!
//! Exposes the liveness and relay endpoints via the Axum web
//! framework.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::*;
pub use router::router;
