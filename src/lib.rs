//! serp-relay - HTTP relay for SerpApi news search
//!
//! Accepts a search query over HTTP, forwards it to SerpApi's
//! `google_news` engine, and returns the provider's news results
//! unchanged.
//!
//! # Architecture
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types
//!   - provider (trait + SerpApi reqwest client)
//!   - services (shared container)
//!
//! - **http**: REST adapter (depends on core)
//!   - handlers, error mapping, middleware, router
//!
//! - **cli**: Command-line overrides for the server binary
//!
//! # Endpoints
//!
//! - `GET /` - liveness payload
//! - `POST /tool` - relay `{query, startIndex}` to the provider

// Core domain logic (protocol-agnostic)
pub mod core;

// HTTP REST adapter
pub mod http;

// Command-line interface
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::config::Config;
pub use crate::core::error::{RelayError, Result};
pub use crate::core::provider::{NewsProvider, SerpApiClient};
pub use crate::core::services::Services;
pub use crate::core::types::*;
