//! Core domain logic (protocol-agnostic)
//!
//! This module contains everything that is independent of the
//! HTTP transport.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Request, outbound parameter and response types
//! - **provider**: News provider trait and SerpApi client
//! - **services**: Shared service container

pub mod config;
pub mod error;
pub mod provider;
pub mod services;
pub mod types;

// Re-export key types for convenience
pub use config::Config;
pub use error::{RelayError, Result};
pub use services::Services;
