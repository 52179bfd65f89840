//! Service container for the relay
//!
//! Provides shared access to configuration and the news provider.

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::provider::{NewsProvider, SerpApiClient};
use std::sync::Arc;

/// Services container
///
/// Handed to every handler through axum state.
#[derive(Clone)]
pub struct Services {
    /// Upstream news search provider
    pub provider: Arc<dyn NewsProvider>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration, using SerpApi upstream
    pub fn new(config: Config) -> Result<Self> {
        let provider = Arc::new(SerpApiClient::new(&config.provider)?);
        Ok(Self::with_provider(config, provider))
    }

    /// Create services around an existing provider
    pub fn with_provider(config: Config, provider: Arc<dyn NewsProvider>) -> Self {
        Self {
            provider,
            config: Arc::new(config),
        }
    }
}
