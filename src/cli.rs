//! Command-line arguments for the relay server
//!
//! Flags override values loaded from the TOML file and environment.

use clap::Parser;

use crate::core::config::{Config, LogFormat};
use crate::core::error::Result;

/// SerpApi news relay
///
/// Serves `GET /` (liveness) and `POST /tool` (news search relay).
#[derive(Parser, Debug, Default)]
#[command(name = "serp-relay")]
#[command(version)]
#[command(about = "HTTP relay for SerpApi Google News searches", long_about = None)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, short = 'c', env = "SERP_RELAY_CONFIG")]
    pub config: Option<String>,

    /// Interface to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, short = 'p')]
    pub port: Option<u16>,

    /// Log output format (pretty, compact, json)
    #[arg(long)]
    pub log_format: Option<LogFormat>,
}

impl Cli {
    /// Load configuration and apply command-line overrides
    ///
    /// Priority: flags > env vars > TOML > defaults.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => {
                let mut config = Config::from_file(path)?;
                config.merge_env();
                config
            }
            None => Config::load()?,
        };

        self.apply(&mut config);
        config.validate()?;

        Ok(config)
    }

    /// Apply flag overrides to a loaded configuration
    pub fn apply(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(format) = self.log_format {
            config.logging.format = format;
        }
    }
}
