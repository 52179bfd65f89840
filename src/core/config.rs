//! Configuration management for the relay.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{Result, RelayError};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Listener configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to bind
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Upstream search provider configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderConfig {
    /// Search endpoint (GET, query-string parameters)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Credential forwarded as `api_key`; omitted upstream when unset
    #[serde(default)]
    pub api_key: Option<String>,

    /// SerpApi engine name
    #[serde(default = "default_engine")]
    pub engine: String,

    /// Country code (`gl`)
    #[serde(default = "default_gl")]
    pub gl: String,

    /// Interface language (`hl`)
    #[serde(default = "default_hl")]
    pub hl: String,

    /// Outbound request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_sec: u64,
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line human-readable output
    #[default]
    Pretty,
    /// Single-line output
    Compact,
    /// Newline-delimited JSON
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,

    /// Default filter directives, used when RUST_LOG is unset
    #[serde(default = "default_filter")]
    pub filter: String,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_base_url() -> String {
    "https://serpapi.com/search.json".to_string()
}

fn default_engine() -> String {
    "google_news".to_string()
}

fn default_gl() -> String {
    "us".to_string()
}

fn default_hl() -> String {
    "en".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_filter() -> String {
    "serp_relay=info,tower_http=info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            engine: default_engine(),
            gl: default_gl(),
            hl: default_hl(),
            timeout_sec: default_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            filter: default_filter(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// The TOML file is taken from SERP_RELAY_CONFIG, falling back to
    /// ./serp-relay.toml when present.
    pub fn load() -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("SERP_RELAY_CONFIG") {
            Self::from_file(config_path)?
        } else if Path::new("serp-relay.toml").exists() {
            Self::from_file("serp-relay.toml")?
        } else {
            Self::default()
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        // Server configuration
        if let Ok(host) = env::var("SERP_RELAY_HOST") {
            if !host.trim().is_empty() {
                self.server.host = host;
            }
        }
        if let Ok(port) = env::var("PORT") {
            if let Ok(p) = port.trim().parse() {
                self.server.port = p;
            }
        }

        // Provider configuration
        if let Ok(key) = env::var("SERPAPI_API_KEY") {
            if !key.is_empty() {
                self.provider.api_key = Some(key);
            }
        }
        if let Ok(url) = env::var("SERPAPI_BASE_URL") {
            self.provider.base_url = url;
        }
        if let Ok(timeout) = env::var("SERPAPI_TIMEOUT_SEC") {
            if let Ok(t) = timeout.trim().parse() {
                self.provider.timeout_sec = t;
            }
        }

        // Logging configuration
        if let Ok(format) = env::var("SERP_RELAY_LOG_FORMAT") {
            match LogFormat::from_str(format.trim(), true) {
                Ok(f) => self.logging.format = f,
                // Subscriber is not installed yet at load time
                Err(e) => eprintln!("Ignoring SERP_RELAY_LOG_FORMAT: {e}"),
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(RelayError::ConfigError(
                "Port must be non-zero".to_string(),
            ));
        }

        let url = self.provider.base_url.trim();
        if url.is_empty() {
            return Err(RelayError::ConfigError(
                "Provider base URL cannot be empty".to_string(),
            ));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(RelayError::ConfigError(format!(
                "Provider base URL must be http(s): {url}"
            )));
        }

        if self.provider.timeout_sec == 0 {
            return Err(RelayError::ConfigError(
                "Provider timeout must be non-zero".to_string(),
            ));
        }

        for (name, value) in [
            ("engine", &self.provider.engine),
            ("gl", &self.provider.gl),
            ("hl", &self.provider.hl),
        ] {
            if value.trim().is_empty() {
                return Err(RelayError::ConfigError(format!(
                    "Provider {name} cannot be empty"
                )));
            }
        }

        Ok(())
    }

    /// Log configuration (redacting sensitive values)
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen: {}:{}", self.server.host, self.server.port);
        tracing::info!("  Provider URL: {}", self.provider.base_url);
        tracing::info!(
            "  Provider params: engine={} gl={} hl={}",
            self.provider.engine,
            self.provider.gl,
            self.provider.hl
        );
        tracing::info!(
            "  API key: {}",
            if self.provider.api_key.is_some() {
                "[set]"
            } else {
                "[unset]"
            }
        );
        tracing::info!("  Provider timeout: {}s", self.provider.timeout_sec);
        tracing::info!("  Log format: {:?}", self.logging.format);

        if self.provider.api_key.is_none() {
            tracing::warn!("SERPAPI_API_KEY is not set; upstream requests will carry no api_key");
        }
    }
}
