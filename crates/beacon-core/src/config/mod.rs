//! Application configuration with layered loading.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in this order (later overrides earlier):
//!
//! 1. **Compiled defaults**: Hardcoded in struct `Default` implementations
//! 2. **Config file**: TOML file specified by `BEACON_CONFIG` env var
//! 3. **Environment variables**: `BEACON__*` env vars override specific fields
//!
//! # Configuration Sections
//!
//! - [`ServerConfig`]: HTTP server settings (bind address, webhook path, limits)
//! - [`AlertsConfig`]: Alert buffer sizing
//! - [`LoggingConfig`]: Log level and format
//!
//! # Validation
//!
//! Configuration is validated at load time by the server. Invalid
//! configurations (e.g., zero capacity, a webhook path without a leading `/`)
//! return errors rather than failing silently.
//!
//! # Example
//!
//! ```toml
//! [server]
//! bind_address = "0.0.0.0"
//! bind_port = 3001
//! webhook_path = "/api/webhook"
//!
//! [alerts]
//! capacity = 100
//! ```

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::alerts::DEFAULT_CAPACITY;

/// Path of the built-in health route; the webhook may not shadow it.
pub const HEALTH_PATH: &str = "/health";

/// HTTP server configuration settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// IP address to bind the server to. Defaults to `127.0.0.1`.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Port number to listen on. Must be greater than 0. Defaults to `3001`.
    #[serde(default = "default_bind_port")]
    pub bind_port: u16,

    /// Route serving ingestion (POST) and retrieval (GET). Defaults to `/api/webhook`.
    #[serde(default = "default_webhook_path")]
    pub webhook_path: String,

    /// Maximum number of requests handled at once. Defaults to `100`.
    #[serde(default = "default_max_concurrent_requests")]
    pub max_concurrent_requests: usize,

    /// Largest accepted request body in bytes. Defaults to 1 MiB.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_bind_port() -> u16 {
    3001
}

fn default_webhook_path() -> String {
    "/api/webhook".to_string()
}

fn default_max_concurrent_requests() -> usize {
    100
}

fn default_max_body_bytes() -> usize {
    1024 * 1024
}

/// Alert retention settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertsConfig {
    /// Number of most recent alerts kept in memory. Must be greater than 0. Defaults to `100`.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

/// Application logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (e.g., "trace", "debug", "info", "warn", "error"). Defaults to `"info"`.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: `"json"` or `"pretty"`. Defaults to `"pretty"`.
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

/// Root application configuration.
///
/// Loaded from TOML files and environment variables. Environment overrides use
/// the `BEACON` prefix with `__` as a separator, e.g.
/// `BEACON__SERVER__BIND_PORT=8080`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Deployment environment (e.g., "development", "production"). Defaults to `"development"`.
    #[serde(default = "default_environment")]
    pub environment: String,

    /// HTTP server configuration.
    #[serde(default)]
    pub server: ServerConfig,

    /// Alert buffer configuration.
    #[serde(default)]
    pub alerts: AlertsConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_environment() -> String {
    "development".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            bind_port: default_bind_port(),
            webhook_path: default_webhook_path(),
            max_concurrent_requests: default_max_concurrent_requests(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl Default for AlertsConfig {
    fn default() -> Self {
        Self { capacity: DEFAULT_CAPACITY }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), format: default_log_format() }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            server: ServerConfig::default(),
            alerts: AlertsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file with environment variable overrides.
    ///
    /// A missing file is not an error; defaults and environment variables
    /// still apply.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be parsed or deserialized.
    pub fn from_file<P: AsRef<Path>>(config_path: P) -> Result<Self, ConfigError> {
        let config_builder = Config::builder()
            .set_default("environment", "development")?
            .set_default("server.bind_address", "127.0.0.1")?
            .set_default("server.bind_port", 3001)?
            .set_default("server.webhook_path", "/api/webhook")?
            .set_default("server.max_concurrent_requests", 100)?
            .set_default("server.max_body_bytes", 1024 * 1024)?
            .set_default("alerts.capacity", 100)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?
            .add_source(File::with_name(&config_path.as_ref().to_string_lossy()).required(false))
            .add_source(Environment::with_prefix("BEACON").separator("__"))
            .build()?;

        config_builder.try_deserialize()
    }

    /// Loads configuration from `config/config.toml` with fallback to defaults.
    ///
    /// The config file path can be overridden using the `BEACON_CONFIG` environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration cannot be loaded or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("BEACON_CONFIG").unwrap_or_else(|_| "config/config.toml".to_string());
        Self::from_file(&config_path)
    }

    /// Returns the parsed socket address for the HTTP server.
    ///
    /// # Errors
    ///
    /// Returns an error string if the address cannot be parsed into a valid
    /// [`SocketAddr`](std::net::SocketAddr).
    pub fn socket_addr(&self) -> Result<std::net::SocketAddr, String> {
        format!("{}:{}", self.server.bind_address, self.server.bind_port)
            .parse()
            .map_err(|_| {
                format!(
                    "Invalid socket address: {}:{}",
                    self.server.bind_address, self.server.bind_port
                )
            })
    }

    /// Validates the configuration for correctness and consistency.
    ///
    /// # Errors
    ///
    /// Returns a descriptive error string if validation fails.
    pub fn validate(&self) -> Result<(), String> {
        if self.server.bind_port == 0 {
            return Err("Bind port must be greater than 0".to_string());
        }

        if self.socket_addr().is_err() {
            return Err(format!("Invalid bind address: {}", self.server.bind_address));
        }

        if !self.server.webhook_path.starts_with('/') || self.server.webhook_path.len() < 2 {
            return Err(format!(
                "Webhook path must start with '/' and name a route: {}",
                self.server.webhook_path
            ));
        }

        if self.server.webhook_path == HEALTH_PATH {
            return Err(format!("Webhook path cannot be {HEALTH_PATH}"));
        }

        if self.server.max_concurrent_requests == 0 {
            return Err("Max concurrent requests must be greater than 0".to_string());
        }

        if self.server.max_body_bytes == 0 {
            return Err("Max body bytes must be greater than 0".to_string());
        }

        if self.alerts.capacity == 0 {
            return Err("Alert capacity must be greater than 0".to_string());
        }

        if !["json", "pretty"].contains(&self.logging.format.as_str()) {
            return Err("Logging format must be 'json' or 'pretty'".to_string());
        }

        Ok(())
    }
}
