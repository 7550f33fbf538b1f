//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export SECRET_KEY="change-me"
//! export LISTEN="127.0.0.1:5000"
//! ```
//!
//! ## Required Variables
//!
//! - `SECRET_KEY` - Key used to sign CSRF tokens
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:5000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `CSRF_TIME_LIMIT` - CSRF token lifetime in seconds (default: 3600)
//! - `CSRF_ENABLED` - Set to `false` or `0` to skip CSRF verification (default: `true`)
//! - `STATIC_DIR` - Directory served under `/static` (default: `static`)

use anyhow::{Context, Result};
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    /// Signing key for CSRF tokens. Loaded from `SECRET_KEY`. Must be non-empty.
    pub secret_key: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Seconds a CSRF token stays valid after it is issued.
    pub csrf_time_limit: u64,
    pub csrf_enabled: bool,
    pub static_dir: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("secret_key", &"***")
            .field("listen_addr", &self.listen_addr)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .field("csrf_time_limit", &self.csrf_time_limit)
            .field("csrf_enabled", &self.csrf_enabled)
            .field("static_dir", &self.static_dir)
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `SECRET_KEY` is not set or `CSRF_TIME_LIMIT` is not a number.
    pub fn from_env() -> Result<Self> {
        let secret_key = env::var("SECRET_KEY").context("SECRET_KEY must be set")?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:5000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let csrf_time_limit = match env::var("CSRF_TIME_LIMIT") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("CSRF_TIME_LIMIT must be a number, got '{v}'"))?,
            Err(_) => 3600,
        };

        let csrf_enabled = env::var("CSRF_ENABLED")
            .map(|v| !(v.eq_ignore_ascii_case("false") || v == "0"))
            .unwrap_or(true);

        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());

        Ok(Self {
            secret_key,
            listen_addr,
            log_level,
            log_format,
            csrf_time_limit,
            csrf_enabled,
            static_dir,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `secret_key` is empty
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `csrf_time_limit` is zero
    pub fn validate(&self) -> Result<()> {
        if self.secret_key.is_empty() {
            anyhow::bail!("SECRET_KEY must not be empty");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.csrf_time_limit == 0 {
            anyhow::bail!("CSRF_TIME_LIMIT must be greater than 0");
        }

        Ok(())
    }

    /// Prints configuration summary (without the secret key).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Secret key: {} characters", self.secret_key.chars().count());
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        if self.csrf_enabled {
            tracing::info!("  CSRF: enabled ({}s token lifetime)", self.csrf_time_limit);
        } else {
            tracing::warn!("  CSRF: disabled");
        }
        tracing::info!("  Static files: {}", self.static_dir);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
