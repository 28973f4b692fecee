//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, validated, and never changes
//! afterwards.
//!
//! ```bash
//! export WEBHOOK_URL="https://automation.example.com/webhook/article"
//! export LISTEN="0.0.0.0:8000"
//! ```
//!
//! ## Required Variables
//!
//! - `WEBHOOK_URL` - Absolute HTTP(S) URL of the automation webhook
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;
use url::Url;

use crate::application::services::BackoffSchedule;
use crate::utils::url_validator::parse_http_url;

/// Timeout applied to each individual delivery attempt.
pub const ATTEMPT_TIMEOUT: Duration = Duration::from_secs(10);

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub webhook_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
}

/// Immutable settings handed to the delivery component at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryConfig {
    pub webhook_url: Url,
    pub attempt_timeout: Duration,
    pub schedule: BackoffSchedule,
}

impl DeliveryConfig {
    /// Fixed timeout and backoff schedule for `webhook_url`.
    pub fn new(webhook_url: Url) -> Self {
        Self {
            webhook_url,
            attempt_timeout: ATTEMPT_TIMEOUT,
            schedule: BackoffSchedule::default(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `WEBHOOK_URL` is missing.
    pub fn from_env() -> Result<Self> {
        let webhook_url = env::var("WEBHOOK_URL").context("WEBHOOK_URL must be set")?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            webhook_url,
            listen_addr,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `webhook_url` is not an absolute HTTP(S) URL
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    pub fn validate(&self) -> Result<()> {
        parse_http_url(&self.webhook_url)
            .with_context(|| format!("WEBHOOK_URL is invalid: '{}'", self.webhook_url))?;

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

        Ok(())
    }

    /// Builds the delivery settings for the configured webhook.
    ///
    /// # Errors
    ///
    /// Returns an error if `webhook_url` is not an absolute HTTP(S) URL.
    pub fn delivery(&self) -> Result<DeliveryConfig> {
        let url = parse_http_url(&self.webhook_url).context("WEBHOOK_URL is invalid")?;
        Ok(DeliveryConfig::new(url))
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Webhook: {}", mask_webhook_url(&self.webhook_url));
        tracing::info!("  Attempt timeout: {}s", ATTEMPT_TIMEOUT.as_secs());
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Masks the secret parts of a webhook URL for logging.
///
/// Webhook paths usually embed an unguessable token, so only the origin is
/// kept:
/// - `https://hooks.example.com/webhook/95159d87` → `https://hooks.example.com/***`
/// - `https://user:pw@hooks.example.com/` → `https://hooks.example.com/***`
fn mask_webhook_url(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => format!("{}/***", parsed.origin().ascii_serialization()),
        Err(_) => "***".to_string(),
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
