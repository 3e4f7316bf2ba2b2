//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `ORDER_RECIPIENT_NUMBER` - Messaging recipient for order deep-links
//!   (digits only, no `+` or spaces)
//!
//! ## Optional
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `ORDER_WEBHOOK_URL` - Chat webhook for order/review notifications;
//!   notifications are skipped when unset
//! - `REVIEWS_PATH` - Review board persistence file
//!   (default: data/reviews.json)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Chat webhook URL for order/review notifications (contains a token)
    pub webhook_url: Option<SecretString>,
    /// Messaging recipient for the order deep-link (digits only)
    pub order_recipient: String,
    /// Path of the JSON file holding the review board
    pub reviews_path: PathBuf,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

impl std::fmt::Debug for StorefrontConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorefrontConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("webhook_url", &self.webhook_url.as_ref().map(|_| "[REDACTED]"))
            .field("order_recipient", &self.order_recipient)
            .field("reviews_path", &self.reviews_path)
            .field("sentry_dsn", &self.sentry_dsn)
            .finish()
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("STOREFRONT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_HOST".to_string(), e.to_string())
            })?;
        let port = get_env_or_default("STOREFRONT_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_PORT".to_string(), e.to_string())
            })?;

        let webhook_url = get_optional_env("ORDER_WEBHOOK_URL")
            .map(|raw| validate_webhook_url(&raw).map(|()| SecretString::from(raw)))
            .transpose()?;

        let order_recipient = get_required_env("ORDER_RECIPIENT_NUMBER")?;
        validate_recipient_number(&order_recipient)?;

        let reviews_path =
            PathBuf::from(get_env_or_default("REVIEWS_PATH", "data/reviews.json"));
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            host,
            port,
            webhook_url,
            order_recipient,
            reviews_path,
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Expose the webhook URL for the notification client, if configured.
    #[must_use]
    pub fn webhook_url(&self) -> Option<&SecretString> {
        self.webhook_url.as_ref()
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate that the webhook URL parses and uses HTTPS.
fn validate_webhook_url(raw: &str) -> Result<(), ConfigError> {
    let parsed = url::Url::parse(raw).map_err(|e| {
        ConfigError::InvalidEnvVar("ORDER_WEBHOOK_URL".to_string(), e.to_string())
    })?;
    if parsed.scheme() != "https" {
        return Err(ConfigError::InvalidEnvVar(
            "ORDER_WEBHOOK_URL".to_string(),
            "must be an https URL".to_string(),
        ));
    }
    Ok(())
}

/// Validate that the recipient is digits only (no `+`, no spaces).
fn validate_recipient_number(raw: &str) -> Result<(), ConfigError> {
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
        return Err(ConfigError::InvalidEnvVar(
            "ORDER_RECIPIENT_NUMBER".to_string(),
            "must contain digits only, without + or spaces".to_string(),
        ));
    }
    Ok(())
}
