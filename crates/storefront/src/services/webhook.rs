//! Chat webhook client for order and review notifications.
//!
//! The webhook accepts an HTTP POST with a JSON body carrying a top-level
//! message and a list of rich embeds. It is treated as opaque: no response
//! body is consumed beyond the success/failure status.
//!
//! Notifications are best-effort. Callers that must not fail on delivery
//! problems go through [`notify`], which awaits the single attempt and logs
//! the outcome instead of propagating it.

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// Errors that can occur when posting to the webhook.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// HTTP request failed.
    #[error("webhook request failed: {0}")]
    Request(String),

    /// Webhook returned a non-success status.
    #[error("webhook returned status {status}")]
    Status { status: u16 },
}

/// A webhook message: top-level content plus rich embeds.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookMessage {
    /// Plain message shown above the embeds.
    pub content: String,
    /// Rich embed objects.
    pub embeds: Vec<Embed>,
}

/// A rich embed attached to a webhook message.
#[derive(Debug, Clone, Serialize)]
pub struct Embed {
    pub title: String,
    pub description: String,
    /// Accent color as a 24-bit RGB integer.
    pub color: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
    /// ISO-8601 timestamp shown in the embed footer area.
    pub timestamp: String,
    pub footer: EmbedFooter,
}

/// A name/value pair rendered inside an embed.
#[derive(Debug, Clone, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// Embed footer text.
#[derive(Debug, Clone, Serialize)]
pub struct EmbedFooter {
    pub text: String,
}

/// Client for the configured notification webhook.
#[derive(Clone)]
pub struct WebhookClient {
    /// HTTP client.
    client: Client,
    /// Webhook URL (embeds an access token).
    url: SecretString,
}

impl std::fmt::Debug for WebhookClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookClient")
            .field("url", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl WebhookClient {
    /// Create a new webhook client.
    #[must_use]
    pub fn new(url: SecretString) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }

    /// Post a message to the webhook.
    ///
    /// A single attempt; no retry, no backoff.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the webhook responds with a
    /// non-success status.
    #[instrument(skip_all)]
    pub async fn execute(&self, message: &WebhookMessage) -> Result<(), WebhookError> {
        let response = self
            .client
            .post(self.url.expose_secret())
            .json(message)
            .send()
            .await
            .map_err(|e| WebhookError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WebhookError::Status {
                status: status.as_u16(),
            });
        }

        debug!("Message posted to webhook");

        Ok(())
    }
}

/// Send a notification without letting delivery affect the caller.
///
/// Awaits the single attempt when a client is configured; failure is logged
/// and swallowed. With no client configured the send is skipped entirely.
pub async fn notify(client: Option<&WebhookClient>, message: &WebhookMessage) {
    match client {
        Some(client) => {
            if let Err(e) = client.execute(message).await {
                warn!(error = %e, "Notification delivery failed");
            }
        }
        None => debug!("Webhook not configured, skipping notification"),
    }
}
