//! Outbound service clients.

pub mod messages;
pub mod webhook;

pub use messages::{build_order_message, build_review_message};
pub use webhook::{WebhookClient, WebhookError, WebhookMessage};
