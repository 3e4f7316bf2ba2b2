//! Checkout: validation, order formatting, and submission sequencing.
//!
//! A checkout renders the cart twice: once for the chat-webhook embed
//! (with item glyphs) and once for the messaging deep-link (plain text,
//! percent-encoded into the URL). The webhook call is awaited but
//! best-effort; the deep-link is always produced once the await resolves,
//! success or caught failure. The caller clears the cart afterwards.

use chrono::Utc;
use thiserror::Error;
use tracing::{info, instrument};

use crate::cart::Cart;
use crate::services::webhook::{self, WebhookClient};
use crate::services::build_order_message;

/// Validation failures aborting a checkout.
///
/// Checked in order; first failure wins. A failed checkout leaves the cart
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// No delivery location selected.
    #[error("please select a delivery location")]
    MissingDeliveryLocation,

    /// No line items in the cart.
    #[error("your cart is empty")]
    EmptyCart,
}

/// Result of a successful checkout.
#[derive(Debug, Clone)]
pub struct CheckoutReceipt {
    /// Pre-filled messaging URL for the customer to open.
    pub deep_link_url: String,
    /// Grand total, formatted to two decimals (e.g., "$3.00").
    pub total: String,
    /// Number of units ordered.
    pub total_items: u32,
}

/// Check the checkout preconditions: location first, then a non-empty cart.
///
/// # Errors
///
/// Returns the first failing precondition.
pub fn validate(cart: &Cart) -> Result<(), CheckoutError> {
    if cart.delivery_location().is_empty() {
        return Err(CheckoutError::MissingDeliveryLocation);
    }
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    Ok(())
}

/// Render the order summary for the webhook embed (with glyphs).
///
/// One line per item as `<glyph> <name> x<quantity> - $<line total>`,
/// preceded by a delivery-location header and followed by the grand total.
#[must_use]
pub fn webhook_description(cart: &Cart) -> String {
    let items = cart
        .lines()
        .iter()
        .map(|line| {
            format!(
                "{} {} x{} - {}",
                line.glyph,
                line.name,
                line.quantity,
                line.line_total().display()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "📍 Delivery Location: {}\n\n{}\n\n💰 Total: {}",
        cart.delivery_location(),
        items,
        cart.total_price().display()
    )
}

/// Render the plain-text order message for the messaging deep-link.
///
/// Same content as the webhook summary but without glyphs, so it survives
/// messaging clients with poor emoji handling.
#[must_use]
pub fn deep_link_message(cart: &Cart) -> String {
    let items = cart
        .lines()
        .iter()
        .map(|line| {
            format!(
                "{} x{} - {}",
                line.name,
                line.quantity,
                line.line_total().display()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "*NEW ORDER*\n\n*Delivery Location:* {}\n\n{}\n\n*Total: {}*",
        cart.delivery_location(),
        items,
        cart.total_price().display()
    )
}

/// Build the messaging deep-link URL with the percent-encoded order text.
#[must_use]
pub fn deep_link_url(recipient: &str, cart: &Cart) -> String {
    let message = deep_link_message(cart);
    format!("https://wa.me/{recipient}?text={}", urlencoding::encode(&message))
}

/// Run a checkout over a cart snapshot.
///
/// Sequencing: the webhook notification is awaited first (one attempt,
/// failure logged and swallowed), then the deep-link is built
/// unconditionally. The caller is responsible for clearing the cart and
/// resetting any in-progress UI flag after a successful return.
///
/// # Errors
///
/// Returns a [`CheckoutError`] when validation fails; no notification is
/// sent and no state changes.
#[instrument(skip_all, fields(total_items = cart.total_items()))]
pub async fn place_order(
    cart: &Cart,
    webhook: Option<&WebhookClient>,
    recipient: &str,
) -> Result<CheckoutReceipt, CheckoutError> {
    validate(cart)?;

    let message = build_order_message(&webhook_description(cart), Utc::now());
    webhook::notify(webhook, &message).await;

    let receipt = CheckoutReceipt {
        deep_link_url: deep_link_url(recipient, cart),
        total: cart.total_price().display(),
        total_items: cart.total_items(),
    };

    info!(
        location = %cart.delivery_location(),
        total = %receipt.total,
        "Order placed"
    );

    Ok(receipt)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use campus_bites_core::{Price, ProductId};

    use crate::cart::CartItemInput;

    use super::*;

    fn populated_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add_item(CartItemInput {
            id: ProductId::new("1"),
            name: "Water Bottle".to_string(),
            unit_price: Price::from_cents(150),
            glyph: "🥤".to_string(),
        });
        cart.update_quantity(&ProductId::new("1"), 2);
        cart.set_delivery_location("Main Building");
        cart
    }

    #[test]
    fn test_validate_location_checked_before_empty_cart() {
        // Both preconditions fail; the location error wins.
        let cart = Cart::new();
        assert_eq!(
            validate(&cart),
            Err(CheckoutError::MissingDeliveryLocation)
        );
    }

    #[test]
    fn test_validate_empty_cart() {
        let mut cart = Cart::new();
        cart.set_delivery_location("Main Building");
        assert_eq!(validate(&cart), Err(CheckoutError::EmptyCart));
    }

    #[test]
    fn test_validate_ok() {
        assert!(validate(&populated_cart()).is_ok());
    }

    #[test]
    fn test_webhook_description_format() {
        let description = webhook_description(&populated_cart());

        assert!(description.starts_with("📍 Delivery Location: Main Building"));
        assert!(description.contains("🥤 Water Bottle x2 - $3.00"));
        assert!(description.ends_with("💰 Total: $3.00"));
    }

    #[test]
    fn test_deep_link_message_has_no_glyphs() {
        let message = deep_link_message(&populated_cart());

        assert!(message.contains("Water Bottle x2 - $3.00"));
        assert!(message.contains("*Total: $3.00*"));
        assert!(
            message.is_ascii(),
            "deep-link text must not carry emoji glyphs: {message}"
        );
    }

    #[test]
    fn test_deep_link_url_is_percent_encoded() {
        let url = deep_link_url("94721741038", &populated_cart());

        assert!(url.starts_with("https://wa.me/94721741038?text="));
        let query = url.split_once("?text=").unwrap().1;
        assert!(!query.contains(' '), "spaces must be encoded");
        assert!(query.contains("%0A"), "newlines encode to %0A");
        assert!(query.contains("%2ANEW%20ORDER%2A"), "got: {query}");
    }

    #[test]
    fn test_deep_link_round_trips_through_decoding() {
        let cart = populated_cart();
        let url = deep_link_url("94721741038", &cart);
        let query = url.split_once("?text=").unwrap().1;

        let decoded = urlencoding::decode(query).unwrap();
        assert_eq!(decoded, deep_link_message(&cart));
    }

    #[tokio::test]
    async fn test_place_order_fails_validation_without_location() {
        let mut cart = populated_cart();
        cart.set_delivery_location("");

        let result = place_order(&cart, None, "94721741038").await;
        assert_eq!(
            result.unwrap_err(),
            CheckoutError::MissingDeliveryLocation
        );
    }

    #[tokio::test]
    async fn test_place_order_succeeds_without_webhook() {
        // Notification is best-effort; an unconfigured webhook never blocks.
        let receipt = place_order(&populated_cart(), None, "94721741038")
            .await
            .unwrap();

        assert_eq!(receipt.total, "$3.00");
        assert_eq!(receipt.total_items, 2);
        assert!(receipt.deep_link_url.contains("wa.me/94721741038"));
    }
}
