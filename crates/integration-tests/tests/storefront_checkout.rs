//! Integration tests for checkout formatting and sequencing.
//!
//! These tests verify the two order renditions (webhook embed and
//! messaging deep-link) agree on content, and that validation failures
//! leave the cart untouched.

use campus_bites_core::{Price, ProductId};
use campus_bites_storefront::cart::{Cart, CartItemInput};
use campus_bites_storefront::checkout::{
    self, CheckoutError, deep_link_message, deep_link_url, webhook_description,
};
use campus_bites_storefront::services::build_order_message;

fn water_x2_cart() -> Cart {
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

// =============================================================================
// Validation
// =============================================================================

#[test]
fn test_missing_location_error_comes_first() {
    let cart = Cart::new();
    assert_eq!(
        checkout::validate(&cart),
        Err(CheckoutError::MissingDeliveryLocation),
        "empty cart AND missing location: location error wins"
    );
}

#[test]
fn test_empty_cart_error() {
    let mut cart = Cart::new();
    cart.set_delivery_location("Main Building");
    assert_eq!(checkout::validate(&cart), Err(CheckoutError::EmptyCart));
}

#[tokio::test]
async fn test_failed_checkout_does_not_clear_cart() {
    let mut cart = water_x2_cart();
    cart.set_delivery_location("");

    let result = checkout::place_order(&cart, None, "94721741038").await;

    assert!(result.is_err());
    assert_eq!(cart.total_items(), 2, "cart untouched after failure");
}

// =============================================================================
// Formatting
// =============================================================================

#[test]
fn test_both_renditions_show_the_same_total() {
    let cart = water_x2_cart();

    assert!(webhook_description(&cart).contains("$3.00"));
    assert!(deep_link_message(&cart).contains("$3.00"));
}

#[test]
fn test_webhook_rendition_carries_glyphs() {
    let description = webhook_description(&water_x2_cart());

    assert!(description.contains("🥤 Water Bottle x2 - $3.00"));
    assert!(description.contains("📍 Delivery Location: Main Building"));
    assert!(description.contains("💰 Total: $3.00"));
}

#[test]
fn test_deep_link_rendition_is_glyph_free() {
    let message = deep_link_message(&water_x2_cart());

    assert!(message.contains("Water Bottle x2 - $3.00"));
    assert!(message.is_ascii(), "no emoji in the deep-link text");
}

#[test]
fn test_deep_link_url_encoding() {
    let url = deep_link_url("94721741038", &water_x2_cart());

    assert!(url.starts_with("https://wa.me/94721741038?text="));

    let (_, query) = url.split_once("?text=").expect("text parameter");
    assert!(!query.contains(' '));
    assert!(query.contains("Main%20Building"));
}

#[test]
fn test_order_message_wraps_description() {
    let cart = water_x2_cart();
    let message = build_order_message(
        &webhook_description(&cart),
        "2026-01-05T12:30:00Z".parse().expect("valid timestamp"),
    );

    let json = serde_json::to_value(&message).expect("serializes");
    assert_eq!(json["content"], "🛒 **New Order Received!**");

    let description = json["embeds"][0]["description"]
        .as_str()
        .expect("embed description");
    assert!(description.contains("x2 - $3.00"));
    assert!(description.ends_with("💰 Total: $3.00"));
}

// =============================================================================
// Sequencing
// =============================================================================

#[tokio::test]
async fn test_checkout_succeeds_without_configured_webhook() {
    let cart = water_x2_cart();

    let receipt = checkout::place_order(&cart, None, "94721741038")
        .await
        .expect("checkout succeeds");

    assert_eq!(receipt.total, "$3.00");
    assert_eq!(receipt.total_items, 2);
    assert!(receipt.deep_link_url.contains("wa.me/94721741038"));
}
