//! Checkout route handler.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;

use crate::checkout;
use crate::error::Result;
use crate::state::AppState;

/// Checkout response: the deep-link for the customer to open.
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub deep_link_url: String,
    pub total: String,
    pub total_items: u32,
}

/// Place the order.
///
/// Validates the cart, sends the best-effort webhook notification, and
/// returns the messaging deep-link. The cart is cleared only after the
/// order sequence has run; a validation failure leaves it untouched.
#[instrument(skip(state))]
pub async fn place(State(state): State<AppState>) -> Result<Json<CheckoutResponse>> {
    let snapshot = state.cart().snapshot();

    let receipt = checkout::place_order(
        &snapshot,
        state.webhook(),
        &state.config().order_recipient,
    )
    .await?;

    state.cart().clear();

    Ok(Json(CheckoutResponse {
        deep_link_url: receipt.deep_link_url,
        total: receipt.total,
        total_items: receipt.total_items,
    }))
}
