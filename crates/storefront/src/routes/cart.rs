//! Cart route handlers.
//!
//! Every mutation responds with the refreshed cart view so clients can
//! re-render without a second round-trip.

use axum::{Json, extract::State};
use campus_bites_core::ProductId;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::cart::{Cart, CartItemInput, CartLine};
use crate::catalog;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Cart line display data for clients.
#[derive(Debug, Clone, Serialize)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub glyph: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_price: String,
}

impl From<&CartLine> for CartItemView {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.id.to_string(),
            name: line.name.clone(),
            glyph: line.glyph.clone(),
            quantity: line.quantity,
            unit_price: line.unit_price.display(),
            line_price: line.line_total().display(),
        }
    }
}

/// Cart display data for clients.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub delivery_location: String,
    pub total_items: u32,
    pub total_price: String,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.lines().iter().map(CartItemView::from).collect(),
            delivery_location: cart.delivery_location().to_owned(),
            total_items: cart.total_items(),
            total_price: cart.total_price().display(),
        }
    }
}

/// Add to cart request body.
#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    pub product_id: ProductId,
}

/// Update cart request body.
#[derive(Debug, Deserialize)]
pub struct UpdateCartRequest {
    pub product_id: ProductId,
    /// Absolute quantity; 0 removes the line.
    pub quantity: u32,
}

/// Remove from cart request body.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartRequest {
    pub product_id: ProductId,
}

/// Delivery location request body.
#[derive(Debug, Deserialize)]
pub struct SetLocationRequest {
    pub location: String,
}

/// Cart count badge response.
#[derive(Debug, Serialize)]
pub struct CartCountResponse {
    pub count: u32,
}

fn view(state: &AppState) -> CartView {
    CartView::from(&state.cart().snapshot())
}

/// Display the cart.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Json<CartView> {
    Json(view(&state))
}

/// Add one unit of a product to the cart.
///
/// Adding an already-carted product increments its quantity instead of
/// duplicating the line.
#[instrument(skip(state), fields(product_id = %request.product_id))]
pub async fn add(
    State(state): State<AppState>,
    Json(request): Json<AddToCartRequest>,
) -> Result<Json<CartView>> {
    let product = catalog::find_product(&request.product_id)
        .ok_or_else(|| AppError::UnknownProduct(request.product_id.to_string()))?;

    state.cart().add_item(CartItemInput::from(&product));

    Ok(Json(view(&state)))
}

/// Set a cart line's quantity (absolute; 0 removes the line).
#[instrument(skip(state), fields(product_id = %request.product_id, quantity = request.quantity))]
pub async fn update(
    State(state): State<AppState>,
    Json(request): Json<UpdateCartRequest>,
) -> Json<CartView> {
    state
        .cart()
        .update_quantity(&request.product_id, request.quantity);

    Json(view(&state))
}

/// Remove a line from the cart. No-op when the line is absent.
#[instrument(skip(state), fields(product_id = %request.product_id))]
pub async fn remove(
    State(state): State<AppState>,
    Json(request): Json<RemoveFromCartRequest>,
) -> Json<CartView> {
    state.cart().remove_item(&request.product_id);

    Json(view(&state))
}

/// Select the delivery location.
///
/// Any string is accepted here; checkout validates that one was chosen.
#[instrument(skip(state, request))]
pub async fn set_location(
    State(state): State<AppState>,
    Json(request): Json<SetLocationRequest>,
) -> Json<CartView> {
    state.cart().set_delivery_location(request.location);

    Json(view(&state))
}

/// Get the cart count badge.
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> Json<CartCountResponse> {
    Json(CartCountResponse {
        count: state.cart().total_items(),
    })
}
