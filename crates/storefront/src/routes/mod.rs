//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//!
//! # Catalog
//! GET  /catalog                - Menu products and delivery locations
//!
//! # Cart
//! GET  /cart                   - Cart snapshot with derived totals
//! POST /cart/add               - Add one unit of a product
//! POST /cart/update            - Set a line's quantity (0 removes)
//! POST /cart/remove            - Remove a line
//! POST /cart/location          - Select the delivery location
//! GET  /cart/count             - Cart item count badge
//!
//! # Checkout
//! POST /checkout               - Place the order (notify + deep-link)
//!
//! # Reviews
//! GET  /reviews                - Review board, newest first, with stats
//! POST /reviews                - Submit a review
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod reviews;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/location", post(cart::set_location))
        .route("/count", get(cart::count))
}

/// Create the review routes router.
pub fn review_routes() -> Router<AppState> {
    Router::new().route("/", get(reviews::index).post(reviews::create))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Catalog
        .route("/catalog", get(catalog::index))
        // Cart routes
        .nest("/cart", cart_routes())
        // Checkout
        .route("/checkout", post(checkout::place))
        // Review board
        .nest("/reviews", review_routes())
}
