//! Static product catalog and delivery locations.
//!
//! Catalog data is compile-time configuration, not runtime-discovered.
//! Adding a menu item or a delivery building is a code change.

use campus_bites_core::{Price, ProductId};
use serde::Serialize;

/// A product available for ordering.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: &'static str,
    pub price: Price,
    pub description: &'static str,
    /// Display glyph shown next to the item (menu cards, webhook lines).
    pub glyph: &'static str,
}

/// Campus buildings that accept delivery.
pub const DELIVERY_LOCATIONS: &[&str] = &[
    "Engineering Faculty",
    "Main Building",
    "New Building",
    "Juice Bar",
    "Willium Anglish",
];

/// All products on the menu, in display order.
#[must_use]
pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("1"),
            name: "Water Bottle",
            price: Price::from_cents(150),
            description: "500ml Fresh Spring Water",
            glyph: "🥤",
        },
        Product {
            id: ProductId::new("2"),
            name: "Snacks Pack",
            price: Price::from_cents(250),
            description: "Assorted chips & cookies",
            glyph: "🍿",
        },
    ]
}

/// Look up a product by id.
#[must_use]
pub fn find_product(id: &ProductId) -> Option<Product> {
    products().into_iter().find(|p| &p.id == id)
}

/// Whether a delivery location is one of the known campus buildings.
#[must_use]
pub fn is_known_location(location: &str) -> bool {
    DELIVERY_LOCATIONS.contains(&location)
}
