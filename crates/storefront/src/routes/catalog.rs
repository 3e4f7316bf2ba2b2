//! Catalog route handlers.

use axum::Json;
use serde::Serialize;
use tracing::instrument;

use crate::catalog::{self, Product};

/// Product display data for clients.
#[derive(Debug, Clone, Serialize)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub price: String,
    pub description: String,
    pub glyph: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.to_owned(),
            price: product.price.display(),
            description: product.description.to_owned(),
            glyph: product.glyph.to_owned(),
        }
    }
}

/// Catalog response: the menu plus delivery locations.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogResponse {
    pub products: Vec<ProductView>,
    pub delivery_locations: Vec<String>,
}

/// Display the menu and the delivery-location list.
#[instrument]
pub async fn index() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        products: catalog::products().iter().map(ProductView::from).collect(),
        delivery_locations: catalog::DELIVERY_LOCATIONS
            .iter()
            .map(ToString::to_string)
            .collect(),
    })
}
