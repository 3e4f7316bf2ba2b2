//! Cart aggregator.
//!
//! A [`Cart`] owns the line items and the selected delivery location.
//! Totals are derived from the lines on every read, never cached, so they
//! cannot drift from the line contents. All operations are total functions
//! over the current state.

use std::sync::{Arc, PoisonError, RwLock};

use campus_bites_core::{Price, ProductId};
use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// One product entry in the cart with its own quantity.
///
/// Invariant: `quantity >= 1` while the line exists. A line whose quantity
/// would reach 0 is removed, never retained at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: ProductId,
    pub name: String,
    pub unit_price: Price,
    pub quantity: u32,
    pub glyph: String,
}

impl CartLine {
    /// Total for this line (`unit_price × quantity`).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price.line_total(self.quantity)
    }
}

/// A quantity-less item to add to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItemInput {
    pub id: ProductId,
    pub name: String,
    pub unit_price: Price,
    pub glyph: String,
}

impl From<&Product> for CartItemInput {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.to_owned(),
            unit_price: product.price,
            glyph: product.glyph.to_owned(),
        }
    }
}

/// The shopping cart: line items plus a selected delivery location.
///
/// Lines keep insertion order for display; order is irrelevant for totals.
/// Line ids are unique, maintained by [`Cart::add_item`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
    delivery_location: String,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The line items, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The selected delivery location ("" when none selected).
    #[must_use]
    pub fn delivery_location(&self) -> &str {
        &self.delivery_location
    }

    /// Whether the cart has no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one unit of an item.
    ///
    /// If a line with the same id exists its quantity is incremented by 1;
    /// otherwise a new line is inserted with quantity 1. Repeated calls
    /// accumulate quantity rather than duplicate lines.
    pub fn add_item(&mut self, item: CartItemInput) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == item.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine {
                id: item.id,
                name: item.name,
                unit_price: item.unit_price,
                quantity: 1,
                glyph: item.glyph,
            });
        }
    }

    /// Delete the line with the given id. No-op if absent.
    pub fn remove_item(&mut self, id: &ProductId) {
        self.lines.retain(|l| &l.id != id);
    }

    /// Set the quantity of a line to exactly `quantity` (absolute, not delta).
    ///
    /// A quantity of 0 is equivalent to [`Cart::remove_item`]. No-op if the
    /// line is absent.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove_item(id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| &l.id == id) {
            line.quantity = quantity;
        }
    }

    /// Replace the delivery location unconditionally.
    ///
    /// Any string is accepted here; validation is deferred to checkout.
    pub fn set_delivery_location(&mut self, location: impl Into<String>) {
        self.delivery_location = location.into();
    }

    /// Empty the lines and reset the location.
    ///
    /// Called exactly once per successful checkout.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.delivery_location.clear();
    }

    /// Total number of units across all lines, recomputed on every access.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Total price across all lines, recomputed on every access.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }
}

/// Shared handle to the cart, held in application state.
///
/// Cheaply cloneable; the lock is held only across the synchronous
/// operation, never across an await point.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    inner: Arc<RwLock<Cart>>,
}

impl CartStore {
    /// Create a store holding an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An owned snapshot of the current cart.
    #[must_use]
    pub fn snapshot(&self) -> Cart {
        self.read(Clone::clone)
    }

    /// Add one unit of an item.
    pub fn add_item(&self, item: CartItemInput) {
        self.write(|cart| cart.add_item(item));
    }

    /// Delete the line with the given id.
    pub fn remove_item(&self, id: &ProductId) {
        self.write(|cart| cart.remove_item(id));
    }

    /// Set a line's quantity (0 removes the line).
    pub fn update_quantity(&self, id: &ProductId, quantity: u32) {
        self.write(|cart| cart.update_quantity(id, quantity));
    }

    /// Replace the delivery location.
    pub fn set_delivery_location(&self, location: impl Into<String>) {
        let location = location.into();
        self.write(|cart| cart.set_delivery_location(location));
    }

    /// Empty the cart.
    pub fn clear(&self) {
        self.write(Cart::clear);
    }

    /// Total number of units in the cart.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.read(Cart::total_items)
    }

    fn read<T>(&self, f: impl FnOnce(&Cart) -> T) -> T {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    fn write<T>(&self, f: impl FnOnce(&mut Cart) -> T) -> T {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}
