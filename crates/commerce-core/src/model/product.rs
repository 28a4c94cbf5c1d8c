//! The product record owned by the catalog actor.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// A product in the catalog, carrying the live stock counter.
///
/// Inactive products are invisible to every lookup: callers cannot tell an
/// inactive product from one that never existed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub sku: String,
    /// Unit price, always > 0.
    pub price: Decimal,
    /// Available stock.
    pub quantity: u32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_stock_update: DateTime<Utc>,
}

impl Product {
    pub fn new(id: ProductId, params: ProductCreate) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: params.name,
            description: params.description,
            sku: params.sku,
            price: params.price,
            quantity: params.quantity,
            is_active: true,
            created_at: now,
            updated_at: now,
            last_stock_update: now,
        }
    }

    pub fn has_sufficient_stock(&self, requested: u32) -> bool {
        self.quantity >= requested
    }

    /// Removes `quantity` units from stock. The caller is responsible for
    /// checking sufficiency first; this saturates rather than wraps.
    pub fn reduce_stock(&mut self, quantity: u32) {
        self.quantity = self.quantity.saturating_sub(quantity);
        self.last_stock_update = Utc::now();
        self.updated_at = self.last_stock_update;
    }

    /// Adds `quantity` units to stock. A zero delta is a no-op; like
    /// `reduce_stock`, this saturates rather than wraps.
    pub fn increase_stock(&mut self, quantity: u32) {
        if quantity > 0 {
            self.quantity = self.quantity.saturating_add(quantity);
            self.last_stock_update = Utc::now();
            self.updated_at = self.last_stock_update;
        }
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }
}

/// Payload for creating a product.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub description: Option<String>,
    pub sku: String,
    pub price: Decimal,
    pub quantity: u32,
}

/// Payload for updating a product. `None` fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub price: Option<Decimal>,
    pub quantity: Option<u32>,
}
