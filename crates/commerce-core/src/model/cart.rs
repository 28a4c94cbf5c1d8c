//! The cart line record owned by the cart actor.

use super::{Product, ProductId, UserId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for cart lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartLineId(pub u32);

impl From<u32> for CartLineId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CartLineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line_{}", self.0)
    }
}

/// One (user, product) entry in a shopping cart.
///
/// Unit price, name and SKU are **snapshots** taken when the line was
/// created; later catalog changes do not flow back into the line. Removal
/// is a soft delete: the record stays around with `is_active = false` for
/// audit, and only active lines are visible through normal reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    pub id: CartLineId,
    pub user_id: UserId,
    pub product_id: ProductId,
    /// Always > 0 while the line is active.
    pub quantity: u32,
    /// Unit price at add time.
    pub unit_price: Decimal,
    pub product_name: String,
    pub product_sku: String,
    /// `unit_price * quantity`, recomputed on every quantity change.
    pub total: Decimal,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates an active line snapshotting price, name and SKU from the
    /// catalog's current view of the product.
    pub fn new(id: CartLineId, user_id: UserId, product: &Product, quantity: u32) -> Self {
        let now = Utc::now();
        let mut line = Self {
            id,
            user_id,
            product_id: product.id,
            quantity,
            unit_price: product.price,
            product_name: product.name.clone(),
            product_sku: product.sku.clone(),
            total: Decimal::ZERO,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        line.recompute_total();
        line
    }

    /// Sets a new quantity and recomputes the total. Callers validate that
    /// `quantity > 0` before getting here.
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
        self.recompute_total();
        self.updated_at = Utc::now();
    }

    fn recompute_total(&mut self) {
        self.total = self.unit_price * Decimal::from(self.quantity);
    }

    /// Soft delete. Idempotent.
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }

    pub fn belongs_to(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }
}
