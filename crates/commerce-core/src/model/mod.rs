//! Domain models: products, cart lines, payments, and their ids.

pub mod cart;
pub mod payment;
pub mod product;

pub use cart::{CartLine, CartLineId};
pub use payment::{Payment, PaymentId, PaymentStats, PaymentStatus};
pub use product::{Product, ProductCreate, ProductId, ProductUpdate};

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier of a user. Users are owned by an external identity provider;
/// the commerce core only ever scopes data by this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub u64);

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user_{}", self.0)
    }
}

/// Identifier of an order. Orders are created by an external caller; the
/// payment ledger only enforces the one-payment-per-order rule on this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u64);

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}
