//! Error types for the catalog actor.

use crate::model::ProductId;
use actor_core::ActorError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// No active product with that id. Inactive products are reported the
    /// same way as absent ones.
    #[error("product not found: {0}")]
    NotFound(ProductId),

    /// A stock reduction would make the quantity negative.
    #[error("insufficient stock for {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },

    /// The requested quantity is zero.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// The price is not strictly positive.
    #[error("invalid price: {0}")]
    InvalidPrice(Decimal),

    /// An error occurred while communicating with the actor system.
    #[error("actor communication error: {0}")]
    ActorCommunication(String),
}

impl CatalogError {
    /// Maps transport errors back into this domain: typed catalog errors
    /// pass through unchanged, anything else becomes a communication error.
    pub(crate) fn from_actor(e: ActorError) -> Self {
        match e.downcast::<CatalogError>() {
            Ok(err) => err,
            Err(other) => CatalogError::ActorCommunication(other.to_string()),
        }
    }
}
