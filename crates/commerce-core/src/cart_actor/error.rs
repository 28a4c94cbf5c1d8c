//! Error types for the cart actor.

use crate::catalog_actor::CatalogError;
use crate::model::{CartLineId, ProductId, UserId};
use actor_core::ActorError;
use thiserror::Error;

/// Errors that can occur during cart operations.
///
/// Not-found, ownership and inactive-line failures are distinct variants on
/// purpose: a transport layer may collapse them to one status code, but
/// callers inside the process can always tell them apart.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The product does not exist or is inactive.
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    /// The requested quantity (including what is already in the cart)
    /// exceeds available stock.
    #[error("insufficient stock for {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },

    /// The requested quantity is zero.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// No cart line with that id.
    #[error("cart line not found: {0}")]
    LineNotFound(CartLineId),

    /// The line exists but belongs to a different user.
    #[error("cart line {line_id} does not belong to {user_id}")]
    NotOwned {
        line_id: CartLineId,
        user_id: UserId,
    },

    /// The line has been soft-deleted.
    #[error("cart line is inactive: {0}")]
    InactiveLine(CartLineId),

    /// An error occurred while communicating with the actor system.
    #[error("actor communication error: {0}")]
    ActorCommunication(String),
}

impl From<CatalogError> for CartError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::NotFound(id) => CartError::ProductNotFound(id),
            CatalogError::InsufficientStock {
                product_id,
                requested,
                available,
            } => CartError::InsufficientStock {
                product_id,
                requested,
                available,
            },
            CatalogError::InvalidQuantity(q) => CartError::InvalidQuantity(q),
            other => CartError::ActorCommunication(other.to_string()),
        }
    }
}

impl CartError {
    pub(crate) fn from_actor(e: ActorError) -> Self {
        match e.downcast::<CartError>() {
            Ok(err) => err,
            Err(other) => CartError::ActorCommunication(other.to_string()),
        }
    }
}
