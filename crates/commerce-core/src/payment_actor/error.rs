//! Error types for the payment actor.

use crate::model::{OrderId, PaymentId};
use actor_core::ActorError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during payment operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PaymentError {
    /// The amount is zero or negative.
    #[error("invalid payment amount: {0}")]
    InvalidAmount(Decimal),

    /// The amount exceeds the configured ceiling.
    #[error("payment amount {amount} exceeds the limit of {limit}")]
    AmountExceedsLimit { amount: Decimal, limit: Decimal },

    /// The order already has a payment, in any status.
    #[error("a payment already exists for {0}")]
    DuplicatePayment(OrderId),

    /// No payment with that id.
    #[error("payment not found: {0}")]
    NotFound(PaymentId),

    /// An error occurred while communicating with the actor system.
    #[error("actor communication error: {0}")]
    ActorCommunication(String),
}

impl PaymentError {
    pub(crate) fn from_actor(e: ActorError) -> Self {
        match e.downcast::<PaymentError>() {
            Ok(err) => err,
            Err(other) => PaymentError::ActorCommunication(other.to_string()),
        }
    }
}
