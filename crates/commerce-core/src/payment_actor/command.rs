//! Commands and replies for the payment actor.

use crate::model::{OrderId, Payment, PaymentId, PaymentStats, PaymentStatus, UserId};
use rust_decimal::Decimal;

/// Everything needed to attempt a settlement. `currency` falls back to the
/// configured default when absent.
#[derive(Debug, Clone)]
pub struct SettleRequest {
    pub order_id: OrderId,
    pub user_id: UserId,
    pub amount: Decimal,
    pub method: String,
    pub description: Option<String>,
    pub currency: Option<String>,
}

/// Operations the payment actor accepts.
#[derive(Debug)]
pub enum PaymentCommand {
    /// Validates, records and immediately settles one payment for an order.
    Settle(SettleRequest),
    /// Fetches one payment by id.
    Get { id: PaymentId },
    /// Administrative status override. Bypasses the settlement state
    /// machine.
    UpdateStatus {
        id: PaymentId,
        status: PaymentStatus,
    },
    /// All payments of a user, any status.
    ListByUser { user_id: UserId },
    /// All payments in a status.
    ListByStatus { status: PaymentStatus },
    /// All payments for an order.
    ListByOrder { order_id: OrderId },
    /// Pending payments, oldest first.
    ListPending,
    /// Aggregate counts and completed amount.
    Statistics,
}

/// Replies produced by the payment actor.
#[derive(Debug)]
pub enum PaymentReply {
    Payment(Payment),
    Payments(Vec<Payment>),
    Stats(PaymentStats),
}
