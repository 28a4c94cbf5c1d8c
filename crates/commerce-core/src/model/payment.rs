//! The payment record and settlement state machine.

use super::{OrderId, UserId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for payments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaymentId(pub u32);

impl From<u32> for PaymentId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for PaymentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "payment_{}", self.0)
    }
}

/// Settlement status.
///
/// The normal flow is one-directional: `Pending` moves to `Completed` or
/// `Failed` exactly once, during the same settle call that created the
/// record. The administrative status-update path deliberately bypasses
/// these edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
}

impl Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Pending => write!(f, "pending"),
            PaymentStatus::Completed => write!(f, "completed"),
            PaymentStatus::Failed => write!(f, "failed"),
        }
    }
}

/// One payment, tied 1:1 to an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    pub order_id: OrderId,
    pub user_id: UserId,
    /// Always > 0 and within the configured ceiling.
    pub amount: Decimal,
    pub status: PaymentStatus,
    pub method: String,
    /// System-generated, `TXN-`-prefixed.
    pub transaction_id: String,
    /// Three-letter currency code.
    pub currency: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Set when the settlement attempt ran, success or failure.
    pub processed_at: Option<DateTime<Utc>>,
    /// Set only on failure.
    pub failure_reason: Option<String>,
}

impl Payment {
    pub fn mark_completed(&mut self) {
        let now = Utc::now();
        self.status = PaymentStatus::Completed;
        self.processed_at = Some(now);
        self.updated_at = now;
    }

    pub fn mark_failed(&mut self, reason: impl Into<String>) {
        let now = Utc::now();
        self.status = PaymentStatus::Failed;
        self.failure_reason = Some(reason.into());
        self.processed_at = Some(now);
        self.updated_at = now;
    }

    pub fn is_pending(&self) -> bool {
        self.status == PaymentStatus::Pending
    }

    pub fn is_completed(&self) -> bool {
        self.status == PaymentStatus::Completed
    }

    pub fn is_failed(&self) -> bool {
        self.status == PaymentStatus::Failed
    }
}

/// Aggregate counts over the ledger, plus the sum of completed amounts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentStats {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
    pub failed: usize,
    pub completed_amount: Decimal,
}
