//! Settlement gateways.
//!
//! Settlement is the one external effect in the payment flow, so it sits
//! behind a trait. Production uses [`RandomGateway`]; tests use
//! [`FixedGateway`] to pin the outcome.

use rand::Rng;
use rust_decimal::Decimal;

/// Result of a settlement attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettlementOutcome {
    Approved,
    Declined,
}

/// Decides whether a settlement attempt succeeds.
pub trait SettlementGateway: Send + Sync {
    fn settle(&self, amount: Decimal) -> SettlementOutcome;
}

/// Approves each attempt with a fixed probability, independent of amount.
pub struct RandomGateway {
    success_rate: f64,
}

impl RandomGateway {
    pub fn new(success_rate: f64) -> Self {
        Self { success_rate }
    }
}

impl SettlementGateway for RandomGateway {
    fn settle(&self, _amount: Decimal) -> SettlementOutcome {
        if rand::rng().random::<f64>() < self.success_rate {
            SettlementOutcome::Approved
        } else {
            SettlementOutcome::Declined
        }
    }
}

/// Always returns the configured outcome.
pub struct FixedGateway(pub SettlementOutcome);

impl SettlementGateway for FixedGateway {
    fn settle(&self, _amount: Decimal) -> SettlementOutcome {
        self.0
    }
}
