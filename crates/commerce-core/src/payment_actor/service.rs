//! State and command handling for the payment actor.

use super::command::{PaymentCommand, PaymentReply, SettleRequest};
use super::error::PaymentError;
use super::gateway::{SettlementGateway, SettlementOutcome};
use crate::config::CommerceConfig;
use crate::model::{Payment, PaymentId, PaymentStats, PaymentStatus};
use actor_core::Service;
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

const DECLINE_REASON: &str = "payment processing error";
const OVERRIDE_REASON: &str = "status manually overridden to failed";

/// The payment ledger's state.
///
/// Validation, the duplicate scan and the settlement attempt all happen
/// inside a single `handle` call, so two settle requests for the same
/// order cannot interleave and both pass the duplicate check.
pub struct PaymentService {
    payments: HashMap<PaymentId, Payment>,
    next_id: u32,
    config: CommerceConfig,
    gateway: Arc<dyn SettlementGateway>,
}

impl PaymentService {
    pub fn new(config: CommerceConfig, gateway: Arc<dyn SettlementGateway>) -> Self {
        Self {
            payments: HashMap::new(),
            next_id: 1,
            config,
            gateway,
        }
    }

    fn alloc_id(&mut self) -> PaymentId {
        let id = PaymentId::from(self.next_id);
        self.next_id += 1;
        id
    }

    fn transaction_id() -> String {
        let id = Uuid::new_v4().simple().to_string();
        format!("TXN-{}", id[..8].to_uppercase())
    }

    fn settle(&mut self, request: SettleRequest) -> Result<Payment, PaymentError> {
        if request.amount <= Decimal::ZERO {
            return Err(PaymentError::InvalidAmount(request.amount));
        }
        if request.amount > self.config.max_payment_amount {
            return Err(PaymentError::AmountExceedsLimit {
                amount: request.amount,
                limit: self.config.max_payment_amount,
            });
        }
        // One payment per order, regardless of how the first one ended.
        if self
            .payments
            .values()
            .any(|p| p.order_id == request.order_id)
        {
            return Err(PaymentError::DuplicatePayment(request.order_id));
        }

        let id = self.alloc_id();
        let now = Utc::now();
        let mut payment = Payment {
            id,
            order_id: request.order_id,
            user_id: request.user_id,
            amount: request.amount,
            status: PaymentStatus::Pending,
            method: request.method,
            transaction_id: Self::transaction_id(),
            currency: request
                .currency
                .unwrap_or_else(|| self.config.default_currency.clone()),
            description: request.description,
            created_at: now,
            updated_at: now,
            processed_at: None,
            failure_reason: None,
        };

        match self.gateway.settle(payment.amount) {
            SettlementOutcome::Approved => payment.mark_completed(),
            SettlementOutcome::Declined => payment.mark_failed(DECLINE_REASON),
        }
        info!(
            payment_id = %id,
            order_id = %payment.order_id,
            status = %payment.status,
            amount = %payment.amount,
            "Payment settled"
        );
        self.payments.insert(id, payment.clone());
        Ok(payment)
    }

    fn get(&self, id: PaymentId) -> Result<Payment, PaymentError> {
        self.payments
            .get(&id)
            .cloned()
            .ok_or(PaymentError::NotFound(id))
    }

    fn update_status(
        &mut self,
        id: PaymentId,
        status: PaymentStatus,
    ) -> Result<Payment, PaymentError> {
        let payment = self
            .payments
            .get_mut(&id)
            .ok_or(PaymentError::NotFound(id))?;
        match status {
            PaymentStatus::Completed => payment.mark_completed(),
            PaymentStatus::Failed => payment.mark_failed(OVERRIDE_REASON),
            PaymentStatus::Pending => {
                payment.status = PaymentStatus::Pending;
                payment.updated_at = Utc::now();
            }
        }
        info!(payment_id = %id, status = %status, "Payment status overridden");
        Ok(payment.clone())
    }

    fn list_by<F>(&self, keep: F) -> Vec<Payment>
    where
        F: Fn(&Payment) -> bool,
    {
        let mut payments: Vec<Payment> = self.payments.values().filter(|p| keep(p)).cloned().collect();
        payments.sort_by_key(|p| p.id.0);
        payments
    }

    fn list_pending(&self) -> Vec<Payment> {
        let mut payments: Vec<Payment> = self
            .payments
            .values()
            .filter(|p| p.is_pending())
            .cloned()
            .collect();
        payments.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.0.cmp(&b.id.0)));
        payments
    }

    fn statistics(&self) -> PaymentStats {
        self.payments
            .values()
            .fold(PaymentStats::default(), |mut stats, p| {
                stats.total += 1;
                match p.status {
                    PaymentStatus::Pending => stats.pending += 1,
                    PaymentStatus::Completed => {
                        stats.completed += 1;
                        stats.completed_amount += p.amount;
                    }
                    PaymentStatus::Failed => stats.failed += 1,
                }
                stats
            })
    }
}

#[async_trait]
impl Service for PaymentService {
    type Command = PaymentCommand;
    type Reply = PaymentReply;
    type Context = ();
    type Error = PaymentError;

    async fn handle(
        &mut self,
        command: PaymentCommand,
        _ctx: &(),
    ) -> Result<PaymentReply, PaymentError> {
        match command {
            PaymentCommand::Settle(request) => self.settle(request).map(PaymentReply::Payment),
            PaymentCommand::Get { id } => self.get(id).map(PaymentReply::Payment),
            PaymentCommand::UpdateStatus { id, status } => {
                self.update_status(id, status).map(PaymentReply::Payment)
            }
            PaymentCommand::ListByUser { user_id } => {
                Ok(PaymentReply::Payments(self.list_by(|p| p.user_id == user_id)))
            }
            PaymentCommand::ListByStatus { status } => {
                Ok(PaymentReply::Payments(self.list_by(|p| p.status == status)))
            }
            PaymentCommand::ListByOrder { order_id } => Ok(PaymentReply::Payments(
                self.list_by(|p| p.order_id == order_id),
            )),
            PaymentCommand::ListPending => Ok(PaymentReply::Payments(self.list_pending())),
            PaymentCommand::Statistics => Ok(PaymentReply::Stats(self.statistics())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderId, UserId};

    fn service(outcome: SettlementOutcome) -> PaymentService {
        PaymentService::new(
            CommerceConfig::default(),
            Arc::new(super::super::gateway::FixedGateway(outcome)),
        )
    }

    fn request(order: u64, amount: Decimal) -> SettleRequest {
        SettleRequest {
            order_id: OrderId(order),
            user_id: UserId(1),
            amount,
            method: "card".to_string(),
            description: None,
            currency: None,
        }
    }

    #[test]
    fn approved_settlement_completes_with_timestamps() {
        let mut ledger = service(SettlementOutcome::Approved);
        let payment = ledger.settle(request(1, Decimal::new(50_00, 2))).unwrap();
        assert!(payment.is_completed());
        assert!(payment.processed_at.is_some());
        assert!(payment.failure_reason.is_none());
        assert_eq!(payment.currency, "PEN");
    }

    #[test]
    fn declined_settlement_records_the_reason() {
        let mut ledger = service(SettlementOutcome::Declined);
        let payment = ledger.settle(request(1, Decimal::new(50_00, 2))).unwrap();
        assert!(payment.is_failed());
        assert_eq!(payment.failure_reason.as_deref(), Some(DECLINE_REASON));
    }

    #[test]
    fn failed_payment_still_blocks_a_retry() {
        let mut ledger = service(SettlementOutcome::Declined);
        ledger.settle(request(7, Decimal::new(10_00, 2))).unwrap();
        let err = ledger.settle(request(7, Decimal::new(10_00, 2))).unwrap_err();
        assert_eq!(err, PaymentError::DuplicatePayment(OrderId(7)));
    }

    #[test]
    fn invalid_amounts_persist_nothing() {
        let mut ledger = service(SettlementOutcome::Approved);
        assert_eq!(
            ledger.settle(request(1, Decimal::ZERO)).unwrap_err(),
            PaymentError::InvalidAmount(Decimal::ZERO)
        );
        let over = Decimal::new(100_000_01, 2);
        assert_eq!(
            ledger.settle(request(1, over)).unwrap_err(),
            PaymentError::AmountExceedsLimit {
                amount: over,
                limit: Decimal::new(100_000_00, 2),
            }
        );
        assert_eq!(ledger.statistics().total, 0);
        // The order is still payable after the rejected attempts.
        assert!(ledger.settle(request(1, Decimal::new(1_00, 2))).is_ok());
    }

    #[test]
    fn transaction_ids_are_prefixed_and_short() {
        let id = PaymentService::transaction_id();
        assert!(id.starts_with("TXN-"));
        assert_eq!(id.len(), 12);
        assert!(id[4..].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
    }

    #[test]
    fn admin_override_can_fail_a_completed_payment() {
        let mut ledger = service(SettlementOutcome::Approved);
        let payment = ledger.settle(request(1, Decimal::new(50_00, 2))).unwrap();
        assert!(payment.is_completed());
        let overridden = ledger
            .update_status(payment.id, PaymentStatus::Failed)
            .unwrap();
        assert!(overridden.is_failed());
        assert_eq!(overridden.failure_reason.as_deref(), Some(OVERRIDE_REASON));
    }

    #[test]
    fn statistics_count_by_status_and_sum_completed() {
        let mut ledger = service(SettlementOutcome::Approved);
        ledger.settle(request(1, Decimal::new(10_00, 2))).unwrap();
        ledger.settle(request(2, Decimal::new(20_00, 2))).unwrap();
        let failed = ledger.settle(request(3, Decimal::new(30_00, 2))).unwrap();
        ledger
            .update_status(failed.id, PaymentStatus::Failed)
            .unwrap();
        let stats = ledger.statistics();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.pending, 0);
        assert_eq!(stats.completed_amount, Decimal::new(30_00, 2));
    }

    #[test]
    fn pending_listing_is_oldest_first() {
        let mut ledger = service(SettlementOutcome::Approved);
        let a = ledger.settle(request(1, Decimal::new(10_00, 2))).unwrap();
        let b = ledger.settle(request(2, Decimal::new(20_00, 2))).unwrap();
        ledger.update_status(a.id, PaymentStatus::Pending).unwrap();
        ledger.update_status(b.id, PaymentStatus::Pending).unwrap();
        let pending = ledger.list_pending();
        assert_eq!(
            pending.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![a.id, b.id]
        );
    }
}
