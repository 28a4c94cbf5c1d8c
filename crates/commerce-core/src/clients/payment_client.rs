//! High-level API for the payment actor.

use crate::model::{OrderId, Payment, PaymentId, PaymentStats, PaymentStatus, UserId};
use crate::payment_actor::{
    PaymentCommand, PaymentError, PaymentReply, PaymentService, SettleRequest,
};
use actor_core::ServiceClient;
use tracing::{debug, instrument};

/// Client for interacting with the payment actor.
#[derive(Clone)]
pub struct PaymentClient {
    inner: ServiceClient<PaymentService>,
}

impl PaymentClient {
    pub fn new(inner: ServiceClient<PaymentService>) -> Self {
        Self { inner }
    }

    async fn call(&self, command: PaymentCommand) -> Result<PaymentReply, PaymentError> {
        self.inner
            .call(command)
            .await
            .map_err(PaymentError::from_actor)
    }

    /// Records and settles one payment for an order. The returned payment
    /// is already in its terminal status.
    #[instrument(skip(self, request))]
    pub async fn settle(&self, request: SettleRequest) -> Result<Payment, PaymentError> {
        debug!("Sending request");
        match self.call(PaymentCommand::Settle(request)).await? {
            PaymentReply::Payment(payment) => Ok(payment),
            _ => unreachable!("Settle must return Payment"),
        }
    }

    #[instrument(skip(self))]
    pub async fn get_payment(&self, id: PaymentId) -> Result<Payment, PaymentError> {
        debug!("Sending request");
        match self.call(PaymentCommand::Get { id }).await? {
            PaymentReply::Payment(payment) => Ok(payment),
            _ => unreachable!("Get must return Payment"),
        }
    }

    /// Administrative status override.
    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        id: PaymentId,
        status: PaymentStatus,
    ) -> Result<Payment, PaymentError> {
        debug!("Sending request");
        match self.call(PaymentCommand::UpdateStatus { id, status }).await? {
            PaymentReply::Payment(payment) => Ok(payment),
            _ => unreachable!("UpdateStatus must return Payment"),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Payment>, PaymentError> {
        debug!("Sending request");
        match self.call(PaymentCommand::ListByUser { user_id }).await? {
            PaymentReply::Payments(payments) => Ok(payments),
            _ => unreachable!("ListByUser must return Payments"),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_by_status(
        &self,
        status: PaymentStatus,
    ) -> Result<Vec<Payment>, PaymentError> {
        debug!("Sending request");
        match self.call(PaymentCommand::ListByStatus { status }).await? {
            PaymentReply::Payments(payments) => Ok(payments),
            _ => unreachable!("ListByStatus must return Payments"),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_by_order(&self, order_id: OrderId) -> Result<Vec<Payment>, PaymentError> {
        debug!("Sending request");
        match self.call(PaymentCommand::ListByOrder { order_id }).await? {
            PaymentReply::Payments(payments) => Ok(payments),
            _ => unreachable!("ListByOrder must return Payments"),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_pending(&self) -> Result<Vec<Payment>, PaymentError> {
        debug!("Sending request");
        match self.call(PaymentCommand::ListPending).await? {
            PaymentReply::Payments(payments) => Ok(payments),
            _ => unreachable!("ListPending must return Payments"),
        }
    }

    #[instrument(skip(self))]
    pub async fn statistics(&self) -> Result<PaymentStats, PaymentError> {
        debug!("Sending request");
        match self.call(PaymentCommand::Statistics).await? {
            PaymentReply::Stats(stats) => Ok(stats),
            _ => unreachable!("Statistics must return Stats"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_core::mock::{expect_command, mock_client};
    use actor_core::ActorError;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn statistics_round_trips_through_the_mailbox() {
        let (client, mut receiver) = mock_client::<PaymentService>(10);
        let ledger = PaymentClient::new(client);

        let task = tokio::spawn(async move { ledger.statistics().await });

        let (command, responder) = expect_command(&mut receiver)
            .await
            .expect("expected a command");
        assert!(matches!(command, PaymentCommand::Statistics));
        let stats = PaymentStats {
            total: 3,
            pending: 0,
            completed: 2,
            failed: 1,
            completed_amount: Decimal::new(30_00, 2),
        };
        responder.send(Ok(PaymentReply::Stats(stats.clone()))).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), stats);
    }

    #[tokio::test]
    async fn duplicate_payment_errors_come_back_typed() {
        let (client, mut receiver) = mock_client::<PaymentService>(10);
        let ledger = PaymentClient::new(client);

        let request = SettleRequest {
            order_id: OrderId(7),
            user_id: UserId(1),
            amount: Decimal::new(10_00, 2),
            method: "card".to_string(),
            description: None,
            currency: None,
        };
        let task = tokio::spawn(async move { ledger.settle(request).await });

        let (_, responder) = expect_command(&mut receiver)
            .await
            .expect("expected a command");
        responder
            .send(Err(ActorError::Service(Box::new(
                PaymentError::DuplicatePayment(OrderId(7)),
            ))))
            .unwrap();

        assert_eq!(
            task.await.unwrap().unwrap_err(),
            PaymentError::DuplicatePayment(OrderId(7))
        );
    }
}
