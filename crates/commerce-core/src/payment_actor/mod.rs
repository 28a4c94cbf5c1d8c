//! # Payment actor
//!
//! The payment ledger: validates, records and settles one payment per
//! order. Because validation and the duplicate scan run inside the actor's
//! mailbox, concurrent settle requests for the same order cannot both
//! slip past the one-payment-per-order rule.
//!
//! Settlement itself is pluggable via [`SettlementGateway`].

pub mod command;
pub mod error;
pub mod gateway;
pub mod service;

pub use command::{PaymentCommand, PaymentReply, SettleRequest};
pub use error::PaymentError;
pub use gateway::{FixedGateway, RandomGateway, SettlementGateway, SettlementOutcome};
pub use service::PaymentService;

use crate::clients::PaymentClient;
use crate::config::CommerceConfig;
use actor_core::ServiceActor;
use std::sync::Arc;

/// Creates a new payment actor and its client.
pub fn new(
    config: CommerceConfig,
    gateway: Arc<dyn SettlementGateway>,
) -> (ServiceActor<PaymentService>, PaymentClient) {
    let (actor, client) = ServiceActor::new(PaymentService::new(config, gateway), 32);
    (actor, PaymentClient::new(client))
}
