//! Payment ledger behavior through the full actor system, with the
//! settlement outcome pinned by a fixed gateway.

use commerce_core::config::CommerceConfig;
use commerce_core::lifecycle::CommerceSystem;
use commerce_core::model::{OrderId, PaymentStatus, UserId};
use commerce_core::payment_actor::{
    FixedGateway, PaymentError, SettleRequest, SettlementOutcome,
};
use rust_decimal::Decimal;
use std::sync::Arc;

fn approving_system() -> CommerceSystem {
    CommerceSystem::with_gateway(
        CommerceConfig::default(),
        Arc::new(FixedGateway(SettlementOutcome::Approved)),
    )
}

fn declining_system() -> CommerceSystem {
    CommerceSystem::with_gateway(
        CommerceConfig::default(),
        Arc::new(FixedGateway(SettlementOutcome::Declined)),
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

#[tokio::test]
async fn an_approved_settlement_is_completed_and_queryable() {
    let system = approving_system();

    let payment = system
        .payment_client
        .settle(request(1, Decimal::new(4500_00, 2)))
        .await
        .unwrap();
    assert_eq!(payment.status, PaymentStatus::Completed);
    assert!(payment.transaction_id.starts_with("TXN-"));
    assert_eq!(payment.currency, "PEN");

    let fetched = system.payment_client.get_payment(payment.id).await.unwrap();
    assert_eq!(fetched.status, PaymentStatus::Completed);

    let by_order = system
        .payment_client
        .list_by_order(OrderId(1))
        .await
        .unwrap();
    assert_eq!(by_order.len(), 1);
    assert_eq!(by_order[0].id, payment.id);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn a_failed_settlement_still_occupies_the_order() {
    let system = declining_system();

    let payment = system
        .payment_client
        .settle(request(7, Decimal::new(10_00, 2)))
        .await
        .unwrap();
    assert_eq!(payment.status, PaymentStatus::Failed);
    assert_eq!(
        payment.failure_reason.as_deref(),
        Some("payment processing error")
    );

    // A naive retry is rejected; the first attempt holds the order.
    let err = system
        .payment_client
        .settle(request(7, Decimal::new(10_00, 2)))
        .await
        .unwrap_err();
    assert_eq!(err, PaymentError::DuplicatePayment(OrderId(7)));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn rejected_requests_leave_no_trace_in_the_ledger() {
    let system = approving_system();

    assert_eq!(
        system
            .payment_client
            .settle(request(1, Decimal::ZERO))
            .await
            .unwrap_err(),
        PaymentError::InvalidAmount(Decimal::ZERO)
    );
    let over = Decimal::new(250_000_00, 2);
    assert!(matches!(
        system.payment_client.settle(request(1, over)).await,
        Err(PaymentError::AmountExceedsLimit { .. })
    ));

    let stats = system.payment_client.statistics().await.unwrap();
    assert_eq!(stats.total, 0);

    // The order is still payable after the rejections.
    assert!(system
        .payment_client
        .settle(request(1, Decimal::new(1_00, 2)))
        .await
        .is_ok());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn admin_override_rewrites_status_and_reason() {
    let system = approving_system();

    let payment = system
        .payment_client
        .settle(request(1, Decimal::new(50_00, 2)))
        .await
        .unwrap();
    assert_eq!(payment.status, PaymentStatus::Completed);

    let overridden = system
        .payment_client
        .update_status(payment.id, PaymentStatus::Failed)
        .await
        .unwrap();
    assert_eq!(overridden.status, PaymentStatus::Failed);
    assert_eq!(
        overridden.failure_reason.as_deref(),
        Some("status manually overridden to failed")
    );

    let failed = system
        .payment_client
        .list_by_status(PaymentStatus::Failed)
        .await
        .unwrap();
    assert_eq!(failed.len(), 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn statistics_track_every_terminal_state() {
    let system = approving_system();

    system
        .payment_client
        .settle(request(1, Decimal::new(10_00, 2)))
        .await
        .unwrap();
    system
        .payment_client
        .settle(request(2, Decimal::new(20_00, 2)))
        .await
        .unwrap();
    let third = system
        .payment_client
        .settle(request(3, Decimal::new(30_00, 2)))
        .await
        .unwrap();
    system
        .payment_client
        .update_status(third.id, PaymentStatus::Failed)
        .await
        .unwrap();

    let stats = system.payment_client.statistics().await.unwrap();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.completed, 2);
    assert_eq!(stats.failed, 1);
    assert_eq!(stats.pending, 0);
    assert_eq!(stats.completed_amount, Decimal::new(30_00, 2));

    let mine = system.payment_client.list_by_user(UserId(1)).await.unwrap();
    assert_eq!(mine.len(), 3);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn concurrent_settles_for_one_order_yield_exactly_one_payment() {
    let system = approving_system();

    let mut tasks = Vec::new();
    for _ in 0..10 {
        let ledger = system.payment_client.clone();
        tasks.push(tokio::spawn(async move {
            ledger.settle(request(42, Decimal::new(10_00, 2))).await
        }));
    }

    let mut ok = 0;
    let mut duplicates = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(_) => ok += 1,
            Err(PaymentError::DuplicatePayment(OrderId(42))) => duplicates += 1,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
    assert_eq!(ok, 1);
    assert_eq!(duplicates, 9);

    let by_order = system
        .payment_client
        .list_by_order(OrderId(42))
        .await
        .unwrap();
    assert_eq!(by_order.len(), 1);

    system.shutdown().await.unwrap();
}
