//! Demo walking one purchase through the whole system: seed a product,
//! build a cart, settle the payment, print the ledger statistics.

use actor_core::tracing::setup_tracing;
use commerce_core::config::CommerceConfig;
use commerce_core::lifecycle::CommerceSystem;
use commerce_core::model::{OrderId, ProductCreate, UserId};
use commerce_core::payment_actor::SettleRequest;
use rust_decimal::Decimal;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting commerce system demo");

    let system = CommerceSystem::new(CommerceConfig::default());
    let user_id = UserId(1);

    let product_id = async {
        info!("Seeding catalog");
        system
            .catalog_client
            .add_product(ProductCreate {
                name: "Laptop".to_string(),
                description: Some("15-inch, 16 GB RAM".to_string()),
                sku: "LAP-001".to_string(),
                price: Decimal::new(1500_00, 2),
                quantity: 50,
            })
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(tracing::info_span!("catalog_seed"))
    .await?;

    info!(product_id = %product_id, "Product created");

    let total = async {
        info!("Building cart");
        // The second add merges into the first line.
        system
            .cart_client
            .add_line(user_id, product_id, 2)
            .await
            .map_err(|e| e.to_string())?;
        system
            .cart_client
            .add_line(user_id, product_id, 1)
            .await
            .map_err(|e| e.to_string())?;
        system.cart_client.total(user_id).await.map_err(|e| e.to_string())
    }
    .instrument(tracing::info_span!("cart_flow"))
    .await?;

    info!(total = %total, "Cart total computed");

    let settlement = async {
        info!("Settling payment");
        system
            .payment_client
            .settle(SettleRequest {
                order_id: OrderId(1),
                user_id,
                amount: total,
                method: "card".to_string(),
                description: Some("Demo order".to_string()),
                currency: None,
            })
            .await
    }
    .instrument(tracing::info_span!("payment_flow"))
    .await;

    match settlement {
        Ok(payment) => info!(
            payment_id = %payment.id,
            status = %payment.status,
            transaction_id = %payment.transaction_id,
            "Payment settled"
        ),
        Err(e) => error!(error = %e, "Payment failed"),
    }

    let stats = system
        .payment_client
        .statistics()
        .await
        .map_err(|e| e.to_string())?;
    info!(
        total = stats.total,
        completed = stats.completed,
        failed = stats.failed,
        completed_amount = %stats.completed_amount,
        "Ledger statistics"
    );

    system.shutdown().await?;

    info!("Demo completed");
    Ok(())
}
