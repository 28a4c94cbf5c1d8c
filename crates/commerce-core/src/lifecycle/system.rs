use crate::clients::{CartClient, CatalogClient, PaymentClient};
use crate::config::CommerceConfig;
use crate::payment_actor::{RandomGateway, SettlementGateway};
use crate::{cart_actor, catalog_actor, payment_actor};
use std::sync::Arc;
use tracing::{error, info};

/// The runtime orchestrator for the commerce actor system.
///
/// Owns one client per actor plus the task handles needed for graceful
/// shutdown. Clients are cheap to clone; hand out copies freely.
pub struct CommerceSystem {
    /// Client for the stock authority.
    pub catalog_client: CatalogClient,

    /// Client for the cart store.
    pub cart_client: CartClient,

    /// Client for the payment ledger.
    pub payment_client: PaymentClient,

    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CommerceSystem {
    /// Starts all actors with the probabilistic settlement gateway.
    pub fn new(config: CommerceConfig) -> Self {
        let gateway = Arc::new(RandomGateway::new(config.settlement_success_rate));
        Self::with_gateway(config, gateway)
    }

    /// Starts all actors with a caller-supplied settlement gateway. Tests
    /// use this with a fixed gateway to pin settlement outcomes.
    pub fn with_gateway(config: CommerceConfig, gateway: Arc<dyn SettlementGateway>) -> Self {
        // 1. Create actors (no dependencies yet).
        let (catalog_actor, catalog_client) = catalog_actor::new();
        let (cart_actor, cart_client) = cart_actor::new(config.clone());
        let (payment_actor, payment_client) = payment_actor::new(config, gateway);

        // 2. Start actors with injected context. The cart depends on the
        //    catalog; the other two stand alone.
        let catalog_handle = tokio::spawn(catalog_actor.run(()));
        let cart_handle = tokio::spawn(cart_actor.run(catalog_client.clone()));
        let payment_handle = tokio::spawn(payment_actor.run(()));

        info!("Commerce system started");

        Self {
            catalog_client,
            cart_client,
            payment_client,
            handles: vec![catalog_handle, cart_handle, payment_handle],
        }
    }

    /// Gracefully shuts down the system: drops every client so the actors
    /// see their channels close, then awaits all actor tasks.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.cart_client);
        drop(self.payment_client);
        drop(self.catalog_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for CommerceSystem {
    fn default() -> Self {
        Self::new(CommerceConfig::default())
    }
}
