//! # Commerce Core
//!
//! An actor-based transactional core for a small storefront: a stock
//! authority, a per-user cart store and a payment ledger, each running as
//! an actor on [`actor_core`].
//!
//! ## Components
//!
//! - **[catalog_actor]**: the stock authority. Owns the product table and
//!   answers existence and availability questions.
//! - **[cart_actor]**: the cart store. Lines snapshot price and name at add
//!   time; stock is validated against the catalog but never decremented.
//! - **[payment_actor]**: the payment ledger. One payment per order,
//!   settled through a pluggable gateway.
//! - **[clients]**: typed wrappers so call sites never touch command enums.
//! - **[lifecycle]**: wires the actors together and shuts them down.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use commerce_core::config::CommerceConfig;
//! use commerce_core::lifecycle::CommerceSystem;
//! use commerce_core::model::{ProductCreate, UserId};
//! use rust_decimal::Decimal;
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let system = CommerceSystem::new(CommerceConfig::default());
//!
//! let product_id = system
//!     .catalog_client
//!     .add_product(ProductCreate {
//!         name: "Laptop".to_string(),
//!         description: None,
//!         sku: "LAP-001".to_string(),
//!         price: Decimal::new(1500_00, 2),
//!         quantity: 50,
//!     })
//!     .await?;
//!
//! let line = system.cart_client.add_line(UserId(1), product_id, 2).await?;
//! assert_eq!(line.total, Decimal::new(3000_00, 2));
//!
//! system.shutdown().await.map_err(std::io::Error::other)?;
//! # Ok(())
//! # }
//! ```

pub mod cart_actor;
pub mod catalog_actor;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod payment_actor;
