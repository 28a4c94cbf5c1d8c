//! # Catalog actor
//!
//! The stock authority: owns the product table and answers every question
//! about product existence and available quantity. Other components never
//! read this table directly; they go through [`CatalogClient`].
//!
//! Stock here is **advisory** for the cart flow: the cart validates
//! availability against it but nothing in the cart or payment paths ever
//! decrements stock. [`ReduceStock`](command::CatalogCommand::ReduceStock)
//! and [`IncreaseStock`](command::CatalogCommand::IncreaseStock) are
//! administrative operations.

pub mod command;
pub mod error;
pub mod service;

pub use command::{CatalogCommand, CatalogReply};
pub use error::CatalogError;
pub use service::CatalogService;

use crate::clients::CatalogClient;
use actor_core::ServiceActor;

/// Creates a new catalog actor and its client.
pub fn new() -> (ServiceActor<CatalogService>, CatalogClient) {
    let (actor, client) = ServiceActor::new(CatalogService::new(), 32);
    (actor, CatalogClient::new(client))
}
