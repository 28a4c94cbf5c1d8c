//! # Cart actor
//!
//! Owns the cart-line table for all users. Adds and quantity updates are
//! validated against the catalog actor (injected as the run context), but
//! the cart never mutates stock: availability is advisory at cart time.
//!
//! Because every cart mutation flows through this actor's mailbox, two
//! concurrent adds for the same (user, product) are serialized and cannot
//! produce duplicate lines or validate against a stale line quantity.

pub mod command;
pub mod error;
pub mod service;

pub use command::{CartCommand, CartReply};
pub use error::CartError;
pub use service::CartService;

use crate::clients::CartClient;
use crate::config::CommerceConfig;
use actor_core::ServiceActor;

/// Creates a new cart actor and its client. The catalog client is injected
/// later, via `actor.run(catalog_client)`.
pub fn new(config: CommerceConfig) -> (ServiceActor<CartService>, CartClient) {
    let (actor, client) = ServiceActor::new(CartService::new(config), 32);
    (actor, CartClient::new(client))
}
