//! Typed clients for the commerce actors.
//!
//! Each client wraps a [`ServiceClient`](actor_core::ServiceClient) and
//! exposes one method per operation, so call sites never see command enums
//! or pattern-match on replies.

pub mod cart_client;
pub mod catalog_client;
pub mod payment_client;

pub use cart_client::CartClient;
pub use catalog_client::CatalogClient;
pub use payment_client::PaymentClient;
