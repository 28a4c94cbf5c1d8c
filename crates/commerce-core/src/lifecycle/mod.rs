//! Lifecycle and orchestration for the commerce actors.
//!
//! Actors are created without dependencies and wired together at start
//! time via `run(context)`: the cart actor receives the catalog client as
//! its context. The dependency graph is acyclic, so graceful shutdown is
//! just dropping the clients and awaiting the actor tasks.

pub mod system;

pub use system::CommerceSystem;
