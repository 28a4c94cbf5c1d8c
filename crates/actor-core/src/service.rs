//! The [`Service`] trait: the contract between domain state and the runtime.
//!
//! A service is a piece of state plus a command handler. The runtime
//! ([`crate::ServiceActor`]) owns the state and feeds it commands one at a
//! time; the handler never needs interior mutability or locking.

use async_trait::async_trait;
use std::fmt::Debug;

/// State managed by a [`ServiceActor`](crate::ServiceActor).
///
/// Associated types keep every service fully typed end to end: a cart client
/// cannot send a catalog command, and a caller matching on the reply enum is
/// checked by the compiler.
///
/// # Error granularity
///
/// Each service defines **one** error enum covering all of its commands.
/// This trades a little precision (any command's `Result` can technically
/// carry any variant) for a single type clients can match on, which is how
/// the domain crates keep their client wrappers small.
#[async_trait]
pub trait Service: Send + 'static {
    /// The command enum this service accepts.
    type Command: Send + Debug;

    /// The reply enum this service produces. Variants usually pair 1:1 with
    /// commands.
    type Reply: Send + Debug;

    /// Runtime dependencies injected into every `handle` call, typically
    /// clients of other actors. Use `()` when the service is a leaf.
    type Context: Send + Sync;

    /// The domain error type for this service.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Handle one command against the current state.
    ///
    /// Runs with exclusive access to `self`; no other command for this
    /// service executes concurrently.
    async fn handle(
        &mut self,
        command: Self::Command,
        ctx: &Self::Context,
    ) -> Result<Self::Reply, Self::Error>;
}
