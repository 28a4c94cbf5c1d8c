//! # Actor Core
//!
//! Building blocks for single-writer service actors: each service owns its
//! state exclusively and processes commands **sequentially** from a Tokio
//! mpsc mailbox, replying over oneshot channels.
//!
//! ## Why actors here?
//!
//! The services built on this crate (catalog, cart, payments) all follow a
//! check-then-act shape: read some state, validate, then mutate. Running each
//! service as an actor turns its mailbox into the serialization point for
//! those sequences, so two concurrent requests touching the same cart or the
//! same order are ordered rather than racing. There is no `Mutex` or
//! `RwLock`: the actor task has exclusive ownership of its store.
//!
//! ## Layers
//!
//! 1. **Service layer** ([`Service`]): your state and business logic, a
//!    command enum in, a reply enum or typed error out.
//! 2. **Runtime layer** ([`ServiceActor`]): the mailbox loop, logging, and
//!    shutdown handling.
//! 3. **Interface layer** ([`ServiceClient`]): a cheap-to-clone async handle
//!    that callers use from any task.
//!
//! ## Context injection
//!
//! Dependencies (typically clients of *other* actors) are injected at
//! runtime via [`ServiceActor::run`], not at construction time. This late
//! binding lets all actors be created first and wired afterwards.
//!
//! ```rust
//! use actor_core::{Service, ServiceActor};
//! use async_trait::async_trait;
//!
//! struct Counter(u64);
//!
//! #[derive(Debug)]
//! enum CounterCommand { Add(u64), Get }
//! #[derive(Debug)]
//! enum CounterReply { Done, Value(u64) }
//! #[derive(Debug, thiserror::Error)]
//! #[error("counter overflow")]
//! struct CounterError;
//!
//! #[async_trait]
//! impl Service for Counter {
//!     type Command = CounterCommand;
//!     type Reply = CounterReply;
//!     type Context = ();
//!     type Error = CounterError;
//!
//!     async fn handle(
//!         &mut self,
//!         command: CounterCommand,
//!         _ctx: &(),
//!     ) -> Result<CounterReply, CounterError> {
//!         match command {
//!             CounterCommand::Add(n) => {
//!                 self.0 = self.0.checked_add(n).ok_or(CounterError)?;
//!                 Ok(CounterReply::Done)
//!             }
//!             CounterCommand::Get => Ok(CounterReply::Value(self.0)),
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ServiceActor::new(Counter(0), 10);
//!     tokio::spawn(actor.run(()));
//!
//!     client.call(CounterCommand::Add(2)).await.unwrap();
//!     let reply = client.call(CounterCommand::Get).await.unwrap();
//!     assert!(matches!(reply, CounterReply::Value(2)));
//! }
//! ```
//!
//! ## Error flow
//!
//! Domain errors cross the channel boxed inside [`ActorError::Service`].
//! Client wrappers call [`ActorError::downcast`] to recover the concrete
//! error type, so callers always see typed domain outcomes and only genuine
//! transport failures (`ActorClosed`, `ActorDropped`) surface as such.
//!
//! ## Testing
//!
//! The [`mock`] module provides a channel-backed client so wrapper logic can
//! be tested without spawning any actor: the test receives each command and
//! answers it by hand.

pub mod actor;
pub mod client;
pub mod error;
pub mod message;
pub mod mock;
pub mod service;
pub mod tracing;

pub use actor::ServiceActor;
pub use client::ServiceClient;
pub use error::ActorError;
pub use message::{Envelope, Responder};
pub use service::Service;
