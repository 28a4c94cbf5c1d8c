//! The generic actor runtime: mailbox loop, logging, shutdown.

use crate::client::ServiceClient;
use crate::error::ActorError;
use crate::message::Envelope;
use crate::service::Service;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The server half of a service: owns the state and the receiving end of
/// the mailbox.
///
/// # Concurrency model
///
/// Each `ServiceActor` runs in its own Tokio task and processes commands
/// one at a time in arrival order. That sequential loop is what makes
/// check-then-act sequences inside a handler safe: between the check and
/// the act, no other command for this service can run. Multiple actors
/// still execute in parallel with each other.
///
/// # Usage pattern
///
/// 1. **Create**: [`ServiceActor::new`] returns the actor and its client.
/// 2. **Wire**: pass dependencies (other clients) into [`ServiceActor::run`].
/// 3. **Run**: spawn the run loop in a background task.
///
/// The loop exits when every client clone has been dropped, which is the
/// graceful-shutdown signal for the whole system.
pub struct ServiceActor<S: Service> {
    receiver: mpsc::Receiver<Envelope<S>>,
    state: S,
}

impl<S: Service> ServiceActor<S> {
    /// Creates an actor around `state` and its associated client.
    ///
    /// `buffer_size` is the mailbox capacity; callers block (asynchronously)
    /// when it is full, which applies natural backpressure.
    pub fn new(state: S, buffer_size: usize) -> (Self, ServiceClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, state };
        let client = ServiceClient::new(sender);
        (actor, client)
    }

    /// Runs the mailbox loop until every client is dropped.
    ///
    /// `context` is injected into each `handle` call, which is how an actor
    /// created without dependencies gets clients of other actors that were
    /// created after it.
    pub async fn run(mut self, context: S::Context) {
        // Just the type name, not the full module path.
        let service_type = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(service_type, "Actor started");

        while let Some(Envelope {
            command,
            respond_to,
        }) = self.receiver.recv().await
        {
            debug!(service_type, ?command, "Handling command");
            let result = self
                .state
                .handle(command, &context)
                .await
                .map_err(|e| ActorError::Service(Box::new(e)));
            match &result {
                Ok(reply) => debug!(service_type, ?reply, "Command ok"),
                Err(e) => warn!(service_type, error = %e, "Command failed"),
            }
            let _ = respond_to.send(result);
        }

        info!(service_type, "Shutdown");
    }
}
