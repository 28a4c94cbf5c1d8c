//! The generic client handle for a running [`ServiceActor`](crate::ServiceActor).

use crate::error::ActorError;
use crate::message::Envelope;
use crate::service::Service;
use tokio::sync::{mpsc, oneshot};

/// Async handle to a service actor.
///
/// Holds only the sending half of the mailbox, so cloning is cheap and
/// clones can be handed to any task. Dropping the last clone closes the
/// mailbox and shuts the actor down.
pub struct ServiceClient<S: Service> {
    sender: mpsc::Sender<Envelope<S>>,
}

impl<S: Service> Clone for ServiceClient<S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<S: Service> ServiceClient<S> {
    pub fn new(sender: mpsc::Sender<Envelope<S>>) -> Self {
        Self { sender }
    }

    /// Sends one command and waits for its reply.
    ///
    /// Fails with [`ActorError::ActorClosed`] when the actor is gone, or
    /// [`ActorError::ActorDropped`] when the actor died mid-request. Domain
    /// failures come back as [`ActorError::Service`].
    pub async fn call(&self, command: S::Command) -> Result<S::Reply, ActorError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(Envelope {
                command,
                respond_to,
            })
            .await
            .map_err(|_| ActorError::ActorClosed)?;
        response.await.map_err(|_| ActorError::ActorDropped)?
    }
}
