//! Channel-backed mocks for testing client wrappers without actors.
//!
//! A mocked client sends its envelopes to a receiver the test controls.
//! The test pulls each command off the channel, asserts on it, and answers
//! through the responder, simulating any actor behavior (success, domain
//! error, transport failure) deterministically.
//!
//! ```rust,ignore
//! let (client, mut receiver) = mock_client::<CartService>(10);
//! let wrapper = CartClient::new(client);
//!
//! let task = tokio::spawn(async move { wrapper.total(UserId(1)).await });
//!
//! let (command, responder) = expect_command(&mut receiver).await.unwrap();
//! assert!(matches!(command, CartCommand::Total { .. }));
//! responder.send(Ok(CartReply::Total(Decimal::ZERO))).unwrap();
//!
//! assert_eq!(task.await.unwrap().unwrap(), Decimal::ZERO);
//! ```

use crate::client::ServiceClient;
use crate::message::{Envelope, Responder};
use crate::service::Service;
use tokio::sync::mpsc;

/// Creates a client whose envelopes land on the returned receiver instead
/// of a real actor.
pub fn mock_client<S: Service>(
    buffer_size: usize,
) -> (ServiceClient<S>, mpsc::Receiver<Envelope<S>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ServiceClient::new(sender), receiver)
}

/// Receives the next envelope, split into command and responder.
///
/// Returns `None` when the client side has been dropped.
pub async fn expect_command<S: Service>(
    receiver: &mut mpsc::Receiver<Envelope<S>>,
) -> Option<(S::Command, Responder<S>)> {
    receiver
        .recv()
        .await
        .map(|envelope| (envelope.command, envelope.respond_to))
}
