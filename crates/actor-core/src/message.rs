//! Wire types between [`ServiceClient`](crate::ServiceClient) and
//! [`ServiceActor`](crate::ServiceActor).

use crate::error::ActorError;
use crate::service::Service;
use tokio::sync::oneshot;

/// Oneshot sender carrying the outcome of a single command.
pub type Responder<S> = oneshot::Sender<Result<<S as Service>::Reply, ActorError>>;

/// One command plus the channel its reply travels back on.
///
/// Clients build an envelope per call; the actor consumes it, runs the
/// handler, and answers on `respond_to`. If the caller has gone away the
/// send simply fails and the actor moves on.
#[derive(Debug)]
pub struct Envelope<S: Service> {
    pub command: S::Command,
    pub respond_to: Responder<S>,
}
