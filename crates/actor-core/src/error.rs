//! Transport-level errors shared by every actor and client.

/// Errors produced by the actor machinery itself, as opposed to domain
/// errors a [`Service`](crate::Service) returns from its handler.
///
/// Domain errors travel inside [`ActorError::Service`] and are recovered on
/// the client side via [`ActorError::downcast`]; the other two variants mean
/// the actor task is gone and the call never ran (or its reply was lost).
#[derive(Debug, thiserror::Error)]
pub enum ActorError {
    #[error("actor closed")]
    ActorClosed,
    #[error("actor dropped response channel")]
    ActorDropped,
    #[error("{0}")]
    Service(Box<dyn std::error::Error + Send + Sync>),
}

impl ActorError {
    /// Recover the concrete domain error carried by [`ActorError::Service`].
    ///
    /// Returns the original `ActorError` unchanged when the variant is a
    /// transport failure or the boxed error is of a different type, so
    /// client wrappers can fall back to a communication-error variant.
    pub fn downcast<E>(self) -> Result<E, ActorError>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            ActorError::Service(inner) => match inner.downcast::<E>() {
                Ok(err) => Ok(*err),
                Err(other) => Err(ActorError::Service(other)),
            },
            other => Err(other),
        }
    }
}
