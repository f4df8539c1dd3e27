//! Error types for the Address actor.

use resource_actor::FrameworkError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AddressError {
    #[error("Address not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for AddressError {
    fn from(e: FrameworkError) -> Self {
        match e.into_entity_error::<AddressError>() {
            Ok(typed) => typed,
            Err(FrameworkError::NotFound(id)) => AddressError::NotFound(id),
            Err(other) => AddressError::ActorCommunicationError(other.to_string()),
        }
    }
}
