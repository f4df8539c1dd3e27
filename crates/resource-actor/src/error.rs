//! # Framework Errors
//!
//! Errors raised by the store runtime itself, plus a boxed carrier for the typed error of the
//! collection that handled the request.

use std::error::Error;

/// Errors that can occur within the store runtime.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Conflicts with existing item: {0}")]
    Conflict(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the collection's own error type from an `EntityError`.
    ///
    /// Returns `Err(self)` unchanged when the error is a runtime error or wraps a different type,
    /// so callers can fall through to their generic mapping.
    pub fn into_entity_error<E>(self) -> Result<E, Self>
    where
        E: Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(typed) => Ok(*typed),
                Err(other) => Err(FrameworkError::EntityError(other)),
            },
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error, PartialEq)]
    #[error("out of stock")]
    struct OutOfStock;

    #[test]
    fn entity_error_downcasts_to_its_own_type() {
        let err = FrameworkError::EntityError(Box::new(OutOfStock));
        assert_eq!(err.into_entity_error::<OutOfStock>().unwrap(), OutOfStock);
    }

    #[test]
    fn foreign_errors_are_handed_back() {
        let err = FrameworkError::EntityError(Box::new(std::io::Error::other("disk")));
        let back = err.into_entity_error::<OutOfStock>().unwrap_err();
        assert!(back.to_string().contains("disk"));

        let closed = FrameworkError::ActorClosed.into_entity_error::<OutOfStock>();
        assert!(matches!(closed, Err(FrameworkError::ActorClosed)));
    }
}
