//! Error types for the Review actor.

use crate::model::ProductId;
use crate::product_actor::ProductError;
use resource_actor::FrameworkError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReviewError {
    #[error("Review not found: {0}")]
    NotFound(String),

    /// The reviewed product does not exist.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    #[error("{0}")]
    ValidationError(String),

    /// Someone other than the author tried to remove the review.
    #[error("Not authorized to delete this review")]
    NotAuthor,

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for ReviewError {
    fn from(e: FrameworkError) -> Self {
        match e.into_entity_error::<ReviewError>() {
            Ok(typed) => typed,
            Err(FrameworkError::NotFound(id)) => ReviewError::NotFound(id),
            Err(other) => ReviewError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<ProductError> for ReviewError {
    fn from(e: ProductError) -> Self {
        ReviewError::ActorCommunicationError(e.to_string())
    }
}
