//! Error types for the Product actor.

use crate::model::ProductId;
use resource_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// The product exists but is not offered for sale.
    #[error("Product not found or unavailable: {0}")]
    Unavailable(ProductId),

    /// The requested quantity exceeds the available stock.
    #[error("Insufficient stock for: {name} (requested {requested}, available {available})")]
    InsufficientStock {
        name: String,
        requested: u32,
        available: u32,
    },

    /// The provided quantity is invalid (zero).
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// The product data provided is invalid.
    #[error("{0}")]
    ValidationError(String),

    /// The caller does not own the product.
    #[error("Not authorized to modify {0}")]
    NotOwner(ProductId),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for ProductError {
    fn from(e: FrameworkError) -> Self {
        match e.into_entity_error::<ProductError>() {
            Ok(typed) => typed,
            Err(FrameworkError::NotFound(id)) => ProductError::NotFound(id),
            Err(other) => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}
