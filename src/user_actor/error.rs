//! Error types for the User actor.

use crate::model::ProductId;
use crate::product_actor::ProductError;
use resource_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur during user and cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// The requested user was not found.
    #[error("User not found: {0}")]
    NotFound(String),

    /// Another account already uses the email or phone number.
    #[error("User already exists with given email or phone")]
    AlreadyExists,

    /// The user data provided is invalid.
    #[error("{0}")]
    ValidationError(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The product being added to the cart is missing or switched off.
    #[error("Product not found or unavailable: {0}")]
    ProductUnavailable(ProductId),

    #[error("Insufficient stock for this product: {0}")]
    InsufficientStock(String),

    /// The cart already holds products of a different seller.
    #[error("Cart already contains products from another seller")]
    MixedSellerCart,

    #[error("Item not found in cart: {0}")]
    CartItemNotFound(ProductId),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for UserError {
    fn from(e: FrameworkError) -> Self {
        match e.into_entity_error::<UserError>() {
            Ok(typed) => typed,
            Err(FrameworkError::NotFound(id)) => UserError::NotFound(id),
            Err(FrameworkError::Conflict(_)) => UserError::AlreadyExists,
            Err(other) => UserError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<ProductError> for UserError {
    fn from(e: ProductError) -> Self {
        UserError::ActorCommunicationError(e.to_string())
    }
}
