//! Error types for the Order actor.

use crate::model::OrderStatus;
use crate::product_actor::ProductError;
use crate::user_actor::UserError;
use resource_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur during order placement and status changes.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    #[error("No order items provided")]
    EmptyOrder,

    #[error("Your cart is empty")]
    EmptyCart,

    /// The order data provided is invalid.
    #[error("{0}")]
    ValidationError(String),

    /// A line references a product that does not exist or is switched off.
    #[error("Product not found or unavailable: {0}")]
    ProductUnavailable(String),

    /// There is insufficient stock to fulfill a line.
    #[error("Insufficient stock for: {0}")]
    InsufficientStock(String),

    #[error("All items in an order must belong to the same seller")]
    MixedSeller,

    /// The caller is not the order's seller.
    #[error("Unauthorized seller access")]
    NotOwner,

    #[error("Invalid order status: {0}")]
    InvalidStatus(String),

    #[error("Invalid status '{0}'. Allowed: Shipped, Delivered")]
    SellerStatusNotAllowed(String),

    #[error("Cannot move order from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    /// Reading the buyer's cart failed.
    #[error(transparent)]
    Cart(#[from] UserError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        match e.into_entity_error::<OrderError>() {
            Ok(typed) => typed,
            Err(FrameworkError::NotFound(id)) => OrderError::NotFound(id),
            Err(other) => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

/// Catalog failures as seen by order placement.
impl From<ProductError> for OrderError {
    fn from(e: ProductError) -> Self {
        match e {
            ProductError::NotFound(id) => OrderError::ProductUnavailable(id),
            ProductError::Unavailable(id) => OrderError::ProductUnavailable(id.to_string()),
            ProductError::InsufficientStock { name, .. } => OrderError::InsufficientStock(name),
            ProductError::InvalidQuantity(_) => {
                OrderError::ValidationError("unitsOrdered must be at least 1".into())
            }
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
