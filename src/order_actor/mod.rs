//! # Order Actor
//!
//! Order placement and the order status service.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Order`]
//! - [`actions`] - [`OrderAction`], [`Authority`] and [`StatusChange`]
//! - [`error`] - [`OrderError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Orchestration
//!
//! Placement happens in `Order::on_create`, which talks to the catalog through the
//! [`ProductClient`](crate::clients::ProductClient) injected as context:
//!
//! ```text
//! OrderClient::place_order
//!   -> Order actor: from_create_params (shape checks)
//!   -> Order::on_create
//!        -> ProductClient::get          (per line: exists, available, stock, same seller)
//!        -> ProductClient::reserve_all  (one all-or-nothing batch)
//!   -> order stored, id returned
//! ```
//!
//! The order is stored only if `on_create` succeeds, and the batch guarantees that no stock moves
//! unless every line can be reserved.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::OrderClient;
use crate::model::Order;
use resource_actor::ResourceActor;

/// Creates a new Order actor and its client. Run it with a
/// [`ProductClient`](crate::clients::ProductClient) as context.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, OrderClient::new(generic_client))
}
