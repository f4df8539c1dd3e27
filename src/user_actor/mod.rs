//! # User Actor
//!
//! Identity records and the embedded shopping cart.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`User`]
//! - [`actions`] - [`CartAction`], the cart operations
//! - [`error`] - [`UserError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Dependencies
//!
//! The actor's context is a [`ProductClient`](crate::clients::ProductClient): adding to the
//! cart re-reads the catalog to check stock and the single-seller rule.
//!
//! ```rust,ignore
//! let (user_actor, user_client) = user_actor::new(32);
//! tokio::spawn(user_actor.run(product_client.clone()));
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::UserClient;
use crate::model::User;
use resource_actor::ResourceActor;

/// Creates a new User actor and its client. Run it with a
/// [`ProductClient`](crate::clients::ProductClient) as context.
pub fn new(buffer_size: usize) -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, UserClient::new(generic_client))
}
