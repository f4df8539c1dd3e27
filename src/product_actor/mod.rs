//! # Product Actor
//!
//! The catalog store. Owns every [`Product`] and is the only place stock changes.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`] type for type-safe error handling
//! - [`actions`] - [`ProductAction`] and [`ProductActionResult`] for stock management
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Stock reservations
//!
//! `ReserveStock` is a conditional decrement: it checks availability and stock and decrements in
//! the same step, inside the actor, so concurrent orders can never oversell. Order placement
//! submits all of an order's reservations as one batch, which commits every decrement or none:
//!
//! ```rust,ignore
//! let reservations = product_client
//!     .reserve_all(vec![(lamp, 2), (shade, 1)])
//!     .await?;
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use marketplace::product_actor;
//! use marketplace::model::{ProductCreate, UserId};
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = product_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client
//!         .create_product(ProductCreate {
//!             seller: UserId(1),
//!             name: "Widget".to_string(),
//!             description: "A widget".to_string(),
//!             category: "tools".to_string(),
//!             price: Decimal::new(2999, 2),
//!             stock: 100,
//!             image: None,
//!         })
//!         .await?;
//!
//!     client.reserve_stock(id, 5).await?;
//!     assert_eq!(client.check_stock(id).await?, 95);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::ProductClient;
use crate::model::Product;
use resource_actor::ResourceActor;

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, ProductClient::new(generic_client))
}
