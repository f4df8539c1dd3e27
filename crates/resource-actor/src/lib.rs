//! # Resource Actor
//!
//! An in-process document store built from actors. Each collection (users, products, orders,
//! ...) is one [`ResourceActor`] task that exclusively owns a `HashMap<Id, Entity>` and answers
//! requests from cloneable [`ResourceClient`]s over a Tokio channel.
//!
//! ## Why actors for a store?
//!
//! - **Per-document atomicity for free**: requests to one collection are processed sequentially,
//!   so a conditional write ("decrement stock if at least N left") cannot race another write.
//! - **Multi-document units of work**: [`ResourceClient::perform_batch`] stages several actions
//!   and commits them together or not at all.
//! - **Isolation**: collections never share memory; they call each other through clients
//!   injected as each entity's `Context`.
//!
//! Further reading: [Actors with Tokio](https://ryhl.io/blog/actors-with-tokio/).
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]) - the document type and its business rules
//! 2. **Runtime** ([`ResourceActor`]) - the message loop that owns the collection
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]) - typed async calls
//!
//! ## Example
//!
//! ```rust
//! use resource_actor::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Shelf { id: u32, items: u32 }
//!
//! #[derive(Debug)] struct ShelfCreate { items: u32 }
//! #[derive(Debug)] struct ShelfUpdate;
//! #[derive(Debug)] enum ShelfAction { Take(u32) }
//! #[derive(Debug, thiserror::Error)]
//! #[error("only {0} left")]
//! struct ShelfError(u32);
//!
//! #[async_trait]
//! impl ActorEntity for Shelf {
//!     type Id = u32;
//!     type Create = ShelfCreate;
//!     type Update = ShelfUpdate;
//!     type Action = ShelfAction;
//!     type ActionResult = u32;
//!     type Context = ();
//!     type Error = ShelfError;
//!
//!     fn from_create_params(id: u32, params: ShelfCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, items: params.items })
//!     }
//!
//!     async fn on_update(&mut self, _: ShelfUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//!
//!     async fn handle_action(&mut self, action: ShelfAction, _: &()) -> Result<u32, Self::Error> {
//!         match action {
//!             ShelfAction::Take(n) if n <= self.items => {
//!                 self.items -= n;
//!                 Ok(self.items)
//!             }
//!             ShelfAction::Take(_) => Err(ShelfError(self.items)),
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Shelf>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let a = client.create(ShelfCreate { items: 5 }).await.unwrap();
//!     let b = client.create(ShelfCreate { items: 1 }).await.unwrap();
//!
//!     // b cannot give 2, so a keeps all 5
//!     let batch = client
//!         .perform_batch(vec![(a, ShelfAction::Take(2)), (b, ShelfAction::Take(2))])
//!         .await;
//!     assert!(batch.is_err());
//!     assert_eq!(client.get(a).await.unwrap().unwrap().items, 5);
//! }
//! ```
//!
//! ## Testing
//!
//! [`mock::MockClient`] gives a real `ResourceClient<T>` backed by scripted replies, so one
//! collection can be tested with its dependencies faked.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
