//! # Marketplace
//!
//! Order placement with stock reservation, the order status service, and the cart that feeds
//! them, served over a JSON HTTP API.
//!
//! ## Layers
//!
//! - [`model`]: documents, typed ids and payloads.
//! - [`product_actor`], [`user_actor`], [`order_actor`], [`address_actor`], [`review_actor`]: one
//!   [`ResourceActor`](resource_actor::ResourceActor) per collection. Business rules live in the
//!   `ActorEntity` hooks.
//! - [`clients`]: typed wrappers around each actor's `ResourceClient`.
//! - [`lifecycle`]: [`MarketplaceSystem`](lifecycle::MarketplaceSystem) spawns and wires the
//!   actors.
//! - [`auth`] and [`http`]: password hashes, bearer tokens and the actix-web routes.
//! - [`config`]: command line and environment settings.
//!
//! ## Placement in one picture
//!
//! ```text
//! POST /orders
//!   -> OrderClient::place_order
//!   -> Order actor, on_create
//!        -> Product actor: get each line       (exists, available, stock, one seller)
//!        -> Product actor: one reservation batch (all decrements or none)
//!   -> order stored as Placed, total returned
//! ```
//!
//! Each actor processes its requests one at a time, so a batch of stock decrements is atomic with
//! respect to every other catalog request and concurrent checkouts cannot oversell.

pub mod address_actor;
pub mod auth;
pub mod clients;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod product_actor;
pub mod review_actor;
pub mod user_actor;
