//! # Domain Model
//!
//! Plain data types for the five collections. Each stored type implements
//! [`ActorEntity`](resource_actor::ActorEntity) in its `*_actor` module; this module only holds
//! the documents, their typed ids and the payloads used to create or change them.
//!
//! Money is [`Decimal`](rust_decimal::Decimal) and serializes as a string (`"19.99"`).
//! Timestamps are UTC.

pub mod address;
pub mod order;
pub mod product;
pub mod review;
pub mod user;

pub use address::*;
pub use order::*;
pub use product::*;
pub use review::*;
pub use user::*;
