//! Typed clients, one per collection. Each wraps a `ResourceClient` and implements
//! [`ActorClient`] for the shared read and delete operations.

pub mod address_client;
pub mod order_client;
pub mod product_client;
pub mod review_client;
pub mod user_client;

pub use address_client::AddressClient;
pub use order_client::OrderClient;
pub use product_client::ProductClient;
pub use resource_actor::ActorClient;
pub use review_client::ReviewClient;
pub use user_client::UserClient;
