//! # Lifecycle
//!
//! Spawns the five collection actors, wires their dependencies, and shuts them down again.

use crate::clients::{AddressClient, OrderClient, ProductClient, ReviewClient, UserClient};
use tokio::task::JoinHandle;
use tracing::{error, info};

/// The running marketplace: one actor task per collection plus a client for each.
///
/// # Wiring
///
/// | Actor | Context |
/// |---|---|
/// | Product | `()` |
/// | Address | `()` |
/// | User | `ProductClient` (cart checks) |
/// | Order | `ProductClient` (placement) |
/// | Review | `ProductClient` (product exists) |
///
/// ```rust,ignore
/// let system = MarketplaceSystem::new(32);
/// let placed = system.order_client.place_order(params).await?;
/// system.shutdown().await?;
/// ```
pub struct MarketplaceSystem {
    pub user_client: UserClient,
    pub product_client: ProductClient,
    pub order_client: OrderClient,
    pub address_client: AddressClient,
    pub review_client: ReviewClient,
    handles: Vec<(&'static str, JoinHandle<()>)>,
}

impl MarketplaceSystem {
    /// Starts every actor with a request queue of `buffer_size`. Must be called inside a Tokio
    /// runtime.
    pub fn new(buffer_size: usize) -> Self {
        let (product_actor, product_client) = crate::product_actor::new(buffer_size);
        let (address_actor, address_client) = crate::address_actor::new(buffer_size);
        let (user_actor, user_client) = crate::user_actor::new(buffer_size);
        let (order_actor, order_client) = crate::order_actor::new(buffer_size);
        let (review_actor, review_client) = crate::review_actor::new(buffer_size);

        let handles = vec![
            ("users", tokio::spawn(user_actor.run(product_client.clone()))),
            ("orders", tokio::spawn(order_actor.run(product_client.clone()))),
            ("reviews", tokio::spawn(review_actor.run(product_client.clone()))),
            ("addresses", tokio::spawn(address_actor.run(()))),
            ("products", tokio::spawn(product_actor.run(()))),
        ];
        info!(buffer_size, "Marketplace actors started");

        Self {
            user_client,
            product_client,
            order_client,
            address_client,
            review_client,
            handles,
        }
    }

    /// Drops this system's clients and waits for every actor to stop.
    ///
    /// An actor stops once all clients for it are gone, including clones held elsewhere (HTTP
    /// state, other actors' contexts). The catalog therefore stops last, after every actor holding a
    /// `ProductClient` has released it.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        drop(self.user_client);
        drop(self.order_client);
        drop(self.address_client);
        drop(self.review_client);
        drop(self.product_client);

        for (name, handle) in self.handles {
            if let Err(e) = handle.await {
                error!(actor = name, "Actor task failed: {e:?}");
                return Err(format!("{name} actor task failed: {e:?}"));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
