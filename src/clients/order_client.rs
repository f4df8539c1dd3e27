use crate::clients::UserClient;
use crate::model::{
    AddressId, LineItemRequest, Order, OrderCreate, OrderId, OrderStats, OrderStatus, PlacedOrder,
    UserId,
};
use crate::order_actor::{Authority, OrderAction, OrderError, StatusChange};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use std::cmp::Reverse;
use tracing::{debug, info, instrument, warn};

/// Client for interacting with the Order actor.
///
/// Placement itself (stock checks, the single-seller rule, the stock batch) happens in the
/// Order actor's `on_create` hook.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::from(e)
    }
}

fn newest_first(mut orders: Vec<Order>) -> Vec<Order> {
    orders.sort_by_key(|o| Reverse((o.placed_at, o.id)));
    orders
}

impl OrderClient {
    /// Places an order and returns it with the amount due for its lines.
    #[instrument(skip(self, params), fields(buyer = %params.buyer, lines = params.items.len()))]
    pub async fn place_order(&self, params: OrderCreate) -> Result<PlacedOrder, OrderError> {
        debug!("Sending create request");
        let id = self.inner.create(params).await?;
        let order = self
            .get(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))?;
        info!(order = %id, "Order stored");
        let total_amount = order
            .subtotal()
            .ok_or_else(|| OrderError::ValidationError(format!("{id} total is too large")))?;
        Ok(PlacedOrder {
            total_amount,
            order,
        })
    }

    /// Turns the buyer's cart into an order. The cart is cleared only once the order exists.
    #[instrument(skip(self, users))]
    pub async fn checkout(
        &self,
        users: &UserClient,
        buyer: UserId,
        delivery_to: AddressId,
        billing_to: AddressId,
    ) -> Result<PlacedOrder, OrderError> {
        let cart = users.cart(buyer).await?;
        if cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }
        let items = cart
            .into_iter()
            .map(|line| LineItemRequest {
                product: line.product,
                units_ordered: line.quantity,
                discount_applied: None,
            })
            .collect();

        let placed = self
            .place_order(OrderCreate {
                buyer,
                items,
                delivery_to,
                billing_to,
            })
            .await?;

        if let Err(e) = users.clear_cart(buyer).await {
            warn!(order = %placed.order.id, error = %e, "Order placed but cart not cleared");
        }
        Ok(placed)
    }

    async fn set_status(
        &self,
        id: OrderId,
        authority: Authority,
        status: OrderStatus,
    ) -> Result<StatusChange, OrderError> {
        let change = self
            .inner
            .perform_action(id, OrderAction::SetStatus { authority, status })
            .await?;
        if change.changed {
            info!(order = %id, %status, "Order status changed");
        }
        Ok(change)
    }

    /// Seller status update: `raw` is case-normalized and must name `Shipped` or `Delivered`.
    #[instrument(skip(self))]
    pub async fn set_status_as_seller(
        &self,
        id: OrderId,
        seller: UserId,
        raw: &str,
    ) -> Result<StatusChange, OrderError> {
        let status = OrderStatus::parse_normalized(raw)
            .filter(|s| OrderStatus::SELLER_TARGETS.contains(s))
            .ok_or_else(|| OrderError::SellerStatusNotAllowed(raw.to_string()))?;
        self.set_status(id, Authority::Seller(seller), status).await
    }

    /// Admin status update: `raw` must be one of the eight status literals exactly.
    #[instrument(skip(self))]
    pub async fn set_status_as_admin(
        &self,
        id: OrderId,
        raw: &str,
    ) -> Result<StatusChange, OrderError> {
        let status: OrderStatus = raw
            .parse()
            .map_err(|_| OrderError::InvalidStatus(raw.to_string()))?;
        self.set_status(id, Authority::Admin, status).await
    }

    /// Orders placed by `buyer`, newest first.
    #[instrument(skip(self))]
    pub async fn for_buyer(&self, buyer: UserId) -> Result<Vec<Order>, OrderError> {
        let orders = self.list().await?;
        Ok(newest_first(
            orders.into_iter().filter(|o| o.buyer == buyer).collect(),
        ))
    }

    /// Every order with at least one line, newest first.
    #[instrument(skip(self))]
    pub async fn with_items(&self) -> Result<Vec<Order>, OrderError> {
        let orders = self.list().await?;
        Ok(newest_first(
            orders.into_iter().filter(|o| !o.items.is_empty()).collect(),
        ))
    }

    /// Every order, newest first.
    #[instrument(skip(self))]
    pub async fn all(&self) -> Result<Vec<Order>, OrderError> {
        Ok(newest_first(self.list().await?))
    }

    #[instrument(skip(self))]
    pub async fn stats(&self) -> Result<OrderStats, OrderError> {
        let orders = self.list().await?;
        Ok(OrderStats::from_orders(&orders))
    }
}
