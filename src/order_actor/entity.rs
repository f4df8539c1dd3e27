//! [`ActorEntity`] implementation for [`Order`]: placement in `on_create`, the status machine in
//! `handle_action`.

use super::actions::{Authority, OrderAction, StatusChange};
use super::error::OrderError;
use crate::clients::ProductClient;
use crate::model::{line_amount, LineItem, Order, OrderCreate, OrderId, OrderStatus, UserId};
use async_trait::async_trait;
use chrono::Utc;
use resource_actor::{ActorClient, ActorEntity};
use rust_decimal::Decimal;
use tracing::{debug, error, info};

const TOTAL_TOO_LARGE: &str = "Order total is too large";

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = ();
    type Action = OrderAction;
    type ActionResult = StatusChange;
    type Context = ProductClient;
    type Error = OrderError;

    /// Checks the request shape. Seller and line items are filled in by `on_create`.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        if params.items.is_empty() {
            return Err(OrderError::EmptyOrder);
        }
        if let Some(line) = params.items.iter().find(|line| line.units_ordered == 0) {
            return Err(OrderError::ValidationError(format!(
                "unitsOrdered must be at least 1 for {}",
                line.product
            )));
        }

        Ok(Self {
            id,
            buyer: params.buyer,
            seller: UserId::default(),
            delivery_to: params.delivery_to,
            billing_to: params.billing_to,
            items: Vec::new(),
            extra_charges: Decimal::ZERO,
            status: OrderStatus::Placed,
            placed_at: Utc::now(),
            dispatched_at: None,
            completed_at: None,
            requested: params.items,
        })
    }

    /// Places the order.
    ///
    /// 1. Every line is checked in input order against the catalog: the product must exist and
    ///    be available, have enough stock, and share the first line's seller. The running total
    ///    must stay representable.
    /// 2. All decrements go to the catalog as one batch, which re-checks stock atomically and
    ///    commits every decrement or none.
    /// 3. Unit costs are taken from the batch results, i.e. the prices at the decrement.
    ///
    /// Any failure leaves the catalog untouched and the order is not stored.
    async fn on_create(&mut self, products: &ProductClient) -> Result<(), OrderError> {
        let requested = std::mem::take(&mut self.requested);
        let mut seller: Option<UserId> = None;
        let mut total = Decimal::ZERO;

        for line in &requested {
            let product = products
                .get(line.product)
                .await?
                .filter(|p| p.available)
                .ok_or_else(|| OrderError::ProductUnavailable(line.product.to_string()))?;

            if product.stock < line.units_ordered {
                return Err(OrderError::InsufficientStock(product.name));
            }
            match seller {
                None => seller = Some(product.seller),
                Some(first) if first != product.seller => return Err(OrderError::MixedSeller),
                Some(_) => {}
            }
            total = line_amount(product.price, line.units_ordered)
                .and_then(|amount| total.checked_add(amount))
                .ok_or_else(|| OrderError::ValidationError(TOTAL_TOO_LARGE.into()))?;
        }
        let seller = seller.ok_or(OrderError::EmptyOrder)?;
        debug!(order = %self.id, %seller, lines = requested.len(), "Lines validated");

        let reservations = products
            .reserve_all(
                requested
                    .iter()
                    .map(|line| (line.product, line.units_ordered))
                    .collect(),
            )
            .await?;

        self.seller = seller;
        self.items = requested
            .into_iter()
            .zip(reservations)
            .map(|(line, reservation)| LineItem {
                product: line.product,
                units_ordered: line.units_ordered,
                unit_cost: reservation.unit_price,
                discount_applied: line.discount_applied.unwrap_or_default(),
            })
            .collect();

        // Only reachable if a price rose between validation and the batch.
        let Some(total) = self.subtotal() else {
            error!(order = %self.id, "Total overflowed after stock was reserved");
            return Err(OrderError::ValidationError(TOTAL_TOO_LARGE.into()));
        };
        info!(order = %self.id, buyer = %self.buyer, %total, "Order placed");
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _ctx: &ProductClient) -> Result<(), OrderError> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &ProductClient,
    ) -> Result<StatusChange, OrderError> {
        match action {
            OrderAction::SetStatus {
                authority: Authority::Admin,
                status,
            } => {
                self.apply_status(status, Utc::now());
                Ok(StatusChange {
                    order: self.clone(),
                    changed: true,
                })
            }
            OrderAction::SetStatus {
                authority: Authority::Seller(caller),
                status,
            } => {
                if !OrderStatus::SELLER_TARGETS.contains(&status) {
                    return Err(OrderError::SellerStatusNotAllowed(status.to_string()));
                }
                if self.seller != caller {
                    return Err(OrderError::NotOwner);
                }
                if self.status == status {
                    return Ok(StatusChange {
                        order: self.clone(),
                        changed: false,
                    });
                }
                if !self.status.seller_can_move_to(status) {
                    return Err(OrderError::InvalidTransition {
                        from: self.status,
                        to: status,
                    });
                }
                self.apply_status(status, Utc::now());
                Ok(StatusChange {
                    order: self.clone(),
                    changed: true,
                })
            }
        }
    }
}
