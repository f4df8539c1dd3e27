//! Response shapes with referenced documents filled in.
//!
//! Orders and carts store ids only. These views resolve the ids for display; a reference whose
//! document has since been deleted renders as `null` next to the raw id.

use super::{ApiError, ApiResult, AppState};
use crate::clients::ActorClient;
use crate::model::{
    Address, AddressId, CartItem, Order, OrderId, OrderStatus, Product, ProductId, Review,
    ReviewId, User, UserId,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub image: Option<String>,
}

impl From<&Product> for ProductSummary {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            price: p.price,
            image: p.image.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartySummary {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl From<&User> for PartySummary {
    fn from(u: &User) -> Self {
        Self {
            id: u.id,
            name: u.name.clone(),
            email: u.email.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemView {
    pub product_id: ProductId,
    pub product: Option<ProductSummary>,
    pub units_ordered: u32,
    pub unit_cost: Decimal,
    pub discount_applied: Decimal,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderView {
    pub id: OrderId,
    pub buyer_id: UserId,
    pub seller_id: UserId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer: Option<PartySummary>,
    pub delivery_to: AddressId,
    pub billing_to: AddressId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    pub items: Vec<LineItemView>,
    pub extra_charges: Decimal,
    pub total_amount: Decimal,
    pub status: OrderStatus,
    pub placed_at: DateTime<Utc>,
    pub dispatched_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
    pub product_id: ProductId,
    pub product: Option<ProductSummary>,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewView {
    pub id: ReviewId,
    pub product_id: ProductId,
    pub author_id: UserId,
    pub author: Option<PartySummary>,
    pub stars: u8,
    pub comments: String,
    pub reviewed_on: DateTime<Utc>,
}

/// How much of an order's surroundings to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detail {
    /// Product summaries on every line.
    Products,
    /// Products plus buyer and both addresses.
    Full,
}

/// Memoizing lookups, so a list of orders fetches each referenced document once.
struct Resolver<'a> {
    state: &'a AppState,
    products: HashMap<ProductId, Option<ProductSummary>>,
    users: HashMap<UserId, Option<PartySummary>>,
    addresses: HashMap<AddressId, Option<Address>>,
}

impl<'a> Resolver<'a> {
    fn new(state: &'a AppState) -> Self {
        Self {
            state,
            products: HashMap::new(),
            users: HashMap::new(),
            addresses: HashMap::new(),
        }
    }

    async fn product(&mut self, id: ProductId) -> ApiResult<Option<ProductSummary>> {
        if let Some(hit) = self.products.get(&id) {
            return Ok(hit.clone());
        }
        let summary = self.state.products.get(id).await?.as_ref().map(ProductSummary::from);
        self.products.insert(id, summary.clone());
        Ok(summary)
    }

    async fn user(&mut self, id: UserId) -> ApiResult<Option<PartySummary>> {
        if let Some(hit) = self.users.get(&id) {
            return Ok(hit.clone());
        }
        let summary = self.state.users.get(id).await?.as_ref().map(PartySummary::from);
        self.users.insert(id, summary.clone());
        Ok(summary)
    }

    async fn address(&mut self, id: AddressId) -> ApiResult<Option<Address>> {
        if let Some(hit) = self.addresses.get(&id) {
            return Ok(hit.clone());
        }
        let address = self.state.addresses.get(id).await?;
        self.addresses.insert(id, address.clone());
        Ok(address)
    }

    async fn order(&mut self, order: Order, detail: Detail) -> ApiResult<OrderView> {
        let mut items = Vec::with_capacity(order.items.len());
        for line in &order.items {
            items.push(LineItemView {
                product_id: line.product,
                product: self.product(line.product).await?,
                units_ordered: line.units_ordered,
                unit_cost: line.unit_cost,
                discount_applied: line.discount_applied,
            });
        }

        let (buyer, delivery_address, billing_address) = match detail {
            Detail::Products => (None, None, None),
            Detail::Full => (
                self.user(order.buyer).await?,
                self.address(order.delivery_to).await?,
                self.address(order.billing_to).await?,
            ),
        };

        let total_amount = order
            .subtotal()
            .ok_or_else(|| ApiError::Internal(format!("{} total overflows", order.id)))?;
        Ok(OrderView {
            total_amount,
            id: order.id,
            buyer_id: order.buyer,
            seller_id: order.seller,
            buyer,
            delivery_to: order.delivery_to,
            billing_to: order.billing_to,
            delivery_address,
            billing_address,
            items,
            extra_charges: order.extra_charges,
            status: order.status,
            placed_at: order.placed_at,
            dispatched_at: order.dispatched_at,
            completed_at: order.completed_at,
        })
    }
}

pub async fn order_views(
    state: &AppState,
    orders: Vec<Order>,
    detail: Detail,
) -> ApiResult<Vec<OrderView>> {
    let mut resolver = Resolver::new(state);
    let mut views = Vec::with_capacity(orders.len());
    for order in orders {
        views.push(resolver.order(order, detail).await?);
    }
    Ok(views)
}

pub async fn cart_view(state: &AppState, cart: Vec<CartItem>) -> ApiResult<Vec<CartLineView>> {
    let mut resolver = Resolver::new(state);
    let mut lines = Vec::with_capacity(cart.len());
    for line in cart {
        lines.push(CartLineView {
            product_id: line.product,
            product: resolver.product(line.product).await?,
            quantity: line.quantity,
        });
    }
    Ok(lines)
}

pub async fn review_views(state: &AppState, reviews: Vec<Review>) -> ApiResult<Vec<ReviewView>> {
    let mut resolver = Resolver::new(state);
    let mut views = Vec::with_capacity(reviews.len());
    for review in reviews {
        views.push(ReviewView {
            author: resolver.user(review.author).await?,
            id: review.id,
            product_id: review.product,
            author_id: review.author,
            stars: review.stars,
            comments: review.comments,
            reviewed_on: review.reviewed_on,
        });
    }
    Ok(views)
}
