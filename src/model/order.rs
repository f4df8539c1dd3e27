//! Order documents, the status lifecycle and the statistics rollup.
//!
//! # Status lifecycle
//!
//! ```text
//! Placed -> Packed -> Shipped -> In Transit -> Delivered
//!    \________\_________\___________\------> Cancelled | Failed Delivery | Returned
//! ```
//!
//! Admins may set any status from any status. Sellers may only move an order to `Shipped`
//! (from `Placed`, `Packed`, `In Transit`) or `Delivered` (from `Placed`, `Packed`, `Shipped`,
//! `In Transit`); see [`OrderStatus::seller_can_move_to`].
use super::{AddressId, ProductId, UserId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Persisted order status. The serialized literals are part of the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Placed,
    Packed,
    Shipped,
    #[serde(rename = "In Transit")]
    InTransit,
    Delivered,
    Cancelled,
    #[serde(rename = "Failed Delivery")]
    FailedDelivery,
    Returned,
}

impl OrderStatus {
    /// Every status, in display order.
    pub const ALL: [OrderStatus; 8] = [
        OrderStatus::Placed,
        OrderStatus::Packed,
        OrderStatus::Shipped,
        OrderStatus::InTransit,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
        OrderStatus::FailedDelivery,
        OrderStatus::Returned,
    ];

    /// The only targets the seller endpoint accepts.
    pub const SELLER_TARGETS: [OrderStatus; 2] = [OrderStatus::Shipped, OrderStatus::Delivered];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Placed => "Placed",
            OrderStatus::Packed => "Packed",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::InTransit => "In Transit",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::FailedDelivery => "Failed Delivery",
            OrderStatus::Returned => "Returned",
        }
    }

    /// Parses seller input: the first letter is upper-cased and the rest lower-cased before the
    /// exact match, so `"delivered"` and `"DELIVERED"` both give `Delivered`.
    pub fn parse_normalized(input: &str) -> Option<Self> {
        let mut chars = input.chars();
        let first = chars.next()?;
        let normalized: String = first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect();
        normalized.parse().ok()
    }

    /// Whether a seller may move an order currently in `self` to `target`.
    ///
    /// Requesting the current status is handled by the caller as a no-op and is not a move.
    pub fn seller_can_move_to(self, target: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, target),
            (Placed | Packed | InTransit, Shipped) | (Placed | Packed | Shipped | InTransit, Delivered)
        )
    }

    fn display_rank(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(Self::ALL.len())
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact-literal parse, as used by the admin endpoint.
impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// One product line of an order. Immutable once the order exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product: ProductId,
    pub units_ordered: u32,
    /// Product price at placement time.
    pub unit_cost: Decimal,
    pub discount_applied: Decimal,
}

impl LineItem {
    /// `None` when the product does not fit in a `Decimal`.
    pub fn line_total(&self) -> Option<Decimal> {
        line_amount(self.unit_cost, self.units_ordered)
    }
}

/// `price × units`, or `None` on overflow.
pub fn line_amount(price: Decimal, units: u32) -> Option<Decimal> {
    price.checked_mul(Decimal::from(units))
}

/// A requested line, before stock is checked and the price is captured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemRequest {
    pub product: ProductId,
    pub units_ordered: u32,
    #[serde(default)]
    pub discount_applied: Option<Decimal>,
}

/// Represents a placed order.
///
/// # Actor Framework
/// Managed by a [`ResourceActor`](resource_actor::ResourceActor). Placement (stock checks,
/// the single-seller rule, price snapshots and the stock decrement) runs in the entity's
/// `on_create` hook; see [`order_actor`](crate::order_actor).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub buyer: UserId,
    pub seller: UserId,
    pub delivery_to: AddressId,
    pub billing_to: AddressId,
    pub items: Vec<LineItem>,
    pub extra_charges: Decimal,
    pub status: OrderStatus,
    pub placed_at: DateTime<Utc>,
    pub dispatched_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    /// Lines waiting for `on_create`; always empty on a stored order.
    #[serde(skip)]
    pub(crate) requested: Vec<LineItemRequest>,
}

impl Order {
    /// Σ unit cost × units over all lines. `None` on overflow; placement never stores an order
    /// whose subtotal overflows.
    pub fn subtotal(&self) -> Option<Decimal> {
        self.items
            .iter()
            .try_fold(Decimal::ZERO, |sum, line| sum.checked_add(line.line_total()?))
    }

    /// Subtotal plus extra charges; the figure the statistics aggregate.
    pub fn value(&self) -> Option<Decimal> {
        self.subtotal()?.checked_add(self.extra_charges)
    }

    /// Sets the status and stamps `dispatched_at` / `completed_at` when entering `Shipped` /
    /// `Delivered`.
    pub fn apply_status(&mut self, status: OrderStatus, now: DateTime<Utc>) {
        self.status = status;
        match status {
            OrderStatus::Shipped => self.dispatched_at = Some(now),
            OrderStatus::Delivered => self.completed_at = Some(now),
            _ => {}
        }
    }
}

/// Payload for placing a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub buyer: UserId,
    pub items: Vec<LineItemRequest>,
    pub delivery_to: AddressId,
    pub billing_to: AddressId,
}

/// A freshly placed order and the amount the buyer owes for its lines.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedOrder {
    pub order: Order,
    pub total_amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusStat {
    pub status: OrderStatus,
    pub count: u32,
    pub total_value: Decimal,
}

/// Counts and summed [`Order::value`] per status. Sums saturate at [`Decimal::MAX`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStats {
    pub total_orders: u32,
    pub total_revenue: Decimal,
    /// Most frequent status first.
    pub status_stats: Vec<StatusStat>,
}

impl OrderStats {
    pub fn from_orders<'a>(orders: impl IntoIterator<Item = &'a Order>) -> Self {
        let mut groups: HashMap<OrderStatus, StatusStat> = HashMap::new();
        let mut total_orders = 0;

        for order in orders {
            total_orders += 1;
            let stat = groups.entry(order.status).or_insert(StatusStat {
                status: order.status,
                count: 0,
                total_value: Decimal::ZERO,
            });
            stat.count += 1;
            let value = order.value().unwrap_or(Decimal::MAX);
            stat.total_value = stat.total_value.saturating_add(value);
        }

        let mut status_stats: Vec<StatusStat> = groups.into_values().collect();
        status_stats.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then(a.status.display_rank().cmp(&b.status.display_rank()))
        });
        let total_revenue = status_stats
            .iter()
            .fold(Decimal::ZERO, |sum, s| sum.saturating_add(s.total_value));

        Self {
            total_orders,
            total_revenue,
            status_stats,
        }
    }
}
