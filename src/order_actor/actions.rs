//! Status actions for the Order actor.

use crate::model::{Order, OrderStatus, UserId};

/// Who is asking for a status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authority {
    /// Any status, from any status. Re-setting `Shipped`/`Delivered` re-stamps the timestamp.
    Admin,
    /// Only the order's seller, only towards `Shipped`/`Delivered`, along the seller transition
    /// table. Requesting the current status is a no-op.
    Seller(UserId),
}

#[derive(Debug, Clone)]
pub enum OrderAction {
    SetStatus {
        authority: Authority,
        status: OrderStatus,
    },
}

/// Outcome of a status action.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusChange {
    pub order: Order,
    /// `false` when the order was already in the requested status and nothing was written.
    pub changed: bool,
}
