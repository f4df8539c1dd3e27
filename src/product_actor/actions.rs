//! Custom actions for the Product actor.
//!
//! These are the stock operations that go beyond CRUD. They run inside the catalog actor, so a
//! check and the decrement that follows it are one atomic step.

use crate::model::UserId;
use rust_decimal::Decimal;

/// Custom actions for Product entities.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Reads the current stock level without modifying it.
    CheckStock,
    /// Decrements stock by the given quantity if the product is available and enough is left.
    ///
    /// # Errors
    /// `Unavailable` if the product is switched off, `InsufficientStock` if the quantity exceeds
    /// the stock, `InvalidQuantity` for zero.
    ReserveStock(u32),
}

/// What a successful reservation captured.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    /// Price at the instant of the decrement; becomes the line's unit cost.
    pub unit_price: Decimal,
    pub seller: UserId,
    /// Stock left after the decrement.
    pub remaining: u32,
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    CheckStock(u32),
    ReserveStock(Reservation),
}
