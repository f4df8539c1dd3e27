//! Cart actions for the User actor.
//!
//! The cart lives on the user document, so every cart change is an action on that document.
//! Actions that add quantity look the product up through the catalog client in the actor's
//! context; the check is advisory and is repeated from scratch at checkout.

use crate::model::ProductId;

#[derive(Debug, Clone)]
pub enum CartAction {
    /// Adds units of a product, merging into an existing line.
    ///
    /// Fails if the product is unavailable, has fewer units in stock than the merged line would
    /// hold, or belongs to a different seller than any product already in the cart.
    Add { product: ProductId, quantity: u32 },
    /// Replaces the quantity of an existing line (at least 1, re-checked against stock).
    SetQuantity { product: ProductId, quantity: u32 },
    /// Drops a product's line. Removing an absent product is not an error.
    Remove(ProductId),
    Clear,
}
