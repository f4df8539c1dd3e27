use super::{ProductId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Reviews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewId(pub u32);

impl From<u32> for ReviewId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ReviewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "review_{}", self.0)
    }
}

/// A star rating left on a product. Only its author may delete it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub product: ProductId,
    pub author: UserId,
    /// 1 to 5.
    pub stars: u8,
    pub comments: String,
    pub reviewed_on: DateTime<Utc>,
}

impl Review {
    pub const MIN_STARS: u8 = 1;
    pub const MAX_STARS: u8 = 5;
}

/// Payload for a new review. `stars` is checked against the 1..=5 range on creation.
#[derive(Debug, Clone)]
pub struct ReviewCreate {
    pub product: ProductId,
    pub author: UserId,
    pub stars: i64,
    pub comments: String,
}
