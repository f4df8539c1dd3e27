use super::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressId(pub u32);

impl From<u32> for AddressId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for AddressId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "address_{}", self.0)
    }
}

/// A postal address owned by one user. Orders reference it by id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: AddressId,
    pub owner: UserId,
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct AddressCreate {
    pub owner: UserId,
    pub street: String,
    pub city: String,
    pub postal_code: String,
}
