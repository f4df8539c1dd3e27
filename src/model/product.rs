//! Catalog documents.
//!
//! # Actor Framework
//! [`Product`] implements the [`ActorEntity`](resource_actor::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](resource_actor::ResourceActor).
//!
//! See [`product_actor`](crate::product_actor) for details on:
//! - Creation parameters ([`ProductCreate`])
//! - Update parameters ([`ProductUpdate`])
//! - Custom actions ([`ProductAction`](crate::product_actor::ProductAction))
use super::UserId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub seller: UserId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: Decimal,
    pub stock: u32,
    pub available: bool,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

/// DTO for Product creation. `seller` is always the authenticated caller.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub seller: UserId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: Decimal,
    pub stock: u32,
    pub image: Option<String>,
}

// DTO for Product updates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: Option<Decimal>,
    pub stock: Option<u32>,
    pub image: Option<String>,
    pub available: Option<bool>,
}

/// Catalog browsing filter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductQuery {
    /// Case-insensitive substring of the product name.
    pub search: Option<String>,
    pub category: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl ProductQuery {
    pub const DEFAULT_LIMIT: u32 = 10;

    /// Page number, `1` when missing or zero.
    pub fn page(&self) -> u32 {
        self.page.filter(|p| *p > 0).unwrap_or(1)
    }

    /// Page size, [`Self::DEFAULT_LIMIT`] when missing or zero.
    pub fn limit(&self) -> u32 {
        self.limit.filter(|l| *l > 0).unwrap_or(Self::DEFAULT_LIMIT)
    }
}

/// One page of available products.
#[derive(Debug, Clone, Serialize)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub page: u32,
    pub pages: u32,
    pub total: u32,
}
