//! # Product Client
//!
//! Provides a high‑level API for interacting with the `Product` actor.
//! It wraps a `ResourceClient<Product>` and exposes catalog and stock operations.
use crate::model::{Product, ProductCreate, ProductId, ProductPage, ProductQuery, ProductUpdate, UserId};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError, Reservation};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ProductError::from(e)
    }
}

impl ProductClient {
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(ProductError::from)
    }

    /// Fetches a product, turning an absent id into `NotFound`.
    pub async fn require(&self, id: ProductId) -> Result<Product, ProductError> {
        self.get(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    /// Applies `update` if `seller` owns the product.
    #[instrument(skip(self))]
    pub async fn update_owned(
        &self,
        id: ProductId,
        seller: UserId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        let product = self.require(id).await?;
        if product.seller != seller {
            return Err(ProductError::NotOwner(id));
        }
        self.inner.update(id, update).await.map_err(ProductError::from)
    }

    /// Deletes the product if `seller` owns it.
    #[instrument(skip(self))]
    pub async fn delete_owned(&self, id: ProductId, seller: UserId) -> Result<(), ProductError> {
        let product = self.require(id).await?;
        if product.seller != seller {
            return Err(ProductError::NotOwner(id));
        }
        self.delete(id).await
    }

    /// Check the current stock level for a product.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId) -> Result<u32, ProductError> {
        debug!("Checking stock");
        match self.inner.perform_action(id, ProductAction::CheckStock).await? {
            ProductActionResult::CheckStock(level) => Ok(level),
            other => Err(unexpected(&other)),
        }
    }

    /// Reserve a specific amount of stock for a product.
    #[instrument(skip(self))]
    pub async fn reserve_stock(
        &self,
        id: ProductId,
        quantity: u32,
    ) -> Result<Reservation, ProductError> {
        debug!("Reserving stock");
        match self
            .inner
            .perform_action(id, ProductAction::ReserveStock(quantity))
            .await?
        {
            ProductActionResult::ReserveStock(reservation) => Ok(reservation),
            other => Err(unexpected(&other)),
        }
    }

    /// Reserves every `(product, quantity)` pair as one unit: either all decrements are committed
    /// or none is. Results come back in input order.
    #[instrument(skip(self))]
    pub async fn reserve_all(
        &self,
        lines: Vec<(ProductId, u32)>,
    ) -> Result<Vec<Reservation>, ProductError> {
        debug!(count = lines.len(), "Reserving batch");
        let actions = lines
            .into_iter()
            .map(|(id, quantity)| (id, ProductAction::ReserveStock(quantity)))
            .collect();

        self.inner
            .perform_batch(actions)
            .await?
            .into_iter()
            .map(|result| match result {
                ProductActionResult::ReserveStock(reservation) => Ok(reservation),
                other => Err(unexpected(&other)),
            })
            .collect()
    }

    /// Available products matching the query, one page at a time, ordered by id.
    #[instrument(skip(self))]
    pub async fn browse(&self, query: ProductQuery) -> Result<ProductPage, ProductError> {
        let needle = query.search.as_deref().map(str::to_lowercase);
        let matching: Vec<Product> = self
            .list()
            .await?
            .into_iter()
            .filter(|p| p.available)
            .filter(|p| match &needle {
                Some(needle) => p.name.to_lowercase().contains(needle.as_str()),
                None => true,
            })
            .filter(|p| match &query.category {
                Some(category) => p.category.eq_ignore_ascii_case(category),
                None => true,
            })
            .collect();

        let (page, limit) = (query.page(), query.limit());
        let total = u32::try_from(matching.len()).unwrap_or(u32::MAX);
        let skip = (page as usize - 1).saturating_mul(limit as usize);
        let products = matching.into_iter().skip(skip).take(limit as usize).collect();

        Ok(ProductPage {
            products,
            page,
            pages: total.div_ceil(limit),
            total,
        })
    }

    /// Every product of one seller, available or not.
    #[instrument(skip(self))]
    pub async fn by_seller(&self, seller: UserId) -> Result<Vec<Product>, ProductError> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|p| p.seller == seller)
            .collect())
    }
}

fn unexpected(result: &ProductActionResult) -> ProductError {
    ProductError::ActorCommunicationError(format!("unexpected action result: {result:?}"))
}
