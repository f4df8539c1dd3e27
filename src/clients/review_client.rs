use crate::model::{ProductId, Review, ReviewCreate, ReviewId, UserId};
use crate::review_actor::ReviewError;
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use std::cmp::Reverse;
use tracing::{debug, info, instrument};

/// Client for interacting with the Review actor.
#[derive(Clone)]
pub struct ReviewClient {
    inner: ResourceClient<Review>,
}

impl ReviewClient {
    pub fn new(inner: ResourceClient<Review>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Review> for ReviewClient {
    type Error = ReviewError;

    fn inner(&self) -> &ResourceClient<Review> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ReviewError::from(e)
    }
}

impl ReviewClient {
    #[instrument(skip(self, params), fields(product = %params.product, author = %params.author))]
    pub async fn add(&self, params: ReviewCreate) -> Result<Review, ReviewError> {
        debug!("Sending create request");
        let id = self.inner.create(params).await?;
        let review = self
            .get(id)
            .await?
            .ok_or_else(|| ReviewError::NotFound(id.to_string()))?;
        info!(review = %id, stars = review.stars, "Review added");
        Ok(review)
    }

    /// Reviews of one product, newest first.
    #[instrument(skip(self))]
    pub async fn for_product(&self, product: ProductId) -> Result<Vec<Review>, ReviewError> {
        let mut reviews: Vec<Review> = self
            .list()
            .await?
            .into_iter()
            .filter(|r| r.product == product)
            .collect();
        reviews.sort_by_key(|r| Reverse((r.reviewed_on, r.id)));
        Ok(reviews)
    }

    /// Deletes the review if `author` wrote it.
    #[instrument(skip(self))]
    pub async fn delete_own(&self, id: ReviewId, author: UserId) -> Result<(), ReviewError> {
        let review = self
            .get(id)
            .await?
            .ok_or_else(|| ReviewError::NotFound(id.to_string()))?;
        if review.author != author {
            return Err(ReviewError::NotAuthor);
        }
        self.delete(id).await
    }
}
