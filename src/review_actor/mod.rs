//! # Review Actor
//!
//! Star ratings on products. Creation checks the rating range and, through the catalog client in
//! the actor's context, that the product exists. Reviews are never edited; the author may delete
//! one.

pub mod error;

pub use error::*;

use crate::clients::{ProductClient, ReviewClient};
use crate::model::{Review, ReviewCreate, ReviewId};
use async_trait::async_trait;
use chrono::Utc;
use resource_actor::{ActorClient, ActorEntity, ResourceActor};
use tracing::debug;

#[async_trait]
impl ActorEntity for Review {
    type Id = ReviewId;
    type Create = ReviewCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Context = ProductClient;
    type Error = ReviewError;

    fn from_create_params(id: ReviewId, params: ReviewCreate) -> Result<Self, ReviewError> {
        let stars = u8::try_from(params.stars)
            .ok()
            .filter(|s| (Review::MIN_STARS..=Review::MAX_STARS).contains(s))
            .ok_or_else(|| {
                ReviewError::ValidationError("Rating must be between 1 and 5 stars".into())
            })?;
        Ok(Self {
            id,
            product: params.product,
            author: params.author,
            stars,
            comments: params.comments.trim().to_string(),
            reviewed_on: Utc::now(),
        })
    }

    async fn on_create(&mut self, products: &ProductClient) -> Result<(), ReviewError> {
        if products.get(self.product).await?.is_none() {
            return Err(ReviewError::ProductNotFound(self.product));
        }
        debug!(review = %self.id, product = %self.product, "Product checked");
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _ctx: &ProductClient) -> Result<(), ReviewError> {
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &ProductClient) -> Result<(), ReviewError> {
        Ok(())
    }
}

/// Creates a new Review actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Review>, ReviewClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, ReviewClient::new(generic_client))
}
