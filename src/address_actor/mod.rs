//! # Address Actor
//!
//! Postal addresses owned by users. The simplest collection: no dependencies, no custom actions,
//! no updates. Orders reference addresses by id and do not re-validate them.

pub mod error;

pub use error::*;

use crate::clients::AddressClient;
use crate::model::{Address, AddressCreate, AddressId};
use async_trait::async_trait;
use chrono::Utc;
use resource_actor::{ActorEntity, ResourceActor};

#[async_trait]
impl ActorEntity for Address {
    type Id = AddressId;
    type Create = AddressCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = AddressError;

    fn from_create_params(id: AddressId, params: AddressCreate) -> Result<Self, AddressError> {
        let fields = [&params.street, &params.city, &params.postal_code];
        if fields.iter().any(|field| field.trim().is_empty()) {
            return Err(AddressError::ValidationError(
                "All address fields are required".into(),
            ));
        }
        Ok(Self {
            id,
            owner: params.owner,
            street: params.street.trim().to_string(),
            city: params.city.trim().to_string(),
            postal_code: params.postal_code.trim().to_string(),
            created_at: Utc::now(),
        })
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), AddressError> {
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), AddressError> {
        Ok(())
    }
}

/// Creates a new Address actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Address>, AddressClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, AddressClient::new(generic_client))
}
