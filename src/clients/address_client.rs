use crate::address_actor::AddressError;
use crate::model::{Address, AddressCreate, UserId};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Address actor.
#[derive(Clone)]
pub struct AddressClient {
    inner: ResourceClient<Address>,
}

impl AddressClient {
    pub fn new(inner: ResourceClient<Address>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Address> for AddressClient {
    type Error = AddressError;

    fn inner(&self) -> &ResourceClient<Address> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        AddressError::from(e)
    }
}

impl AddressClient {
    /// Stores a new address and returns it.
    #[instrument(skip(self))]
    pub async fn add(&self, params: AddressCreate) -> Result<Address, AddressError> {
        debug!("Sending request");
        let id = self.inner.create(params).await?;
        self.get(id)
            .await?
            .ok_or_else(|| AddressError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn for_owner(&self, owner: UserId) -> Result<Vec<Address>, AddressError> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|a| a.owner == owner)
            .collect())
    }
}
