use crate::clients::ActorClient;
use crate::framework::ResourceClient;
use crate::model::Service;
use crate::service_actor::ServiceError;
use async_trait::async_trait;

/// Client for the service catalog. Only the standard record operations.
#[derive(Clone)]
pub struct ServiceClient {
    inner: ResourceClient<Service>,
}

impl ServiceClient {
    pub fn new(inner: ResourceClient<Service>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Service> for ServiceClient {
    type Error = ServiceError;

    fn inner(&self) -> &ResourceClient<Service> {
        &self.inner
    }
}
