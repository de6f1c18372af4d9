//! # Customer Client
//!
//! Wraps a `ResourceClient<Customer>` and adds the customer-with-vehicles lookup.
use crate::clients::ActorClient;
use crate::customer_actor::{CustomerAction, CustomerError};
use crate::framework::ResourceClient;
use crate::model::{Customer, CustomerWithVehicles};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Customer actor.
#[derive(Clone)]
pub struct CustomerClient {
    inner: ResourceClient<Customer>,
}

impl CustomerClient {
    pub fn new(inner: ResourceClient<Customer>) -> Self {
        Self { inner }
    }

    /// The customer named exactly `name` and their vehicles, or `None`.
    #[instrument(skip(self))]
    pub async fn with_vehicles(
        &self,
        name: &str,
    ) -> Result<Option<CustomerWithVehicles>, CustomerError> {
        debug!("Sending request");
        self.inner
            .perform_action(CustomerAction::WithVehicles(name.to_string()))
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Customer> for CustomerClient {
    type Error = CustomerError;

    fn inner(&self) -> &ResourceClient<Customer> {
        &self.inner
    }
}
