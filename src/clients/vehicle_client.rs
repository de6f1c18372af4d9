//! # Vehicle Client
use crate::clients::ActorClient;
use crate::framework::ResourceClient;
use crate::model::Vehicle;
use crate::vehicle_actor::{VehicleAction, VehicleError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Vehicle actor.
#[derive(Clone)]
pub struct VehicleClient {
    inner: ResourceClient<Vehicle>,
}

impl VehicleClient {
    pub fn new(inner: ResourceClient<Vehicle>) -> Self {
        Self { inner }
    }

    /// Vehicles registered under this exact owner name.
    #[instrument(skip(self))]
    pub async fn owned_by(&self, name: &str) -> Result<Vec<Vehicle>, VehicleError> {
        debug!("Sending request");
        self.inner
            .perform_action(VehicleAction::OwnedBy(name.to_string()))
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Vehicle> for VehicleClient {
    type Error = VehicleError;

    fn inner(&self) -> &ResourceClient<Vehicle> {
        &self.inner
    }
}
