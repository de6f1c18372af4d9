//! Vehicle records and the owner-name lookup.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::VehicleClient;
use crate::framework::ResourceActor;
use crate::model::Vehicle;
use crate::store::Database;

/// Creates a new Vehicle actor and its client.
pub fn new(buffer_size: usize, db: Database) -> (ResourceActor<Vehicle>, VehicleClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, db);
    (actor, VehicleClient::new(generic_client))
}
