//! The service catalog: plain CRUD, no custom actions.

pub mod entity;
pub mod error;

pub use entity::ServiceAction;
pub use error::*;

use crate::clients::ServiceClient;
use crate::framework::ResourceActor;
use crate::model::Service;
use crate::store::Database;

/// Creates a new Service actor and its client.
pub fn new(buffer_size: usize, db: Database) -> (ResourceActor<Service>, ServiceClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, db);
    (actor, ServiceClient::new(generic_client))
}
