//! Customer records. Resolving a customer's vehicles goes through the
//! vehicle actor, which is injected as this actor's context.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::CustomerClient;
use crate::framework::ResourceActor;
use crate::model::Customer;
use crate::store::Database;

/// Creates a new Customer actor and its client.
///
/// Run the actor with a [`VehicleClient`](crate::clients::VehicleClient) as context.
pub fn new(buffer_size: usize, db: Database) -> (ResourceActor<Customer>, CustomerClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, db);
    (actor, CustomerClient::new(generic_client))
}
