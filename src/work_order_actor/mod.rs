//! Work orders ("ordens de serviço") and the revenue figures derived from them.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::WorkOrderClient;
use crate::framework::ResourceActor;
use crate::model::WorkOrder;
use crate::store::Database;

/// Creates a new WorkOrder actor and its client.
pub fn new(buffer_size: usize, db: Database) -> (ResourceActor<WorkOrder>, WorkOrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, db);
    (actor, WorkOrderClient::new(generic_client))
}
