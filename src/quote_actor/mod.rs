//! Quotes ("orçamentos"). Conversion into a work order is orchestrated by
//! [`QuoteClient`](crate::clients::QuoteClient), not by this actor.

pub mod entity;
pub mod error;

pub use entity::QuoteAction;
pub use error::*;

use crate::clients::{QuoteClient, WorkOrderClient};
use crate::framework::ResourceActor;
use crate::model::Quote;
use crate::store::Database;

/// Creates a new Quote actor and a client that converts through `work_orders`.
pub fn new(
    buffer_size: usize,
    db: Database,
    work_orders: WorkOrderClient,
) -> (ResourceActor<Quote>, QuoteClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, db);
    (actor, QuoteClient::new(generic_client, work_orders))
}
