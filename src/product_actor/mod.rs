//! Parts inventory, including the low-stock queries behind the dashboard alert.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::ProductClient;
use crate::framework::ResourceActor;
use crate::model::Product;
use crate::store::Database;

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize, db: Database) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, db);
    (actor, ProductClient::new(generic_client))
}
