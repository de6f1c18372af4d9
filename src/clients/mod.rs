//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).
//!
//! Every record client gets list/create/update/delete from [`ActorClient`] and
//! adds the entity's own queries on top.

pub mod actor_client;
pub mod config_client;
pub mod customer_client;
pub mod product_client;
pub mod quote_client;
pub mod service_client;
pub mod vehicle_client;
pub mod work_order_client;

pub use actor_client::ActorClient;
pub use config_client::*;
pub use customer_client::*;
pub use product_client::*;
pub use quote_client::*;
pub use service_client::*;
pub use vehicle_client::*;
pub use work_order_client::*;
