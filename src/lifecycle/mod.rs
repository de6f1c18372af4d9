//! # System Lifecycle & Orchestration
//!
//! [`OficinaSystem`] opens the store, creates every actor, wires the ones that
//! depend on each other and owns their task handles.
//!
//! ## Wiring
//!
//! Actors are created first and receive their dependencies when started
//! (`run(context)`), so construction order does not matter:
//!
//! - Customer actor runs with a [`VehicleClient`](crate::clients::VehicleClient)
//!   for the customer-with-vehicles lookup.
//! - [`QuoteClient`](crate::clients::QuoteClient) is built with a
//!   [`WorkOrderClient`](crate::clients::WorkOrderClient) for conversion.
//! - Everything else has no dependencies.
//!
//! The graph is acyclic, so dropping every client lets each actor's channel
//! close and [`OficinaSystem::shutdown`] can await them in any order.
//!
//! ## Graceful Shutdown
//!
//! 1. Drop all clients (including any [`Bridge`](crate::bridge::Bridge) made
//!    from the system) so channels close
//! 2. Each actor sees `recv()` return `None`, logs and exits
//! 3. Await every task handle

pub mod oficina_system;
pub mod tracing;

pub use self::oficina_system::OficinaSystem;
pub use self::tracing::setup_tracing;
