//! # Oficina
//!
//! Persistence and call surface for a small auto-repair shop: customers,
//! vehicles, stock, the service catalog, quotes, work orders and a key/value
//! settings table, all kept in one local SQLite file.
//!
//! ## Design
//!
//! Each table is owned by an actor. Actors run in their own Tokio task,
//! process requests one at a time and share a single connection through
//! [`store::Database`]. The rest of the app only sees typed clients.
//!
//! Errors are typed per actor (`CustomerError`, `QuoteError`, ...) and
//! travel through the framework unchanged, so callers can match on them.
//! Dependencies between actors are injected when an actor starts
//! (`run(context)`), not when it is built.
//!
//! ## Module Tour
//!
//! - [`framework`]: the generic `ResourceActor<T>` loop, [`ActorEntity`](framework::ActorEntity)
//!   and the test mocks.
//! - [`store`]: the SQLite connection, schema and the JSON column codec.
//! - [`model`]: plain records with their camelCase JSON shape, totals and
//!   status rules.
//! - [`customer_actor`], [`vehicle_actor`], [`product_actor`],
//!   [`service_actor`], [`quote_actor`], [`work_order_actor`]: one
//!   `ActorEntity` per table with its SQL and queries.
//! - [`config_actor`]: the settings table (keys, not ids).
//! - [`clients`]: the typed handles, including quote conversion.
//! - [`lifecycle`]: [`OficinaSystem`](lifecycle::OficinaSystem) startup and
//!   shutdown, plus tracing setup.
//! - [`bridge`]: named channels for the desktop shell.
//! - [`settings`]: where the database lives.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=debug OFICINA_DB_PATH=./oficina.db cargo run
//! ```

pub mod bridge;
pub mod clients;
pub mod config_actor;
pub mod customer_actor;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
pub mod quote_actor;
pub mod service_actor;
pub mod settings;
pub mod store;
pub mod vehicle_actor;
pub mod work_order_actor;
