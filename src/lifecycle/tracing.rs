//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered
//! by `RUST_LOG` (defaulting to `info`). Module paths are hidden; actor logs
//! carry an `entity_type` field instead.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: start and shutdown of each actor, with its table
//! - **Record operations**: `Created`, `Updated`, `Deleted` at info with the row id;
//!   `List` sizes and full payloads at debug
//! - **Failures**: validation and statement errors at warn, with the error text
//! - **Client spans**: every client method is `#[instrument]`ed, so actor logs nest
//!   under the call that caused them
//!
//! ```bash
//! RUST_LOG=info cargo run                      # one line per write
//! RUST_LOG=debug cargo run                     # payloads, list sizes, no-op updates
//! RUST_LOG=oficina::store=debug cargo run      # schema and connection only
//! ```
//!
//! With `RUST_LOG=debug`, converting a quote looks like:
//!
//! ```text
//! DEBUG convert_to_work_order{quote_id=3}:create: Sending request record=WorkOrder { .. }
//! DEBUG Create entity_type="WorkOrder" record=WorkOrder { id: 0, .. }
//!  INFO Created entity_type="WorkOrder" id=8
//!  INFO convert_to_work_order{quote_id=3}: Quote converted work_order_id=8
//! ```
use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false) // entity_type identifies the actor
        .compact()
        .init();
}
