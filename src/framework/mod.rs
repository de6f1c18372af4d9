//! Generic actor framework for table-backed records.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that record types implement to be served by an actor
//! - [`ResourceActor`] - Generic actor answering list/create/update/delete/action requests
//! - [`ResourceClient`] - Cloneable handle used to talk to an actor
//! - [`FrameworkError`] - Channel failures and boxed entity errors
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
