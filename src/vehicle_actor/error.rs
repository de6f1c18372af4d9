//! Error types for the Vehicle actor.

use crate::store::StoreError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum VehicleError {
    /// A required field is missing.
    #[error("Vehicle validation error: {0}")]
    ValidationError(String),

    #[error("Vehicle database error: {0}")]
    DatabaseError(#[from] StoreError),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for VehicleError {
    fn from(msg: String) -> Self {
        VehicleError::ActorCommunicationError(msg)
    }
}
