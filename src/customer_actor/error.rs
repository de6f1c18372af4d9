//! Error types for the Customer actor.

use crate::store::StoreError;
use crate::vehicle_actor::VehicleError;
use thiserror::Error;

/// Errors that can occur during customer operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CustomerError {
    /// A required field is missing.
    #[error("Customer validation error: {0}")]
    ValidationError(String),

    #[error("Customer database error: {0}")]
    DatabaseError(#[from] StoreError),

    /// The vehicle lookup failed.
    #[error(transparent)]
    Vehicle(#[from] VehicleError),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CustomerError {
    fn from(msg: String) -> Self {
        CustomerError::ActorCommunicationError(msg)
    }
}
