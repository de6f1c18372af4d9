//! Error types for the Product actor.

use crate::store::StoreError;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// A required field is missing or a quantity is negative.
    #[error("Product validation error: {0}")]
    ValidationError(String),

    /// An underlying database error occurred.
    #[error("Product database error: {0}")]
    DatabaseError(#[from] StoreError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ProductError {
    fn from(msg: String) -> Self {
        ProductError::ActorCommunicationError(msg)
    }
}
