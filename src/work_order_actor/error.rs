//! Error types for the WorkOrder actor.

use crate::store::StoreError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum WorkOrderError {
    #[error("Work order validation error: {0}")]
    ValidationError(String),

    #[error("Work order database error: {0}")]
    DatabaseError(#[from] StoreError),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for WorkOrderError {
    fn from(msg: String) -> Self {
        WorkOrderError::ActorCommunicationError(msg)
    }
}
