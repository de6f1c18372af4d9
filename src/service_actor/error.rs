use crate::store::StoreError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ServiceError {
    #[error("Service validation error: {0}")]
    ValidationError(String),

    #[error("Service database error: {0}")]
    DatabaseError(#[from] StoreError),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ServiceError {
    fn from(msg: String) -> Self {
        ServiceError::ActorCommunicationError(msg)
    }
}
