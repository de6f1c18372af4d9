use crate::store::StoreError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Config validation error: {0}")]
    ValidationError(String),

    /// The category list already holds this name.
    #[error("Category already exists: {0}")]
    DuplicateCategory(String),

    #[error("Config database error: {0}")]
    DatabaseError(#[from] StoreError),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ConfigError {
    fn from(msg: String) -> Self {
        ConfigError::ActorCommunicationError(msg)
    }
}
