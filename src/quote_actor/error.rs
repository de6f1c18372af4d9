//! Error types for the Quote actor and quote conversion.

use crate::model::QuoteStatus;
use crate::store::StoreError;
use crate::work_order_actor::WorkOrderError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum QuoteError {
    #[error("Quote validation error: {0}")]
    ValidationError(String),

    /// Conversion was asked for a quote that is not approved. Shown to the user as is.
    #[error("Only approved quotes can be converted into a work order (quote #{id} is {status})")]
    NotApproved { id: i64, status: QuoteStatus },

    #[error("Quote database error: {0}")]
    DatabaseError(#[from] StoreError),

    /// Creating the work order failed.
    #[error(transparent)]
    WorkOrder(#[from] WorkOrderError),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for QuoteError {
    fn from(msg: String) -> Self {
        QuoteError::ActorCommunicationError(msg)
    }
}
