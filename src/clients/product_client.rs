//! # Product Client
//!
//! Provides inventory queries on top of the standard record operations.
use crate::clients::ActorClient;
use crate::framework::ResourceClient;
use crate::model::Product;
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    /// Number of products at or below their minimum quantity.
    #[instrument(skip(self))]
    pub async fn count_low_stock(&self) -> Result<i64, ProductError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(ProductAction::CountLowStock)
            .await
            .map_err(Self::map_error)?
        {
            ProductActionResult::CountLowStock(count) => Ok(count),
            other => Err(unexpected(other)),
        }
    }

    /// The products at or below their minimum quantity.
    #[instrument(skip(self))]
    pub async fn low_stock(&self) -> Result<Vec<Product>, ProductError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(ProductAction::LowStock)
            .await
            .map_err(Self::map_error)?
        {
            ProductActionResult::LowStock(products) => Ok(products),
            other => Err(unexpected(other)),
        }
    }
}

fn unexpected(result: ProductActionResult) -> ProductError {
    ProductError::ActorCommunicationError(format!("Unexpected action result: {result:?}"))
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }
}
