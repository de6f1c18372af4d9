//! # Quote Client
//!
//! Provides the standard record operations for quotes and orchestrates
//! turning an approved quote into a work order.
use crate::clients::{ActorClient, WorkOrderClient};
use crate::framework::ResourceClient;
use crate::model::{Quote, QuoteStatus, WorkOrder};
use crate::quote_actor::QuoteError;
use async_trait::async_trait;
use chrono::Local;
use tracing::{info, instrument, warn};

/// Client for interacting with the Quote actor.
///
/// Holds a [`WorkOrderClient`] for conversion; the quote actor itself never
/// talks to the work-order actor.
#[derive(Clone)]
pub struct QuoteClient {
    inner: ResourceClient<Quote>,
    work_orders: WorkOrderClient,
}

impl QuoteClient {
    pub fn new(inner: ResourceClient<Quote>, work_orders: WorkOrderClient) -> Self {
        Self { inner, work_orders }
    }

    /// Creates a pending work order from an approved quote.
    ///
    /// A quote in any other status is rejected before anything is sent to
    /// an actor. The quote itself is left as it is: it is neither deleted nor
    /// marked as converted.
    #[instrument(skip(self, quote), fields(quote_id = quote.id))]
    pub async fn convert_to_work_order(&self, quote: &Quote) -> Result<WorkOrder, QuoteError> {
        if quote.status != QuoteStatus::Approved {
            warn!(status = %quote.status, "Refusing to convert quote");
            return Err(QuoteError::NotApproved {
                id: quote.id,
                status: quote.status,
            });
        }

        let order = WorkOrder::from_quote(quote, Local::now().date_naive());
        let created = self.work_orders.create(order).await?;
        info!(work_order_id = created.id, "Quote converted");
        Ok(created)
    }
}

#[async_trait]
impl ActorClient<Quote> for QuoteClient {
    type Error = QuoteError;

    fn inner(&self) -> &ResourceClient<Quote> {
        &self.inner
    }
}
