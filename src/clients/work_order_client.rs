//! # Work Order Client
//!
//! Standard record operations plus the dashboard and report figures.
use crate::clients::ActorClient;
use crate::framework::ResourceClient;
use crate::model::{RevenueReport, WorkOrder};
use crate::work_order_actor::{WorkOrderAction, WorkOrderActionResult, WorkOrderError};
use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::{debug, instrument};

/// Client for interacting with the WorkOrder actor.
#[derive(Clone)]
pub struct WorkOrderClient {
    inner: ResourceClient<WorkOrder>,
}

impl WorkOrderClient {
    pub fn new(inner: ResourceClient<WorkOrder>) -> Self {
        Self { inner }
    }

    async fn action(&self, action: WorkOrderAction) -> Result<WorkOrderActionResult, WorkOrderError> {
        debug!(?action, "Sending request");
        self.inner
            .perform_action(action)
            .await
            .map_err(Self::map_error)
    }

    /// Sum of completed orders dated today. 0 when there are none.
    #[instrument(skip(self))]
    pub async fn daily_revenue(&self) -> Result<f64, WorkOrderError> {
        match self.action(WorkOrderAction::DailyRevenue).await? {
            WorkOrderActionResult::Revenue(total) => Ok(total),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn revenue_on(&self, day: NaiveDate) -> Result<f64, WorkOrderError> {
        match self.action(WorkOrderAction::RevenueOn(day)).await? {
            WorkOrderActionResult::Revenue(total) => Ok(total),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn monthly_report(&self, year: i32, month: u32) -> Result<RevenueReport, WorkOrderError> {
        match self
            .action(WorkOrderAction::MonthlyReport { year, month })
            .await?
        {
            WorkOrderActionResult::Report(report) => Ok(report),
            other => Err(unexpected(other)),
        }
    }

    /// Vehicles currently in the shop (pending or in-progress orders).
    #[instrument(skip(self))]
    pub async fn open_count(&self) -> Result<i64, WorkOrderError> {
        match self.action(WorkOrderAction::OpenCount).await? {
            WorkOrderActionResult::Count(count) => Ok(count),
            other => Err(unexpected(other)),
        }
    }

    /// The `limit` most recent orders, newest first.
    #[instrument(skip(self))]
    pub async fn recent(&self, limit: i64) -> Result<Vec<WorkOrder>, WorkOrderError> {
        match self.action(WorkOrderAction::Recent(limit)).await? {
            WorkOrderActionResult::Orders(orders) => Ok(orders),
            other => Err(unexpected(other)),
        }
    }
}

fn unexpected(result: WorkOrderActionResult) -> WorkOrderError {
    WorkOrderError::ActorCommunicationError(format!("Unexpected action result: {result:?}"))
}

#[async_trait]
impl ActorClient<WorkOrder> for WorkOrderClient {
    type Error = WorkOrderError;

    fn inner(&self) -> &ResourceClient<WorkOrder> {
        &self.inner
    }
}
