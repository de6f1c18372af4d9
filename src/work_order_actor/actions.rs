//! Read-only aggregates over work orders.
//!
//! Revenue only counts orders whose status is `completed`; their `total` is
//! summed exactly as stored.

use crate::model::{RevenueReport, WorkOrder};
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub enum WorkOrderAction {
    /// Revenue of orders completed today, in the process's local time zone.
    DailyRevenue,
    /// Revenue of orders completed on a given day.
    RevenueOn(NaiveDate),
    /// Count, revenue and average ticket of orders completed in a calendar month.
    MonthlyReport { year: i32, month: u32 },
    /// Orders still in the shop (`pending` or `in-progress`).
    OpenCount,
    /// The latest orders, newest id first.
    Recent(i64),
}

/// Results from WorkOrderActions.
#[derive(Debug, Clone)]
pub enum WorkOrderActionResult {
    Revenue(f64),
    Report(RevenueReport),
    Count(i64),
    Orders(Vec<WorkOrder>),
}
