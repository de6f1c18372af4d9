use super::{date_field, items_total, list_field, LineItem, Quote, WorkOrderStatus};
use crate::framework::RecordId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A job ticket ("ordem de serviço") for a vehicle in the shop.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkOrder {
    pub id: RecordId,
    pub client: String,
    pub vehicle: String,
    pub status: WorkOrderStatus,
    #[serde(deserialize_with = "date_field::deserialize")]
    pub date: Option<NaiveDate>,
    #[serde(deserialize_with = "list_field::deserialize")]
    pub items: Vec<LineItem>,
    pub notes: Option<String>,
    pub total: f64,
}

impl WorkOrder {
    pub fn new(client: impl Into<String>, vehicle: impl Into<String>) -> Self {
        Self {
            client: client.into(),
            vehicle: vehicle.into(),
            ..Self::default()
        }
    }

    /// Builds a pending work order carrying over a quote's customer, vehicle,
    /// items and total. Does not check the quote's status.
    pub fn from_quote(quote: &Quote, date: NaiveDate) -> Self {
        let origin = format!("Gerada a partir do orçamento #{}", quote.id);
        let notes = match quote.notes.as_deref().map(str::trim) {
            Some(extra) if !extra.is_empty() => format!("{origin}\n{extra}"),
            _ => origin,
        };
        Self {
            id: 0,
            client: quote.client.clone(),
            vehicle: quote.vehicle.clone(),
            status: WorkOrderStatus::Pending,
            date: Some(date),
            items: quote.items.clone(),
            notes: Some(notes),
            total: quote.total,
        }
    }

    pub fn recompute_total(&mut self) {
        self.total = items_total(&self.items);
    }
}

/// Completed-order figures for a period.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueReport {
    pub order_count: i64,
    pub total_revenue: f64,
    /// `total_revenue / order_count`, 0 when there were no orders.
    pub average_ticket: f64,
}

impl RevenueReport {
    pub fn new(order_count: i64, total_revenue: f64) -> Self {
        let average_ticket = if order_count > 0 {
            total_revenue / order_count as f64
        } else {
            0.0
        };
        Self {
            order_count,
            total_revenue,
            average_ticket,
        }
    }
}
