//! SQL for the `ordens_servico` table.
//!
//! Dates are stored as `YYYY-MM-DD` text, so day and month filters compare
//! strings.

use super::{WorkOrderAction, WorkOrderActionResult, WorkOrderError};
use crate::framework::{ActorEntity, RecordId};
use crate::model::{is_blank, RevenueReport, WorkOrder};
use crate::store::codec::{decode_list, encode_list};
use crate::store::{Database, StoreError};
use async_trait::async_trait;
use chrono::{Local, Months, NaiveDate};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection};

const SELECT_ORDERS: &str = "SELECT id, client, vehicle, COALESCE(NULLIF(status, ''), 'pending') AS status, \
     NULLIF(date, '') AS date, items, notes, COALESCE(total, 0.0) AS total FROM ordens_servico";

fn order_from_row(row: &SqliteRow) -> Result<WorkOrder, StoreError> {
    let items: Option<String> = row.try_get("items")?;
    Ok(WorkOrder {
        id: row.try_get("id")?,
        client: row.try_get("client")?,
        vehicle: row.try_get("vehicle")?,
        status: row.try_get("status")?,
        date: row.try_get("date")?,
        items: decode_list(items.as_deref())?,
        notes: row.try_get("notes")?,
        total: row.try_get("total")?,
    })
}

async fn revenue_on(conn: &mut SqliteConnection, day: NaiveDate) -> Result<f64, StoreError> {
    let total = sqlx::query_scalar(
        "SELECT COALESCE(SUM(total), 0.0) FROM ordens_servico WHERE status = 'completed' AND date = ?",
    )
    .bind(day)
    .fetch_one(&mut *conn)
    .await?;
    Ok(total)
}

async fn monthly_report(
    conn: &mut SqliteConnection,
    year: i32,
    month: u32,
) -> Result<RevenueReport, WorkOrderError> {
    let invalid = || WorkOrderError::ValidationError(format!("invalid month {year}-{month:02}"));
    let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let end = start
        .checked_add_months(Months::new(1))
        .ok_or_else(invalid)?;

    let (count, total): (i64, f64) = sqlx::query_as(
        "SELECT COUNT(*), COALESCE(SUM(total), 0.0) FROM ordens_servico \
         WHERE status = 'completed' AND date >= ? AND date < ?",
    )
    .bind(start)
    .bind(end)
    .fetch_one(&mut *conn)
    .await
    .map_err(StoreError::from)?;
    Ok(RevenueReport::new(count, total))
}

#[async_trait]
impl ActorEntity for WorkOrder {
    type Action = WorkOrderAction;
    type ActionResult = WorkOrderActionResult;
    type Context = ();
    type Error = WorkOrderError;

    const TABLE: &'static str = "ordens_servico";

    fn id(&self) -> RecordId {
        self.id
    }

    fn with_id(self, id: RecordId) -> Self {
        Self { id, ..self }
    }

    fn prepare(self) -> Result<Self, WorkOrderError> {
        if is_blank(&self.client) || is_blank(&self.vehicle) {
            return Err(WorkOrderError::ValidationError(
                "client and vehicle are required".into(),
            ));
        }
        Ok(self)
    }

    async fn fetch_all(conn: &mut SqliteConnection) -> Result<Vec<Self>, StoreError> {
        let rows = sqlx::query(SELECT_ORDERS).fetch_all(&mut *conn).await?;
        rows.iter().map(order_from_row).collect()
    }

    async fn insert(&self, conn: &mut SqliteConnection) -> Result<RecordId, StoreError> {
        let done = sqlx::query(
            "INSERT INTO ordens_servico (client, vehicle, status, date, items, notes, total) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&self.client)
        .bind(&self.vehicle)
        .bind(self.status)
        .bind(self.date)
        .bind(encode_list(&self.items)?)
        .bind(&self.notes)
        .bind(self.total)
        .execute(&mut *conn)
        .await?;
        Ok(done.last_insert_rowid())
    }

    async fn replace(&self, conn: &mut SqliteConnection) -> Result<u64, StoreError> {
        let done = sqlx::query(
            "UPDATE ordens_servico SET client = ?, vehicle = ?, status = ?, date = ?, items = ?, \
             notes = ?, total = ? WHERE id = ?",
        )
        .bind(&self.client)
        .bind(&self.vehicle)
        .bind(self.status)
        .bind(self.date)
        .bind(encode_list(&self.items)?)
        .bind(&self.notes)
        .bind(self.total)
        .bind(self.id)
        .execute(&mut *conn)
        .await?;
        Ok(done.rows_affected())
    }

    async fn handle_action(
        action: WorkOrderAction,
        db: &Database,
        _ctx: &(),
    ) -> Result<WorkOrderActionResult, WorkOrderError> {
        let mut conn = db.acquire().await;
        match action {
            WorkOrderAction::DailyRevenue => {
                let today = Local::now().date_naive();
                Ok(WorkOrderActionResult::Revenue(revenue_on(&mut conn, today).await?))
            }
            WorkOrderAction::RevenueOn(day) => {
                Ok(WorkOrderActionResult::Revenue(revenue_on(&mut conn, day).await?))
            }
            WorkOrderAction::MonthlyReport { year, month } => Ok(WorkOrderActionResult::Report(
                monthly_report(&mut conn, year, month).await?,
            )),
            WorkOrderAction::OpenCount => {
                let count: i64 = sqlx::query_scalar(
                    "SELECT COUNT(*) FROM ordens_servico WHERE status IN ('pending', 'in-progress')",
                )
                .fetch_one(&mut *conn)
                .await
                .map_err(StoreError::from)?;
                Ok(WorkOrderActionResult::Count(count))
            }
            WorkOrderAction::Recent(limit) => {
                let sql = format!("{SELECT_ORDERS} ORDER BY id DESC LIMIT ?");
                let rows = sqlx::query(&sql)
                    .bind(limit.max(0))
                    .fetch_all(&mut *conn)
                    .await
                    .map_err(StoreError::from)?;
                let orders = rows
                    .iter()
                    .map(order_from_row)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(WorkOrderActionResult::Orders(orders))
            }
        }
    }
}
