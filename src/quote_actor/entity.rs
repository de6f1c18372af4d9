//! SQL for the `orcamentos` table.

use super::QuoteError;
use crate::framework::{ActorEntity, RecordId};
use crate::model::{is_blank, Quote};
use crate::store::codec::{decode_list, encode_list};
use crate::store::{Database, StoreError};
use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection};

/// Quotes have no custom actions.
#[derive(Debug, Clone)]
pub enum QuoteAction {}

const SELECT_QUOTES: &str = "SELECT id, client, vehicle, NULLIF(date, '') AS date, \
     NULLIF(validUntil, '') AS validUntil, COALESCE(NULLIF(status, ''), 'pending') AS status, \
     COALESCE(total, 0.0) AS total, items, notes FROM orcamentos";

fn quote_from_row(row: &SqliteRow) -> Result<Quote, StoreError> {
    let items: Option<String> = row.try_get("items")?;
    Ok(Quote {
        id: row.try_get("id")?,
        client: row.try_get("client")?,
        vehicle: row.try_get("vehicle")?,
        date: row.try_get("date")?,
        valid_until: row.try_get("validUntil")?,
        status: row.try_get("status")?,
        total: row.try_get("total")?,
        items: decode_list(items.as_deref())?,
        notes: row.try_get("notes")?,
    })
}

#[async_trait]
impl ActorEntity for Quote {
    type Action = QuoteAction;
    type ActionResult = ();
    type Context = ();
    type Error = QuoteError;

    const TABLE: &'static str = "orcamentos";

    fn id(&self) -> RecordId {
        self.id
    }

    fn with_id(self, id: RecordId) -> Self {
        Self { id, ..self }
    }

    fn prepare(self) -> Result<Self, QuoteError> {
        if is_blank(&self.client) || is_blank(&self.vehicle) {
            return Err(QuoteError::ValidationError(
                "client and vehicle are required".into(),
            ));
        }
        Ok(self)
    }

    async fn fetch_all(conn: &mut SqliteConnection) -> Result<Vec<Self>, StoreError> {
        let rows = sqlx::query(SELECT_QUOTES).fetch_all(&mut *conn).await?;
        rows.iter().map(quote_from_row).collect()
    }

    async fn insert(&self, conn: &mut SqliteConnection) -> Result<RecordId, StoreError> {
        let done = sqlx::query(
            "INSERT INTO orcamentos (client, vehicle, date, validUntil, status, total, items, notes) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&self.client)
        .bind(&self.vehicle)
        .bind(self.date)
        .bind(self.valid_until)
        .bind(self.status)
        .bind(self.total)
        .bind(encode_list(&self.items)?)
        .bind(&self.notes)
        .execute(&mut *conn)
        .await?;
        Ok(done.last_insert_rowid())
    }

    async fn replace(&self, conn: &mut SqliteConnection) -> Result<u64, StoreError> {
        let done = sqlx::query(
            "UPDATE orcamentos SET client = ?, vehicle = ?, date = ?, validUntil = ?, status = ?, \
             total = ?, items = ?, notes = ? WHERE id = ?",
        )
        .bind(&self.client)
        .bind(&self.vehicle)
        .bind(self.date)
        .bind(self.valid_until)
        .bind(self.status)
        .bind(self.total)
        .bind(encode_list(&self.items)?)
        .bind(&self.notes)
        .bind(self.id)
        .execute(&mut *conn)
        .await?;
        Ok(done.rows_affected())
    }

    async fn handle_action(action: QuoteAction, _db: &Database, _ctx: &()) -> Result<(), QuoteError> {
        match action {}
    }
}
