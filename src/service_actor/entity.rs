//! SQL for the `servicos` table.

use super::ServiceError;
use crate::framework::{ActorEntity, RecordId};
use crate::model::{is_blank, Service};
use crate::store::{Database, StoreError};
use async_trait::async_trait;
use sqlx::SqliteConnection;

/// The catalog has no custom actions.
#[derive(Debug, Clone)]
pub enum ServiceAction {}

#[async_trait]
impl ActorEntity for Service {
    type Action = ServiceAction;
    type ActionResult = ();
    type Context = ();
    type Error = ServiceError;

    const TABLE: &'static str = "servicos";

    fn id(&self) -> RecordId {
        self.id
    }

    fn with_id(self, id: RecordId) -> Self {
        Self { id, ..self }
    }

    fn prepare(self) -> Result<Self, ServiceError> {
        if is_blank(&self.name) {
            return Err(ServiceError::ValidationError("name is required".into()));
        }
        Ok(self)
    }

    async fn fetch_all(conn: &mut SqliteConnection) -> Result<Vec<Self>, StoreError> {
        Ok(sqlx::query_as::<_, Service>(
            "SELECT id, name, description, category, time, COALESCE(price, 0.0) AS price FROM servicos",
        )
        .fetch_all(&mut *conn)
        .await?)
    }

    async fn insert(&self, conn: &mut SqliteConnection) -> Result<RecordId, StoreError> {
        let done = sqlx::query(
            "INSERT INTO servicos (name, description, category, time, price) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&self.name)
        .bind(&self.description)
        .bind(&self.category)
        .bind(&self.time)
        .bind(self.price)
        .execute(&mut *conn)
        .await?;
        Ok(done.last_insert_rowid())
    }

    async fn replace(&self, conn: &mut SqliteConnection) -> Result<u64, StoreError> {
        let done = sqlx::query(
            "UPDATE servicos SET name = ?, description = ?, category = ?, time = ?, price = ? \
             WHERE id = ?",
        )
        .bind(&self.name)
        .bind(&self.description)
        .bind(&self.category)
        .bind(&self.time)
        .bind(self.price)
        .bind(self.id)
        .execute(&mut *conn)
        .await?;
        Ok(done.rows_affected())
    }

    async fn handle_action(
        action: ServiceAction,
        _db: &Database,
        _ctx: &(),
    ) -> Result<(), ServiceError> {
        match action {}
    }
}
