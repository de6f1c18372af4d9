//! SQL for the `veiculos` table.

use super::{VehicleAction, VehicleError};
use crate::framework::{ActorEntity, RecordId};
use crate::model::{normalize_plate, Vehicle};
use crate::store::{Database, StoreError};
use async_trait::async_trait;
use sqlx::SqliteConnection;

const SELECT_VEHICLES: &str =
    "SELECT id, plate, model, brand, year, color, client, status, lastService FROM veiculos";

#[async_trait]
impl ActorEntity for Vehicle {
    type Action = VehicleAction;
    type ActionResult = Vec<Vehicle>;
    type Context = ();
    type Error = VehicleError;

    const TABLE: &'static str = "veiculos";

    fn id(&self) -> RecordId {
        self.id
    }

    fn with_id(self, id: RecordId) -> Self {
        Self { id, ..self }
    }

    fn prepare(mut self) -> Result<Self, VehicleError> {
        self.plate = normalize_plate(&self.plate);
        if self.plate.is_empty() {
            return Err(VehicleError::ValidationError("plate is required".into()));
        }
        Ok(self)
    }

    async fn fetch_all(conn: &mut SqliteConnection) -> Result<Vec<Self>, StoreError> {
        Ok(sqlx::query_as::<_, Vehicle>(SELECT_VEHICLES)
            .fetch_all(&mut *conn)
            .await?)
    }

    async fn insert(&self, conn: &mut SqliteConnection) -> Result<RecordId, StoreError> {
        let done = sqlx::query(
            "INSERT INTO veiculos (plate, model, brand, year, color, client, status, lastService) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&self.plate)
        .bind(&self.model)
        .bind(&self.brand)
        .bind(self.year)
        .bind(&self.color)
        .bind(&self.client)
        .bind(&self.status)
        .bind(&self.last_service)
        .execute(&mut *conn)
        .await?;
        Ok(done.last_insert_rowid())
    }

    async fn replace(&self, conn: &mut SqliteConnection) -> Result<u64, StoreError> {
        let done = sqlx::query(
            "UPDATE veiculos SET plate = ?, model = ?, brand = ?, year = ?, color = ?, client = ?, \
             status = ?, lastService = ? WHERE id = ?",
        )
        .bind(&self.plate)
        .bind(&self.model)
        .bind(&self.brand)
        .bind(self.year)
        .bind(&self.color)
        .bind(&self.client)
        .bind(&self.status)
        .bind(&self.last_service)
        .bind(self.id)
        .execute(&mut *conn)
        .await?;
        Ok(done.rows_affected())
    }

    async fn handle_action(
        action: VehicleAction,
        db: &Database,
        _ctx: &(),
    ) -> Result<Vec<Vehicle>, VehicleError> {
        match action {
            VehicleAction::OwnedBy(name) => {
                let mut conn = db.acquire().await;
                let sql = format!("{SELECT_VEHICLES} WHERE client = ?");
                let vehicles = sqlx::query_as::<_, Vehicle>(&sql)
                    .bind(name)
                    .fetch_all(&mut *conn)
                    .await
                    .map_err(StoreError::from)?;
                Ok(vehicles)
            }
        }
    }
}
