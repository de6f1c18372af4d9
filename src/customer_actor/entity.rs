//! SQL for the `clientes` table.
//!
//! `cars` is stored as a JSON array and decoded on every read.

use super::{CustomerAction, CustomerError};
use crate::clients::VehicleClient;
use crate::framework::{ActorEntity, RecordId};
use crate::model::{is_blank, Customer, CustomerWithVehicles};
use crate::store::codec::{decode_list, encode_list};
use crate::store::{Database, StoreError};
use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection};
use tracing::debug;

const SELECT_CUSTOMERS: &str =
    "SELECT id, name, phone, email, cars, lastVisit, status, statusLabel FROM clientes";

fn customer_from_row(row: &SqliteRow) -> Result<Customer, StoreError> {
    let cars: Option<String> = row.try_get("cars")?;
    Ok(Customer {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        phone: row.try_get("phone")?,
        email: row.try_get("email")?,
        cars: decode_list(cars.as_deref())?,
        last_visit: row.try_get("lastVisit")?,
        status: row.try_get("status")?,
        status_label: row.try_get("statusLabel")?,
    })
}

async fn find_by_name(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<Option<Customer>, StoreError> {
    let sql = format!("{SELECT_CUSTOMERS} WHERE name = ? ORDER BY id LIMIT 1");
    let row = sqlx::query(&sql).bind(name).fetch_optional(&mut *conn).await?;
    row.as_ref().map(customer_from_row).transpose()
}

#[async_trait]
impl ActorEntity for Customer {
    type Action = CustomerAction;
    type ActionResult = Option<CustomerWithVehicles>;
    type Context = VehicleClient;
    type Error = CustomerError;

    const TABLE: &'static str = "clientes";

    fn id(&self) -> RecordId {
        self.id
    }

    fn with_id(self, id: RecordId) -> Self {
        Self { id, ..self }
    }

    fn prepare(self) -> Result<Self, CustomerError> {
        if is_blank(&self.name) {
            return Err(CustomerError::ValidationError("name is required".into()));
        }
        Ok(self)
    }

    async fn fetch_all(conn: &mut SqliteConnection) -> Result<Vec<Self>, StoreError> {
        let rows = sqlx::query(SELECT_CUSTOMERS).fetch_all(&mut *conn).await?;
        rows.iter().map(customer_from_row).collect()
    }

    async fn insert(&self, conn: &mut SqliteConnection) -> Result<RecordId, StoreError> {
        let done = sqlx::query(
            "INSERT INTO clientes (name, phone, email, cars, lastVisit, status, statusLabel) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&self.name)
        .bind(&self.phone)
        .bind(&self.email)
        .bind(encode_list(&self.cars)?)
        .bind(&self.last_visit)
        .bind(&self.status)
        .bind(&self.status_label)
        .execute(&mut *conn)
        .await?;
        Ok(done.last_insert_rowid())
    }

    async fn replace(&self, conn: &mut SqliteConnection) -> Result<u64, StoreError> {
        let done = sqlx::query(
            "UPDATE clientes SET name = ?, phone = ?, email = ?, cars = ?, lastVisit = ?, \
             status = ?, statusLabel = ? WHERE id = ?",
        )
        .bind(&self.name)
        .bind(&self.phone)
        .bind(&self.email)
        .bind(encode_list(&self.cars)?)
        .bind(&self.last_visit)
        .bind(&self.status)
        .bind(&self.status_label)
        .bind(self.id)
        .execute(&mut *conn)
        .await?;
        Ok(done.rows_affected())
    }

    async fn handle_action(
        action: CustomerAction,
        db: &Database,
        vehicles: &VehicleClient,
    ) -> Result<Option<CustomerWithVehicles>, CustomerError> {
        match action {
            CustomerAction::WithVehicles(name) => {
                // Release the connection before asking the vehicle actor, which needs it too.
                let customer = {
                    let mut conn = db.acquire().await;
                    find_by_name(&mut conn, &name).await?
                };
                let Some(client) = customer else {
                    debug!(name = %name, "No customer with that name");
                    return Ok(None);
                };
                let vehicles = vehicles.owned_by(&name).await?;
                Ok(Some(CustomerWithVehicles { client, vehicles }))
            }
        }
    }
}
