//! SQL for the `produtos` table.

use super::{ProductAction, ProductActionResult, ProductError};
use crate::framework::{ActorEntity, RecordId};
use crate::model::{is_blank, Product};
use crate::store::{Database, StoreError};
use async_trait::async_trait;
use sqlx::SqliteConnection;

// Older rows may hold NULL numbers; read them as zero.
const SELECT_PRODUCTS: &str = "SELECT id, code, name, brand, category, \
     COALESCE(quantity, 0) AS quantity, COALESCE(minQuantity, 0) AS minQuantity, \
     COALESCE(costPrice, 0.0) AS costPrice, COALESCE(sellPrice, 0.0) AS sellPrice, \
     location FROM produtos";

/// Missing quantities count as 0, matching how `SELECT_PRODUCTS` reads them.
const LOW_STOCK: &str = "COALESCE(quantity, 0) <= COALESCE(minQuantity, 0)";

#[async_trait]
impl ActorEntity for Product {
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Context = ();
    type Error = ProductError;

    const TABLE: &'static str = "produtos";

    fn id(&self) -> RecordId {
        self.id
    }

    fn with_id(self, id: RecordId) -> Self {
        Self { id, ..self }
    }

    fn prepare(self) -> Result<Self, ProductError> {
        if is_blank(&self.name) {
            return Err(ProductError::ValidationError("name is required".into()));
        }
        if self.quantity < 0 || self.min_quantity < 0 {
            return Err(ProductError::ValidationError(format!(
                "quantities cannot be negative (quantity {}, minimum {})",
                self.quantity, self.min_quantity
            )));
        }
        Ok(self)
    }

    async fn fetch_all(conn: &mut SqliteConnection) -> Result<Vec<Self>, StoreError> {
        Ok(sqlx::query_as::<_, Product>(SELECT_PRODUCTS)
            .fetch_all(&mut *conn)
            .await?)
    }

    async fn insert(&self, conn: &mut SqliteConnection) -> Result<RecordId, StoreError> {
        let done = sqlx::query(
            "INSERT INTO produtos (code, name, brand, category, quantity, minQuantity, costPrice, \
             sellPrice, location) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&self.code)
        .bind(&self.name)
        .bind(&self.brand)
        .bind(&self.category)
        .bind(self.quantity)
        .bind(self.min_quantity)
        .bind(self.cost_price)
        .bind(self.sell_price)
        .bind(&self.location)
        .execute(&mut *conn)
        .await?;
        Ok(done.last_insert_rowid())
    }

    async fn replace(&self, conn: &mut SqliteConnection) -> Result<u64, StoreError> {
        let done = sqlx::query(
            "UPDATE produtos SET code = ?, name = ?, brand = ?, category = ?, quantity = ?, \
             minQuantity = ?, costPrice = ?, sellPrice = ?, location = ? WHERE id = ?",
        )
        .bind(&self.code)
        .bind(&self.name)
        .bind(&self.brand)
        .bind(&self.category)
        .bind(self.quantity)
        .bind(self.min_quantity)
        .bind(self.cost_price)
        .bind(self.sell_price)
        .bind(&self.location)
        .bind(self.id)
        .execute(&mut *conn)
        .await?;
        Ok(done.rows_affected())
    }

    /// Handles custom actions for the Product entity.
    ///
    /// # Actions
    /// - `CountLowStock`: how many products sit at or below their minimum
    /// - `LowStock`: those products, emptiest first
    async fn handle_action(
        action: ProductAction,
        db: &Database,
        _ctx: &(),
    ) -> Result<ProductActionResult, ProductError> {
        let mut conn = db.acquire().await;
        match action {
            ProductAction::CountLowStock => {
                let sql = format!("SELECT COUNT(*) FROM produtos WHERE {LOW_STOCK}");
                let count: i64 = sqlx::query_scalar(&sql)
                    .fetch_one(&mut *conn)
                    .await
                    .map_err(StoreError::from)?;
                Ok(ProductActionResult::CountLowStock(count))
            }
            ProductAction::LowStock => {
                let sql = format!("{SELECT_PRODUCTS} WHERE {LOW_STOCK} ORDER BY quantity, name");
                let products = sqlx::query_as::<_, Product>(&sql)
                    .fetch_all(&mut *conn)
                    .await
                    .map_err(StoreError::from)?;
                Ok(ProductActionResult::LowStock(products))
            }
        }
    }
}
