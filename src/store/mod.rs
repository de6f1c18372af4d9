//! # Persistent Store
//!
//! A single SQLite file holds every table the shop uses. All actors share one
//! [`Database`] handle, which wraps exactly one connection behind an async
//! mutex, so statements from different actors never run concurrently.
//!
//! The schema is created with `CREATE TABLE IF NOT EXISTS` on every start
//! ([`Database::ensure_schema`]). There is no migration mechanism: column
//! names match the layout of existing `oficina.db` files so those keep
//! opening unchanged.

pub mod codec;

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, info};

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Errors raised by the persistence layer.
///
/// The payloads are plain strings so the error stays `Clone` and can be
/// folded into every actor's error type.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum StoreError {
    /// The database file could not be opened or created.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// A statement failed to execute.
    #[error("Statement failed: {0}")]
    Statement(String),

    /// A stored value could not be turned back into a record.
    #[error("Decode failed: {0}")]
    Decode(String),

    /// A value could not be serialized for storage.
    #[error("Encode failed: {0}")]
    Encode(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
                StoreError::Decode(e.to_string())
            }
            other => StoreError::Statement(other.to_string()),
        }
    }
}

/// Shared handle to the shop database.
///
/// Cloning is cheap; every clone points at the same connection.
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<SqliteConnection>>,
    location: Arc<PathBuf>,
}

impl Database {
    /// Opens (or creates) the database file at `path`, creating parent
    /// directories as needed.
    pub async fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| StoreError::Unavailable(format!("{}: {e}", parent.display())))?;
        }

        let conn = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .connect()
            .await
            .map_err(|e| StoreError::Unavailable(format!("{}: {e}", path.display())))?;

        info!(path = %path.display(), "Database opened");
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            location: Arc::new(path.to_path_buf()),
        })
    }

    /// Opens a private in-memory database. Used by tests.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let conn = SqliteConnection::connect("sqlite::memory:")
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            location: Arc::new(PathBuf::from(":memory:")),
        })
    }

    /// Creates every table that does not exist yet. Safe to call on each start.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        let mut conn = self.acquire().await;
        sqlx::raw_sql(SCHEMA_SQL).execute(&mut *conn).await?;
        debug!(path = %self.location.display(), "Schema ensured");
        Ok(())
    }

    /// Waits for exclusive use of the connection.
    ///
    /// Do not hold the guard across a request to another actor.
    pub async fn acquire(&self) -> MutexGuard<'_, SqliteConnection> {
        self.conn.lock().await
    }

    pub fn location(&self) -> &Path {
        &self.location
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ensure_schema_is_idempotent() {
        let db = Database::in_memory().await.unwrap();
        db.ensure_schema().await.unwrap();
        db.ensure_schema().await.unwrap();

        let mut conn = db.acquire().await;
        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .fetch_all(&mut *conn)
        .await
        .unwrap();

        assert_eq!(
            tables,
            vec![
                "clientes",
                "config",
                "orcamentos",
                "ordens_servico",
                "produtos",
                "servicos",
                "veiculos"
            ]
        );
    }

    #[tokio::test]
    async fn test_open_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("oficina.db");

        let db = Database::open(&path).await.unwrap();
        db.ensure_schema().await.unwrap();

        assert!(path.exists());
        assert_eq!(db.location(), path.as_path());
    }

    #[test]
    fn test_sqlx_error_maps_to_statement() {
        let err: StoreError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, StoreError::Statement(_)));
    }
}
