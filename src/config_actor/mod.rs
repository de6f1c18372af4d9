//! Key/value settings stored in the `config` table.
//!
//! Values are arbitrary JSON. This actor does not fit the record-oriented
//! [`ResourceActor`](crate::framework::ResourceActor) (there are no ids), so
//! it runs its own small loop with the same request/response shape.

pub mod error;

pub use error::*;

use crate::clients::ConfigClient;
use crate::store::{Database, StoreError};
use serde_json::Value;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

/// Part categories offered until the shop edits them.
pub const DEFAULT_PRODUCT_CATEGORIES: [&str; 8] = [
    "Óleos e Fluidos",
    "Filtros",
    "Freios",
    "Suspensão",
    "Motor",
    "Pneus",
    "Acessórios",
    "Outros",
];

/// Workshop (service) categories offered until the shop edits them.
pub const DEFAULT_SERVICE_CATEGORIES: [&str; 9] = [
    "Manutenção",
    "Suspensão",
    "Elétrica",
    "Freios",
    "Estética",
    "Motor",
    "Ar Condicionado",
    "Pneus",
    "Outros",
];

pub const PRODUCT_CATEGORIES_KEY: &str = "categorias_produtos";
pub const SERVICE_CATEGORIES_KEY: &str = "categorias_servicos";
pub const COMPANY_PROFILE_KEY: &str = "dados_empresa";

/// Built-in list for a category key. Product keys get the part list, any
/// other key the workshop list.
pub fn default_categories(key: &str) -> &'static [&'static str] {
    if key == PRODUCT_CATEGORIES_KEY {
        &DEFAULT_PRODUCT_CATEGORIES
    } else {
        &DEFAULT_SERVICE_CATEGORIES
    }
}

pub type ConfigResponse<T> = oneshot::Sender<Result<T, ConfigError>>;

#[derive(Debug)]
pub enum ConfigRequest {
    Get {
        key: String,
        respond_to: ConfigResponse<Option<Value>>,
    },
    Set {
        key: String,
        value: Value,
        respond_to: ConfigResponse<Value>,
    },
}

pub struct ConfigActor {
    receiver: mpsc::Receiver<ConfigRequest>,
    db: Database,
}

/// Creates a new Config actor and its client.
pub fn new(buffer_size: usize, db: Database) -> (ConfigActor, ConfigClient) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ConfigActor { receiver, db }, ConfigClient::new(sender))
}

impl ConfigActor {
    pub async fn run(mut self) {
        info!(entity_type = "Config", "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ConfigRequest::Get { key, respond_to } => {
                    let result = self.get(&key).await;
                    match &result {
                        Ok(value) => debug!(key = %key, found = value.is_some(), "Get"),
                        Err(e) => warn!(key = %key, error = %e, "Get failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ConfigRequest::Set {
                    key,
                    value,
                    respond_to,
                } => {
                    let result = self.set(&key, value).await;
                    match &result {
                        Ok(_) => info!(key = %key, "Set"),
                        Err(e) => warn!(key = %key, error = %e, "Set failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type = "Config", "Shutdown");
    }

    async fn get(&self, key: &str) -> Result<Option<Value>, ConfigError> {
        let mut conn = self.db.acquire().await;
        let stored: Option<Option<String>> =
            sqlx::query_scalar("SELECT value FROM config WHERE key = ?")
                .bind(key)
                .fetch_optional(&mut *conn)
                .await
                .map_err(StoreError::from)?;

        match stored.flatten() {
            Some(text) => {
                let value = serde_json::from_str(&text)
                    .map_err(|e| StoreError::Decode(format!("config {key}: {e}")))?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: Value) -> Result<Value, ConfigError> {
        if key.trim().is_empty() {
            return Err(ConfigError::ValidationError("key is required".into()));
        }
        let text = serde_json::to_string(&value).map_err(|e| StoreError::Encode(e.to_string()))?;

        let mut conn = self.db.acquire().await;
        sqlx::query("INSERT OR REPLACE INTO config (key, value) VALUES (?, ?)")
            .bind(key)
            .bind(text)
            .execute(&mut *conn)
            .await
            .map_err(StoreError::from)?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CompanyProfile;

    async fn config_client() -> ConfigClient {
        let db = Database::in_memory().await.unwrap();
        db.ensure_schema().await.unwrap();
        let (actor, client) = new(8, db);
        tokio::spawn(actor.run());
        client
    }

    #[tokio::test]
    async fn test_categories_default_until_edited() {
        let config = config_client().await;

        let products = config.categories(PRODUCT_CATEGORIES_KEY).await.unwrap();
        assert_eq!(products, DEFAULT_PRODUCT_CATEGORIES);
        assert_eq!(products[0], "Óleos e Fluidos");

        let services = config.categories(SERVICE_CATEGORIES_KEY).await.unwrap();
        assert_eq!(services, DEFAULT_SERVICE_CATEGORIES);
        assert_eq!(services[0], "Manutenção");

        let edited = config
            .add_category(PRODUCT_CATEGORIES_KEY, "  Lubrificantes ")
            .await
            .unwrap();
        assert_eq!(edited.len(), DEFAULT_PRODUCT_CATEGORIES.len() + 1);
        assert_eq!(edited.last().map(String::as_str), Some("Lubrificantes"));

        let err = config
            .add_category(PRODUCT_CATEGORIES_KEY, "Freios")
            .await
            .unwrap_err();
        assert_eq!(err, ConfigError::DuplicateCategory("Freios".into()));
        assert!(config.add_category(PRODUCT_CATEGORIES_KEY, " ").await.is_err());

        let after = config
            .remove_category(PRODUCT_CATEGORIES_KEY, "Outros")
            .await
            .unwrap();
        assert!(!after.iter().any(|c| c == "Outros"));

        // Editing the part list leaves the workshop list on its defaults.
        assert_eq!(
            config.categories(SERVICE_CATEGORIES_KEY).await.unwrap(),
            DEFAULT_SERVICE_CATEGORIES
        );
    }

    #[tokio::test]
    async fn test_company_profile_round_trip() {
        let config = config_client().await;
        assert_eq!(config.company_profile().await.unwrap(), None);

        let profile = CompanyProfile {
            name: "Auto Center Silva".into(),
            phone: Some("(11) 3333-4444".into()),
            ..CompanyProfile::default()
        };
        config.set_company_profile(&profile).await.unwrap();
        assert_eq!(config.company_profile().await.unwrap(), Some(profile));
    }

    #[tokio::test]
    async fn test_blank_key_is_rejected() {
        let config = config_client().await;
        let err = config.set(" ", Value::Bool(true)).await.unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }
}
