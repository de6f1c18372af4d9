//! # Config Client
//!
//! Raw JSON get/set plus typed helpers for the settings the shop edits.
use crate::config_actor::{
    default_categories, ConfigError, ConfigRequest, ConfigResponse, COMPANY_PROFILE_KEY,
};
use crate::model::CompanyProfile;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Client for interacting with the Config actor.
#[derive(Clone)]
pub struct ConfigClient {
    sender: mpsc::Sender<ConfigRequest>,
}

impl ConfigClient {
    pub fn new(sender: mpsc::Sender<ConfigRequest>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(ConfigResponse<R>) -> ConfigRequest,
    ) -> Result<R, ConfigError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| ConfigError::ActorCommunicationError("Actor closed".into()))?;
        response.await.map_err(|_| {
            ConfigError::ActorCommunicationError("Actor dropped response channel".into())
        })?
    }

    /// The stored value, or `None` when the key was never set.
    #[instrument(skip(self))]
    pub async fn get(&self, key: &str) -> Result<Option<Value>, ConfigError> {
        debug!("Sending request");
        let key = key.to_string();
        self.request(|respond_to| ConfigRequest::Get { key, respond_to })
            .await
    }

    /// Inserts or replaces the value and echoes it back.
    #[instrument(skip(self, value))]
    pub async fn set(&self, key: &str, value: Value) -> Result<Value, ConfigError> {
        debug!("Sending request");
        let key = key.to_string();
        self.request(|respond_to| ConfigRequest::Set {
            key,
            value,
            respond_to,
        })
        .await
    }

    pub async fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ConfigError> {
        match self.get(key).await? {
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|e| ConfigError::ValidationError(format!("config {key}: {e}"))),
            None => Ok(None),
        }
    }

    pub async fn set_as<T: Serialize>(&self, key: &str, value: &T) -> Result<(), ConfigError> {
        let value = serde_json::to_value(value)
            .map_err(|e| ConfigError::ValidationError(format!("config {key}: {e}")))?;
        self.set(key, value).await?;
        Ok(())
    }

    /// The category list under `key`, or the built-in list for that key.
    pub async fn categories(&self, key: &str) -> Result<Vec<String>, ConfigError> {
        Ok(self
            .get_as::<Vec<String>>(key)
            .await?
            .unwrap_or_else(|| default_categories(key).iter().map(|c| c.to_string()).collect()))
    }

    /// Appends a category. Blank and duplicate names are rejected.
    #[instrument(skip(self))]
    pub async fn add_category(&self, key: &str, name: &str) -> Result<Vec<String>, ConfigError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ConfigError::ValidationError("category name is required".into()));
        }
        let mut categories = self.categories(key).await?;
        if categories.iter().any(|c| c == name) {
            return Err(ConfigError::DuplicateCategory(name.to_string()));
        }
        categories.push(name.to_string());
        self.set_as(key, &categories).await?;
        Ok(categories)
    }

    #[instrument(skip(self))]
    pub async fn remove_category(&self, key: &str, name: &str) -> Result<Vec<String>, ConfigError> {
        let mut categories = self.categories(key).await?;
        categories.retain(|c| c != name);
        self.set_as(key, &categories).await?;
        Ok(categories)
    }

    pub async fn company_profile(&self) -> Result<Option<CompanyProfile>, ConfigError> {
        self.get_as(COMPANY_PROFILE_KEY).await
    }

    pub async fn set_company_profile(&self, profile: &CompanyProfile) -> Result<(), ConfigError> {
        self.set_as(COMPANY_PROFILE_KEY, profile).await
    }
}
