use crate::framework::{into_entity_error, ActorEntity, FrameworkError, RecordId, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard record operations.
///
/// Implementors only point at their inner [`ResourceClient`] and name their
/// error type; `list`, `create`, `update` and `delete` come for free.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: std::error::Error + From<String> + Send + Sync + 'static;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    ///
    /// Errors raised by the entity itself come back unchanged; channel
    /// failures become the error's `From<String>` variant.
    fn map_error(e: FrameworkError) -> Self::Error {
        into_entity_error(e)
    }

    /// Every stored record, in no particular order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Stores a new record and returns it with its assigned id.
    #[tracing::instrument(skip(self, record))]
    async fn create(&self, record: T) -> Result<T, Self::Error> {
        tracing::debug!(?record, "Sending request");
        self.inner().create(record).await.map_err(Self::map_error)
    }

    /// Overwrites the record with the same id. A missing id is not an error.
    #[tracing::instrument(skip(self, record), fields(id = record.id()))]
    async fn update(&self, record: T) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().update(record).await.map_err(Self::map_error)
    }

    /// Deletes by id. Returns `true` even when nothing matched.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: RecordId) -> Result<bool, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
