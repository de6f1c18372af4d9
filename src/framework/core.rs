//! Core framework types: the [`ActorEntity`] trait, request messages, the generic
//! [`ResourceActor`] server loop and the [`ResourceClient`] handle.
//!
//! Each entity type gets its own actor. The actor does not keep records in
//! memory: every request is answered from the shared [`Database`], so the
//! store stays the single source of truth and callers refresh a view by
//! listing again.

use crate::store::{Database, StoreError};
use async_trait::async_trait;
use sqlx::SqliteConnection;
use std::fmt::Debug;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

/// Store-assigned row identifier. `0` means "not persisted yet".
pub type RecordId = i64;

/// Trait that any persisted record must implement to be managed by [`ResourceActor`].
///
/// The implementor owns the SQL for its table (`fetch_all`, `insert`,
/// `replace`); the actor owns sequencing, logging and error wrapping.
///
/// # Context
/// `Context` is injected through [`ResourceActor::run`] so an entity can talk to
/// other actors that were created after it (late binding).
#[async_trait]
pub trait ActorEntity: Clone + Debug + Send + Sync + 'static {
    /// Enum of entity-specific read operations (aggregates, lookups).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected into the actor. Use `()` if none are needed.
    type Context: Send + Sync;

    /// One error enum per actor. Store failures must convert into it.
    type Error: std::error::Error + From<StoreError> + Send + Sync + 'static;

    /// Table that holds this entity. Used for the generic delete.
    const TABLE: &'static str;

    fn id(&self) -> RecordId;

    /// Returns the record carrying a store-assigned id.
    fn with_id(self, id: RecordId) -> Self;

    /// Normalizes the record and checks required fields before any write.
    fn prepare(self) -> Result<Self, Self::Error> {
        Ok(self)
    }

    async fn fetch_all(conn: &mut SqliteConnection) -> Result<Vec<Self>, StoreError>;

    /// Inserts the record (ignoring its id) and returns the new id.
    async fn insert(&self, conn: &mut SqliteConnection) -> Result<RecordId, StoreError>;

    /// Overwrites every column of the row with the record's id.
    /// Returns the number of rows touched.
    async fn replace(&self, conn: &mut SqliteConnection) -> Result<u64, StoreError>;

    /// Handle a custom entity action.
    ///
    /// Receives the database handle rather than a locked connection so an
    /// implementation can release the connection before calling another actor.
    async fn handle_action(
        action: Self::Action,
        db: &Database,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("{0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

/// Turns a framework error back into the entity's own error type.
///
/// Entity errors travel boxed through the response channel; this unboxes them
/// when the type matches and otherwise wraps the message.
pub fn into_entity_error<E>(e: FrameworkError) -> E
where
    E: std::error::Error + From<String> + Send + Sync + 'static,
{
    match e {
        FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
            Ok(err) => *err,
            Err(other) => E::from(other.to_string()),
        },
        other => E::from(other.to_string()),
    }
}

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Messages understood by every [`ResourceActor`].
///
/// `Update` is a full replace keyed by the record's id; `Delete` and a missing
/// row on `Update` are both silent no-ops.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    List {
        respond_to: Response<Vec<T>>,
    },
    Create {
        record: T,
        respond_to: Response<T>,
    },
    Update {
        record: T,
        respond_to: Response<T>,
    },
    Delete {
        id: RecordId,
        respond_to: Response<bool>,
    },
    Action {
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

/// The generic actor serving one table.
///
/// Requests are processed sequentially in the actor's task. All actors share
/// the same [`Database`], whose single connection serializes statements
/// across actors as well.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    db: Database,
    entity_type: &'static str,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the request channel; callers wait when
    /// it is full.
    pub fn new(buffer_size: usize, db: Database) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        // "Vehicle" instead of "oficina::model::vehicle::Vehicle"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        let actor = Self {
            receiver,
            db,
            entity_type,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = self.entity_type;
        info!(entity_type, table = T::TABLE, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { respond_to } => {
                    let result = self.list().await;
                    match &result {
                        Ok(items) => debug!(entity_type, size = items.len(), "List"),
                        Err(e) => warn!(entity_type, error = %e, "List failed"),
                    }
                    let _ = respond_to.send(result.map_err(Self::wrap));
                }
                ResourceRequest::Create { record, respond_to } => {
                    debug!(entity_type, ?record, "Create");
                    let result = self.create(record).await;
                    match &result {
                        Ok(item) => info!(entity_type, id = item.id(), "Created"),
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result.map_err(Self::wrap));
                }
                ResourceRequest::Update { record, respond_to } => {
                    let id = record.id();
                    debug!(entity_type, id, ?record, "Update");
                    let result = self.update(record).await;
                    match &result {
                        Ok(_) => info!(entity_type, id, "Updated"),
                        Err(e) => warn!(entity_type, id, error = %e, "Update failed"),
                    }
                    let _ = respond_to.send(result.map_err(Self::wrap));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, id, "Delete");
                    let result = self.delete(id).await;
                    match &result {
                        Ok(_) => info!(entity_type, id, "Deleted"),
                        Err(e) => warn!(entity_type, id, error = %e, "Delete failed"),
                    }
                    let _ = respond_to.send(result.map_err(Self::wrap));
                }
                ResourceRequest::Action { action, respond_to } => {
                    debug!(entity_type, ?action, "Action");
                    let result = T::handle_action(action, &self.db, &context).await;
                    match &result {
                        Ok(_) => debug!(entity_type, "Action ok"),
                        Err(e) => warn!(entity_type, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result.map_err(Self::wrap));
                }
            }
        }

        info!(entity_type, "Shutdown");
    }

    fn wrap(e: T::Error) -> FrameworkError {
        FrameworkError::EntityError(Box::new(e))
    }

    async fn list(&self) -> Result<Vec<T>, T::Error> {
        let mut conn = self.db.acquire().await;
        Ok(T::fetch_all(&mut conn).await?)
    }

    async fn create(&self, record: T) -> Result<T, T::Error> {
        let record = record.prepare()?;
        let mut conn = self.db.acquire().await;
        let id = record.insert(&mut conn).await?;
        Ok(record.with_id(id))
    }

    async fn update(&self, record: T) -> Result<T, T::Error> {
        let record = record.prepare()?;
        let mut conn = self.db.acquire().await;
        let affected = record.replace(&mut conn).await?;
        if affected == 0 {
            debug!(entity_type = self.entity_type, id = record.id(), "Update matched no row");
        }
        Ok(record)
    }

    async fn delete(&self, id: RecordId) -> Result<bool, T::Error> {
        let sql = format!("DELETE FROM {} WHERE id = ?", T::TABLE);
        let mut conn = self.db.acquire().await;
        let affected = sqlx::query(&sql)
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(StoreError::from)?
            .rows_affected();
        if affected == 0 {
            debug!(entity_type = self.entity_type, id, "Delete matched no row");
        }
        Ok(true)
    }
}

/// A cloneable, type-safe handle for sending requests to a [`ResourceActor`].
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List { respond_to })
            .await
    }

    pub async fn create(&self, record: T) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { record, respond_to })
            .await
    }

    pub async fn update(&self, record: T) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update { record, respond_to })
            .await
    }

    pub async fn delete(&self, id: RecordId) -> Result<bool, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Action { action, respond_to })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::Row;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: RecordId,
        text: String,
    }

    #[derive(Debug)]
    enum NoteAction {
        Count,
    }

    #[derive(Debug, thiserror::Error)]
    enum NoteError {
        #[error("blank note")]
        Blank,
        #[error("{0}")]
        Store(#[from] StoreError),
        #[error("{0}")]
        Other(String),
    }

    impl From<String> for NoteError {
        fn from(msg: String) -> Self {
            NoteError::Other(msg)
        }
    }

    #[async_trait]
    impl ActorEntity for Note {
        type Action = NoteAction;
        type ActionResult = i64;
        type Context = ();
        type Error = NoteError;

        const TABLE: &'static str = "notes";

        fn id(&self) -> RecordId {
            self.id
        }

        fn with_id(self, id: RecordId) -> Self {
            Self { id, ..self }
        }

        fn prepare(self) -> Result<Self, NoteError> {
            if self.text.trim().is_empty() {
                return Err(NoteError::Blank);
            }
            Ok(self)
        }

        async fn fetch_all(conn: &mut SqliteConnection) -> Result<Vec<Self>, StoreError> {
            let rows = sqlx::query("SELECT id, text FROM notes")
                .fetch_all(&mut *conn)
                .await?;
            rows.iter()
                .map(|row| -> Result<Note, StoreError> {
                    Ok(Note {
                        id: row.try_get("id")?,
                        text: row.try_get("text")?,
                    })
                })
                .collect()
        }

        async fn insert(&self, conn: &mut SqliteConnection) -> Result<RecordId, StoreError> {
            let done = sqlx::query("INSERT INTO notes (text) VALUES (?)")
                .bind(&self.text)
                .execute(&mut *conn)
                .await?;
            Ok(done.last_insert_rowid())
        }

        async fn replace(&self, conn: &mut SqliteConnection) -> Result<u64, StoreError> {
            let done = sqlx::query("UPDATE notes SET text = ? WHERE id = ?")
                .bind(&self.text)
                .bind(self.id)
                .execute(&mut *conn)
                .await?;
            Ok(done.rows_affected())
        }

        async fn handle_action(
            action: NoteAction,
            db: &Database,
            _ctx: &(),
        ) -> Result<i64, NoteError> {
            match action {
                NoteAction::Count => {
                    let mut conn = db.acquire().await;
                    let count = sqlx::query_scalar("SELECT COUNT(*) FROM notes")
                        .fetch_one(&mut *conn)
                        .await
                        .map_err(StoreError::from)?;
                    Ok(count)
                }
            }
        }
    }

    async fn notes_db() -> Database {
        let db = Database::in_memory().await.unwrap();
        {
            let mut conn = db.acquire().await;
            sqlx::query("CREATE TABLE notes (id INTEGER PRIMARY KEY AUTOINCREMENT, text TEXT NOT NULL)")
                .execute(&mut *conn)
                .await
                .unwrap();
        }
        db
    }

    fn note(text: &str) -> Note {
        Note {
            id: 0,
            text: text.into(),
        }
    }

    // --- Tests ---

    #[tokio::test]
    async fn test_resource_actor_crud_cycle() {
        let (actor, client) = ResourceActor::<Note>::new(10, notes_db().await);
        tokio::spawn(actor.run(()));

        // 1. Create assigns ids
        let first = client.create(note("oil change")).await.unwrap();
        let second = client.create(note("brake pads")).await.unwrap();
        assert!(first.id > 0);
        assert_ne!(first.id, second.id);

        // 2. Update is a full replace
        let edited = Note {
            text: "oil + filter".into(),
            ..first.clone()
        };
        assert_eq!(client.update(edited.clone()).await.unwrap(), edited);

        // 3. Action
        assert_eq!(client.perform_action(NoteAction::Count).await.unwrap(), 2);

        // 4. Delete
        assert!(client.delete(second.id).await.unwrap());
        assert_eq!(client.list().await.unwrap(), vec![edited]);
    }

    #[tokio::test]
    async fn test_missing_ids_are_silent_no_ops() {
        let (actor, client) = ResourceActor::<Note>::new(10, notes_db().await);
        tokio::spawn(actor.run(()));

        let kept = client.create(note("keep me")).await.unwrap();

        let ghost = Note {
            id: 999,
            text: "ghost".into(),
        };
        assert_eq!(client.update(ghost.clone()).await.unwrap(), ghost);
        assert!(client.delete(999).await.unwrap());
        assert_eq!(client.list().await.unwrap(), vec![kept]);
    }

    #[tokio::test]
    async fn test_prepare_rejection_reaches_caller_as_entity_error() {
        let (actor, client) = ResourceActor::<Note>::new(10, notes_db().await);
        tokio::spawn(actor.run(()));

        let err = client.create(note("   ")).await.unwrap_err();
        let err: NoteError = into_entity_error(err);
        assert!(matches!(err, NoteError::Blank));
        assert!(client.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_closed_actor_reports_actor_closed() {
        let (actor, client) = ResourceActor::<Note>::new(10, notes_db().await);
        drop(actor);

        let err = client.list().await.unwrap_err();
        assert!(matches!(err, FrameworkError::ActorClosed));
        let err: NoteError = into_entity_error(err);
        assert!(matches!(err, NoteError::Other(msg) if msg == "Actor closed"));
    }
}
