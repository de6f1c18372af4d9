//! # Mock Clients
//!
//! `MockClient<T>` hands out a real [`ResourceClient<T>`] whose requests are
//! answered from a queue of expectations instead of a database. Use it to
//! test logic that sits *around* a client (for example quote conversion,
//! which talks to the work-order actor) without spawning actors.
//!
//! | | MockClient | Real actor + in-memory DB |
//! |---|---|---|
//! | **State** | none, answers are scripted | real rows |
//! | **Error injection** | `return_err` | hard |
//! | **Use case** | client orchestration | actor SQL and the full system |
//!
//! When a test needs to inspect the payload that was sent, use
//! [`create_mock_client`] with the `expect_*` helpers and answer the request
//! by hand.

use super::core::{ActorEntity, FrameworkError, RecordId, ResourceClient, ResourceRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A scripted answer for the next request the mock receives.
enum Expectation<T: ActorEntity> {
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Create {
        response: Result<T, FrameworkError>,
    },
    Update {
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: RecordId,
        response: Result<bool, FrameworkError>,
    },
    Action {
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn lock<T: ActorEntity>(exps: &Expectations<T>) -> MutexGuard<'_, VecDeque<Expectation<T>>> {
    exps.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A mock client with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<WorkOrder>::new();
/// mock.expect_create().return_ok(saved_order);
///
/// let client = WorkOrderClient::new(mock.client());
/// // exercise code that uses the client...
/// mock.verify(); // every expectation was consumed
/// ```
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    ///
    /// Must be called inside a tokio runtime. A request that does not match
    /// the next expectation panics the mock task, which the caller observes
    /// as [`FrameworkError::ActorDropped`].
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = lock(&queue).pop_front();

                match (request, expectation) {
                    (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Update { respond_to, .. },
                        Some(Expectation::Update { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Delete { id, respond_to },
                        Some(Expectation::Delete {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "Delete called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { respond_to, .. },
                        Some(Expectation::Action { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        panic!("Unexpected request or expectation mismatch: {request:?}");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(|response| Expectation::List { response })
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(|response| Expectation::Create { response })
    }

    pub fn expect_update(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(|response| Expectation::Update { response })
    }

    pub fn expect_delete(&mut self, id: RecordId) -> ExpectationBuilder<T, bool> {
        self.builder(move |response| Expectation::Delete { id, response })
    }

    pub fn expect_action(&mut self) -> ExpectationBuilder<T, T::ActionResult> {
        self.builder(|response| Expectation::Action { response })
    }

    fn builder<R>(
        &self,
        make: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            make: Box::new(make),
            expectations: self.expectations.clone(),
        }
    }

    /// Panics unless every expectation was consumed.
    pub fn verify(&self) {
        let remaining = lock(&self.expectations).len();
        if remaining > 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

/// Builder that queues one scripted response.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    make: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
    expectations: Expectations<T>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        let exp = (self.make)(Ok(value));
        lock(&self.expectations).push_back(exp);
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        let exp = (self.make)(Err(error));
        lock(&self.expectations).push_back(exp);
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// The test plays the actor: it pulls requests with the `expect_*` helpers,
/// asserts on their payloads and answers through the returned responder.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Returns the payload and responder of the next request if it is a Create.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { record, respond_to }) => Some((record, respond_to)),
        _ => None,
    }
}

/// Returns the action and responder of the next request if it is an Action.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Database, StoreError};
    use async_trait::async_trait;
    use sqlx::SqliteConnection;

    #[derive(Clone, Debug, PartialEq)]
    struct Part {
        id: RecordId,
        name: String,
    }

    #[derive(Debug)]
    enum PartAction {
        Count,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("part error")]
    struct PartError;

    impl From<StoreError> for PartError {
        fn from(_: StoreError) -> Self {
            PartError
        }
    }

    #[async_trait]
    impl ActorEntity for Part {
        type Action = PartAction;
        type ActionResult = i64;
        type Context = ();
        type Error = PartError;

        const TABLE: &'static str = "parts";

        fn id(&self) -> RecordId {
            self.id
        }
        fn with_id(self, id: RecordId) -> Self {
            Self { id, ..self }
        }
        async fn fetch_all(_: &mut SqliteConnection) -> Result<Vec<Self>, StoreError> {
            Ok(Vec::new())
        }
        async fn insert(&self, _: &mut SqliteConnection) -> Result<RecordId, StoreError> {
            Ok(0)
        }
        async fn replace(&self, _: &mut SqliteConnection) -> Result<u64, StoreError> {
            Ok(0)
        }
        async fn handle_action(_: PartAction, _: &Database, _: &()) -> Result<i64, PartError> {
            Ok(0)
        }
    }

    fn part(id: RecordId, name: &str) -> Part {
        Part {
            id,
            name: name.into(),
        }
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Part>::new();
        mock.expect_create().return_ok(part(7, "filter"));
        mock.expect_list().return_ok(vec![part(7, "filter")]);
        mock.expect_delete(7).return_ok(true);
        mock.expect_action().return_ok(3);

        let client = mock.client();
        let created = client.create(part(0, "filter")).await.unwrap();
        assert_eq!(created.id, 7);
        assert_eq!(client.list().await.unwrap().len(), 1);
        assert!(client.delete(7).await.unwrap());
        assert_eq!(client.perform_action(PartAction::Count).await.unwrap(), 3);

        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_client_error_injection() {
        let mut mock = MockClient::<Part>::new();
        mock.expect_update().return_err(FrameworkError::ActorDropped);

        let result = mock.client().update(part(1, "belt")).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
        mock.verify();
    }

    #[tokio::test]
    async fn test_raw_channel_helpers_expose_payload() {
        let (client, mut receiver) = create_mock_client::<Part>(10);

        let task = tokio::spawn(async move { client.create(part(0, "spark plug")).await });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.name, "spark plug");
        responder.send(Ok(payload.with_id(12))).unwrap();

        let created = task.await.unwrap().unwrap();
        assert_eq!(created.id, 12);
    }
}
