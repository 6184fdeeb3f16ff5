//! # Mock Framework
//!
//! Stand-ins for a running [`ResourceActor`](super::ResourceActor), used to
//! test client logic and to inject store failures that a real in-memory actor
//! never produces.
//!
//! | Helper | Use |
//! |--------|-----|
//! | [`MockClient`] | Queue canned replies, then [`MockClient::verify`] they were all consumed |
//! | [`create_mock_client`] + [`expect_get`] / [`expect_action`] | Inspect each request and answer it by hand |
//!
//! ```rust
//! use jadlog_tracking::framework::{mock::MockClient, FrameworkError};
//! use jadlog_tracking::model::{Order, OrderId};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Order>::new();
//!     mock.expect_get(OrderId(1)).return_err(FrameworkError::ActorClosed);
//!
//!     let result = mock.client().get(OrderId(1)).await;
//!     assert!(matches!(result, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```

use super::client::ResourceClient;
use super::entity::ActorEntity;
use super::error::FrameworkError;
use super::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

/// A queued reply for the next request the mock receives.
enum Expectation<T: ActorEntity> {
    Get {
        response: Result<Option<T>, FrameworkError>,
    },
    Action {
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in order. A request that does not match the next
/// expectation panics the mock task, which the caller observes as
/// [`FrameworkError::ActorDropped`].
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
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();

                match (request, expectation) {
                    (ResourceRequest::Get { respond_to, .. }, Some(Expectation::Get { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { respond_to, .. },
                        Some(Expectation::Action { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
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

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, _id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self, _id: T::Id) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: ActorEntity> {
    expectations: Expectations<T>,
}

impl<T: ActorEntity> GetExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: Option<T>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Get { response: Ok(value) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Get {
                response: Err(error),
            });
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectationBuilder<T: ActorEntity> {
    expectations: Expectations<T>,
}

impl<T: ActorEntity> ActionExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, result: T::ActionResult) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Action {
                response: Ok(result),
            });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Action {
                response: Err(error),
            });
    }
}

/// Creates a client whose requests land on a receiver the test controls.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Order, OrderId};
    use crate::order_actor::{OrderAction, OrderActionResult};

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_get(OrderId(1))
            .return_ok(Some(Order::new(OrderId(1), None, None)));
        mock.expect_action(OrderId(1))
            .return_ok(OrderActionResult::GetMeta(None));

        let client = mock.client();
        let fetched = client.get(OrderId(1)).await.unwrap();
        assert_eq!(fetched.unwrap().id, OrderId(1));

        let meta = client
            .perform_action(OrderId(1), OrderAction::GetMeta("k".into()))
            .await
            .unwrap();
        assert_eq!(meta, OrderActionResult::GetMeta(None));

        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_client_error_injection() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_action(OrderId(2))
            .return_err(FrameworkError::ActorClosed);

        let result = mock
            .client()
            .perform_action(OrderId(2), OrderAction::AddNote("n".into()))
            .await;
        assert!(matches!(result, Err(FrameworkError::ActorClosed)));
    }

    #[tokio::test]
    async fn test_expect_get_helper() {
        let (client, mut receiver) = create_mock_client::<Order>(4);
        let task = tokio::spawn(async move { client.get(OrderId(5)).await });

        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(id, OrderId(5));
        responder.send(Ok(None)).unwrap();

        assert!(task.await.unwrap().unwrap().is_none());
    }
}
