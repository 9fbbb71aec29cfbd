//! MockTransport for testing without a network.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;

use crate::Error;
use crate::transport::{Transport, TransportFuture, TransportRequest};

/// An in-memory transport for tests.
///
/// Every request is recorded. Responses are replayed in the order they were
/// queued; once the queue is empty, requests resolve to an empty body.
///
/// Clones share the same queue and request log, so a test can keep one
/// handle while the client owns another.
///
/// ## Example
///
/// ```rust
/// use orbit_members::testing::MockTransport;
///
/// let mock = MockTransport::new()
///     .respond_with(serde_json::json!({"data": []}))
///     .fail_with("Network Error");
///
/// assert_eq!(mock.request_count(), 0);
/// ```
#[derive(Clone, Default)]
pub struct MockTransport {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    responses: Mutex<VecDeque<Result<Option<Value>, Error>>>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl MockTransport {
    /// Creates a mock transport with no queued responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a JSON response body.
    #[must_use]
    pub fn respond_with(self, body: Value) -> Self {
        self.push_response(Some(body));
        self
    }

    /// Queues a response without a body.
    #[must_use]
    pub fn respond_empty(self) -> Self {
        self.push_response(None);
        self
    }

    /// Queues a transport failure with the given message.
    #[must_use]
    pub fn fail_with(self, message: impl Into<String>) -> Self {
        self.push_error(Error::request(message.into()));
        self
    }

    /// Queues a response body.
    pub fn push_response(&self, body: Option<Value>) {
        self.inner.responses.lock().push_back(Ok(body));
    }

    /// Queues an error.
    pub fn push_error(&self, error: Error) {
        self.inner.responses.lock().push_back(Err(error));
    }

    /// Returns all recorded requests, oldest first.
    pub fn requests(&self) -> Vec<TransportRequest> {
        self.inner.requests.lock().clone()
    }

    /// Returns the most recent request.
    pub fn last_request(&self) -> Option<TransportRequest> {
        self.inner.requests.lock().last().cloned()
    }

    /// Returns the number of requests sent.
    pub fn request_count(&self) -> usize {
        self.inner.requests.lock().len()
    }
}

impl std::fmt::Debug for MockTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockTransport")
            .field("queued", &self.inner.responses.lock().len())
            .field("requests", &self.request_count())
            .finish()
    }
}

impl Transport for MockTransport {
    fn send(&self, request: TransportRequest) -> TransportFuture<'_> {
        self.inner.requests.lock().push(request);
        let response = self.inner.responses.lock().pop_front().unwrap_or(Ok(None));
        Box::pin(async move { response })
    }
}
