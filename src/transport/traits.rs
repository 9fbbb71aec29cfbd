//! Transport trait definitions.

use futures::future::BoxFuture;
use reqwest::Method;
use reqwest::header::HeaderMap;
use serde_json::Value;
use url::Url;

use crate::Error;

/// The boxed future returned by [`Transport::send`].
///
/// Resolves to the parsed JSON body, or `None` when the response had no body.
pub type TransportFuture<'a> = BoxFuture<'a, Result<Option<Value>, Error>>;

/// A fully-built HTTP request, ready to be sent.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute URL including the query string.
    pub url: Url,
    /// JSON body, if any.
    pub body: Option<Value>,
    /// Request headers (authorization, user agent).
    pub headers: HeaderMap,
}

impl TransportRequest {
    /// Returns a header value as a string, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    /// Returns the value of a query parameter.
    pub fn query_param(&self, name: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }
}

/// Sends HTTP requests on behalf of the client.
///
/// Implementations perform exactly one attempt per call: no retries and no
/// caching. A non-success status, a network failure, or an undecodable body
/// resolves to an `Err`.
///
/// ## Object Safety
///
/// This trait is object-safe and is stored as `Arc<dyn Transport>`.
///
/// ## Example
///
/// ```rust
/// use orbit_members::transport::{Transport, TransportFuture, TransportRequest};
///
/// struct AlwaysEmpty;
///
/// impl Transport for AlwaysEmpty {
///     fn send(&self, _request: TransportRequest) -> TransportFuture<'_> {
///         Box::pin(async { Ok(None) })
///     }
/// }
/// ```
pub trait Transport: Send + Sync {
    /// Sends the request and returns the parsed JSON body.
    fn send(&self, request: TransportRequest) -> TransportFuture<'_>;
}
