//! Client types for the Orbit members API.
//!
//! - [`Client`]: holds resolved credentials and the transport, and exposes the
//!   low-level [`request`](Client::request) primitive
//! - [`MembersClient`](crate::members::MembersClient): member operations,
//!   via [`Client::members`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use orbit_members::prelude::*;
//!
//! let client = Client::builder()
//!     .workspace_id("my-workspace")
//!     .api_key("obu_...")
//!     .build()?;
//!
//! let page = client.members().list().items(50).await?;
//! println!("{} members, next page: {:?}", page.items, page.next_page);
//! ```

mod builder;
mod inner;

pub use builder::ClientBuilder;

use std::sync::Arc;

use serde_json::Value;

use crate::{Error, auth::Credentials, members::MembersClient, types::Query};

/// The Orbit members API client.
///
/// Create a client with [`Client::builder()`] or [`Client::from_env()`].
/// Construction fails with [`ErrorKind::Configuration`](crate::ErrorKind::Configuration)
/// when the workspace id or API key cannot be resolved.
///
/// ## Thread Safety
///
/// `Client` is `Clone` and thread-safe. Credentials are immutable after
/// construction, so any number of operations may run concurrently against
/// the same client.
///
/// ## Example
///
/// ```rust,ignore
/// use orbit_members::Client;
///
/// let client = Client::builder()
///     .workspace_id("my-workspace")
///     .api_key("obu_...")
///     .build()?;
///
/// let client2 = client.clone();
/// tokio::spawn(async move {
///     let member = client2.members().get("abc123").await;
/// });
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<inner::ClientInner>,
}

impl Client {
    /// Creates a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Creates a client using only environment credentials.
    ///
    /// Reads `ORBIT_WORKSPACE_ID`/`WORKSPACE_ID` and `ORBIT_API_KEY`/`API_KEY`.
    pub fn from_env() -> Result<Self, Error> {
        ClientBuilder::new().build()
    }

    /// Creates a client with an explicit workspace id and API key.
    ///
    /// Empty values fall back to the environment.
    pub fn new(workspace_id: impl Into<String>, api_key: impl Into<String>) -> Result<Self, Error> {
        ClientBuilder::new().workspace_id(workspace_id).api_key(api_key).build()
    }

    /// Returns the resolved credentials.
    pub fn credentials(&self) -> &Credentials {
        &self.inner.credentials
    }

    /// Returns the API base URL (origin and version segment).
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Returns a client for member operations.
    pub fn members(&self) -> MembersClient {
        MembersClient::new(self.clone())
    }

    /// Sends a request to a workspace-relative API path.
    ///
    /// The URL is `{base_url}{workspace_id}{path}?{query}`; the `?` is
    /// present even when the query is empty. The request carries
    /// `Authorization: Bearer <api key>` and the configured `User-Agent`.
    ///
    /// Returns the parsed JSON body, or `Value::Null` when the response has
    /// no body.
    ///
    /// # Errors
    ///
    /// - [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument) when
    ///   `method` or `path` is empty
    /// - [`ErrorKind::Request`](crate::ErrorKind::Request) when the request
    ///   cannot be built or the transport fails
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use orbit_members::Query;
    ///
    /// let activities = client
    ///     .request("GET", "/activities", &Query::new().with("items", 10), None)
    ///     .await?;
    /// ```
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        query: &Query,
        body: Option<&Value>,
    ) -> Result<Value, Error> {
        self.inner.request(method, path, query, body).await
    }

    pub(crate) fn from_inner(inner: inner::ClientInner) -> Self {
        Self { inner: Arc::new(inner) }
    }

    pub(crate) fn inner(&self) -> &inner::ClientInner {
        &self.inner
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.inner.base_url)
            .field("credentials", &self.inner.credentials)
            .finish_non_exhaustive()
    }
}
