//! Client builder.

use std::sync::Arc;
use std::time::Duration;

use super::inner::ClientInner;
use crate::{
    Client, Error,
    auth::CredentialResolver,
    config::HttpConfig,
    transport::{RestTransport, Transport},
};

/// Builder for creating [`Client`] instances.
///
/// ## Credentials
///
/// - `workspace_id()`: the Orbit workspace slug
/// - `api_key()`: the Orbit API key
/// - `user_agent()`: optional User-Agent override
///
/// Unset or empty credentials fall back to the environment; see
/// [`CredentialResolver`]. `build()` fails with
/// [`ErrorKind::Configuration`](crate::ErrorKind::Configuration) if the
/// workspace id or API key is still missing.
///
/// ## HTTP Settings
///
/// - `base_url()`: API origin and version segment (HTTPS required)
/// - `timeout()`: request timeout
/// - `insecure()`: allow plain HTTP and skip certificate checks
/// - `http_config()`: replace all HTTP settings at once
///
/// ## Example
///
/// ```rust
/// use std::time::Duration;
/// use orbit_members::Client;
///
/// let client = Client::builder()
///     .workspace_id("my-workspace")
///     .api_key("obu_123")
///     .user_agent("community-sync/2.1")
///     .timeout(Duration::from_secs(10))
///     .build()
///     .unwrap();
///
/// assert_eq!(client.credentials().user_agent(), "community-sync/2.1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClientBuilder {
    resolver: CredentialResolver,
    http_config: HttpConfig,
}

impl ClientBuilder {
    /// Creates a new client builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the workspace id.
    #[must_use]
    pub fn workspace_id(mut self, workspace_id: impl Into<String>) -> Self {
        self.resolver = self.resolver.workspace_id(workspace_id);
        self
    }

    /// Sets the API key.
    #[must_use]
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.resolver = self.resolver.api_key(api_key);
        self
    }

    /// Sets the User-Agent sent with every request.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.resolver = self.resolver.user_agent(user_agent);
        self
    }

    /// Sets the API base URL, including the version segment.
    ///
    /// Defaults to [`DEFAULT_BASE_URL`](crate::config::DEFAULT_BASE_URL).
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.http_config.base_url = base_url.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.http_config.timeout = timeout;
        self
    }

    /// Allows HTTP base URLs and disables certificate verification.
    ///
    /// **WARNING**: This is insecure and should only be used for local
    /// development and mock servers.
    #[must_use]
    pub fn insecure(mut self) -> Self {
        self.http_config.skip_verification = true;
        self
    }

    /// Replaces all HTTP settings.
    #[must_use]
    pub fn http_config(mut self, config: HttpConfig) -> Self {
        self.http_config = config;
        self
    }

    /// Builds the client with the default reqwest transport.
    pub fn build(self) -> Result<Client, Error> {
        let transport = RestTransport::new(&self.http_config)?;
        self.build_with_transport(Arc::new(transport))
    }

    /// Builds the client with a custom transport.
    ///
    /// Used for testing with [`MockTransport`](crate::testing::MockTransport)
    /// or for plugging in a different HTTP stack.
    pub fn build_with_transport(self, transport: Arc<dyn Transport>) -> Result<Client, Error> {
        let credentials = self.resolver.resolve()?;
        let base_url = validate_base_url(&self.http_config)?;

        tracing::debug!(
            workspace = credentials.workspace_id(),
            base_url = %base_url,
            "orbit members client created"
        );

        Ok(Client::from_inner(ClientInner { credentials, base_url, transport }))
    }
}

fn validate_base_url(config: &HttpConfig) -> Result<String, Error> {
    let base_url = config.normalized_base_url();
    let parsed = url::Url::parse(&base_url).map_err(|e| {
        Error::configuration(format!("invalid base URL: {}", e)).with_source(e)
    })?;

    if parsed.scheme() != "https" && !config.skip_verification {
        return Err(Error::configuration(
            "HTTPS is required. Use .insecure() for development with HTTP.",
        ));
    }

    Ok(base_url)
}
