//! HTTP configuration.

use std::time::Duration;

/// The Orbit API origin and version segment. Workspace paths are appended to it.
pub const DEFAULT_BASE_URL: &str = "https://app.orbit.love/api/v1/";

/// HTTP settings for the client.
///
/// ## Example
///
/// ```rust
/// use std::time::Duration;
/// use orbit_members::HttpConfig;
///
/// let config = HttpConfig::builder()
///     .timeout(Duration::from_secs(5))
///     .build();
///
/// assert_eq!(config.base_url, "https://app.orbit.love/api/v1/");
/// ```
#[derive(Debug, Clone, bon::Builder)]
pub struct HttpConfig {
    /// API base URL, including the version segment.
    #[builder(default = DEFAULT_BASE_URL.to_string(), into)]
    pub base_url: String,

    /// Total timeout for a request, including reading the body.
    #[builder(default = Duration::from_secs(30))]
    pub timeout: Duration,

    /// Timeout for establishing the connection.
    #[builder(default = Duration::from_secs(10))]
    pub connect_timeout: Duration,

    /// Whether to skip certificate verification and allow plain HTTP.
    ///
    /// **WARNING**: only for local development and mock servers.
    #[builder(default = false)]
    pub skip_verification: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl HttpConfig {
    /// Returns the base URL with a guaranteed trailing slash.
    pub(crate) fn normalized_base_url(&self) -> String {
        if self.base_url.ends_with('/') {
            self.base_url.clone()
        } else {
            format!("{}/", self.base_url)
        }
    }
}
