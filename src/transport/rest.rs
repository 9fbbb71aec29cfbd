//! REST transport implementation using reqwest.

use reqwest::StatusCode;
use reqwest::header::{ACCEPT, HeaderValue};

use super::traits::{Transport, TransportFuture, TransportRequest};
use crate::Error;
use crate::config::HttpConfig;

/// HTTP transport backed by a pooled `reqwest::Client`.
///
/// Sends JSON bodies and decodes JSON responses. Empty bodies (including
/// `204 No Content`) resolve to `None`.
#[derive(Clone)]
pub struct RestTransport {
    client: reqwest::Client,
}

impl std::fmt::Debug for RestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestTransport").finish_non_exhaustive()
    }
}

impl RestTransport {
    /// Creates a transport with the given HTTP settings.
    pub fn new(config: &HttpConfig) -> Result<Self, Error> {
        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout);

        if config.skip_verification {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder.build().map_err(|e| {
            Error::configuration(format!("Failed to create HTTP client: {}", e)).with_source(e)
        })?;

        Ok(Self { client })
    }

    /// Creates a transport from an existing `reqwest::Client`.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn execute(&self, request: TransportRequest) -> Result<Option<serde_json::Value>, Error> {
        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers)
            .header(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(ref body) = request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(map_reqwest_error)?;

        tracing::trace!(status = status.as_u16(), bytes = bytes.len(), "received response");

        if !status.is_success() {
            return Err(map_status_error(status, &bytes));
        }

        if status == StatusCode::NO_CONTENT || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        serde_json::from_slice(&bytes).map(Some).map_err(|e| {
            Error::request(format!("Failed to parse response: {}", e)).with_source(e)
        })
    }
}

impl Transport for RestTransport {
    fn send(&self, request: TransportRequest) -> TransportFuture<'_> {
        Box::pin(self.execute(request))
    }
}

/// Maps reqwest errors to client errors.
fn map_reqwest_error(e: reqwest::Error) -> Error {
    let message = if e.is_timeout() {
        format!("Request timed out: {}", e)
    } else if e.is_connect() {
        format!("Connection failed: {}", e)
    } else if e.is_decode() {
        format!("Failed to read response: {}", e)
    } else {
        format!("HTTP error: {}", e)
    };
    Error::request(message).with_source(e)
}

/// Maps a non-success HTTP status to a client error.
///
/// The message follows `Request failed with status code {status}`, with the
/// server's `message` or `error` field appended when the body carries one.
fn map_status_error(status: StatusCode, body: &[u8]) -> Error {
    let code = status.as_u16();
    let detail = serde_json::from_slice::<serde_json::Value>(body).ok().and_then(|json| {
        ["message", "error"]
            .iter()
            .find_map(|field| json.get(field).and_then(|v| v.as_str()).map(str::to_string))
    });

    let message = match detail {
        Some(detail) => format!("Request failed with status code {}: {}", code, detail),
        None => format!("Request failed with status code {}", code),
    };

    Error::request(message).with_status(code)
}
