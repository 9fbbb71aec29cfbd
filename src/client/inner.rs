//! Internal client implementation: the request primitive.

use std::sync::Arc;

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use serde_json::Value;
use url::Url;

use crate::auth::Credentials;
use crate::error::Error;
use crate::transport::{Transport, TransportRequest};
use crate::types::Query;

const MISSING_REQUEST_PARTS: &str = "You must pass a client, method, and endpoint";

pub(crate) struct ClientInner {
    /// Resolved credentials.
    pub credentials: Credentials,

    /// API base URL with a trailing slash.
    pub base_url: String,

    /// Transport used for every request.
    pub transport: Arc<dyn Transport>,
}

impl ClientInner {
    /// Validates the method and path, then sends the request.
    pub(crate) async fn request(
        &self,
        method: &str,
        path: &str,
        query: &Query,
        body: Option<&Value>,
    ) -> Result<Value, Error> {
        let method = method.trim();
        if method.is_empty() || path.trim().is_empty() {
            return Err(Error::invalid_argument(MISSING_REQUEST_PARTS));
        }

        let method = Method::from_bytes(method.to_ascii_uppercase().as_bytes()).map_err(|e| {
            Error::request(format!("Invalid HTTP method: {}", e)).with_source(e)
        })?;

        self.execute(method, path, query, body).await
    }

    /// Builds and sends a request. Every failure surfaces as a request error.
    pub(crate) async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &Query,
        body: Option<&Value>,
    ) -> Result<Value, Error> {
        let request =
            self.build_request(method, path, query, body).map_err(Error::into_request_error)?;

        tracing::debug!(
            method = %request.method,
            path = request.url.path(),
            workspace = self.credentials.workspace_id(),
            "sending request"
        );

        match self.transport.send(request).await {
            Ok(body) => {
                tracing::debug!(has_body = body.is_some(), "request completed");
                Ok(body.unwrap_or(Value::Null))
            },
            Err(err) => {
                tracing::warn!(status = ?err.status(), error = err.message(), "request failed");
                Err(err.into_request_error())
            },
        }
    }

    fn build_request(
        &self,
        method: Method,
        path: &str,
        query: &Query,
        body: Option<&Value>,
    ) -> Result<TransportRequest, Error> {
        let url = self.build_url(path, query)?;
        let headers = self.build_headers()?;

        Ok(TransportRequest { method, url, body: body.cloned(), headers })
    }

    /// Builds `{base_url}{workspace_id}{path}?{query}`.
    fn build_url(&self, path: &str, query: &Query) -> Result<Url, Error> {
        let separator = if path.starts_with('/') { "" } else { "/" };
        let raw = format!(
            "{}{}{}{}?{}",
            self.base_url,
            urlencoding::encode(self.credentials.workspace_id()),
            separator,
            path,
            query.encode()
        );

        Url::parse(&raw)
            .map_err(|e| Error::request(format!("Invalid request URL: {}", e)).with_source(e))
    }

    fn build_headers(&self) -> Result<HeaderMap, Error> {
        let mut headers = HeaderMap::new();

        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&self.credentials.bearer())
                .map_err(|_| Error::request("Invalid API key format"))?,
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(self.credentials.user_agent())
                .map_err(|_| Error::request("Invalid User-Agent header value"))?,
        );

        Ok(headers)
    }
}
