//! Error kind enumeration for categorizing client errors.

/// Categorization of client errors.
///
/// | ErrorKind         | Raised by                  | Action               |
/// |-------------------|----------------------------|----------------------|
/// | `Configuration`   | client construction        | Fix credentials      |
/// | `InvalidArgument` | operation argument checks  | Fix input            |
/// | `Request`         | the HTTP round trip        | Inspect `status()`   |
///
/// None of these are retried by the client; a failed attempt is terminal for
/// that call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Missing mandatory configuration (workspace id or API key), or an
    /// unusable base URL / HTTP client setting.
    #[error("configuration error")]
    Configuration,

    /// Missing or malformed operation argument.
    ///
    /// Raised before any request is sent.
    #[error("invalid argument")]
    InvalidArgument,

    /// Transport-level failure: network error, non-success HTTP status,
    /// serialization fault, or a request that could not be built.
    #[error("request error")]
    Request,
}

impl ErrorKind {
    /// Returns `true` if the error was raised before any request was sent.
    #[inline]
    pub fn is_client_side(&self) -> bool {
        matches!(self, ErrorKind::Configuration | ErrorKind::InvalidArgument)
    }

    /// Returns the kind as a static string, suitable for structured logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Configuration => "configuration",
            ErrorKind::InvalidArgument => "invalid_argument",
            ErrorKind::Request => "request",
        }
    }
}
