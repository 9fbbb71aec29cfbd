//! Main error type for the Orbit members client.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

use super::ErrorKind;

/// The primary error type for Orbit members operations.
///
/// ## Error Hierarchy
///
/// ```text
/// Error
/// ├── kind: ErrorKind          (category for matching)
/// ├── message: Cow<str>        (human-readable description)
/// ├── status: Option<u16>      (HTTP status, for non-success responses)
/// └── source: Option           (underlying cause)
/// ```
///
/// [`message()`](Error::message) returns the bare message without the kind
/// prefix, so a transport failure such as `"Network Error"` reaches the
/// caller unchanged.
///
/// ## Example
///
/// ```rust
/// use orbit_members::{Error, ErrorKind};
///
/// fn describe(err: &Error) -> String {
///     match (err.kind(), err.status()) {
///         (ErrorKind::Request, Some(status)) => format!("HTTP {}: {}", status, err.message()),
///         (ErrorKind::Request, None) => format!("network: {}", err.message()),
///         _ => err.to_string(),
///     }
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    /// The error category.
    kind: ErrorKind,

    /// Human-readable error message.
    message: Cow<'static, str>,

    /// HTTP status of a non-success response.
    status: Option<u16>,

    /// The underlying error, if any.
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl Error {
    /// Creates a new error with the given kind and message.
    ///
    /// # Example
    ///
    /// ```rust
    /// use orbit_members::{Error, ErrorKind};
    ///
    /// let err = Error::new(ErrorKind::InvalidArgument, "You must provide data");
    /// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    /// assert_eq!(err.message(), "You must provide data");
    /// ```
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self { kind, message: message.into(), status: None, source: None }
    }

    /// Returns the error kind for categorization.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the message without the kind prefix.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the HTTP status code, for errors caused by a non-success response.
    #[inline]
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Sets the HTTP status code for this error.
    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the source error for this error.
    #[must_use]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    /// Converts any failure raised while building or sending a request into a
    /// [`ErrorKind::Request`] error.
    ///
    /// The message is preserved verbatim and the original error is kept as
    /// the source. Errors that already are request errors pass through.
    pub(crate) fn into_request_error(self) -> Self {
        if self.kind == ErrorKind::Request {
            return self;
        }
        let message = self.message.clone();
        let status = self.status;
        let mut err = Error::request(message).with_source(self);
        err.status = status;
        err
    }

    // Convenience constructors

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    /// Creates a request error.
    pub fn request(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Request, message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind, kind.to_string())
    }
}
