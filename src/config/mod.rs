//! Configuration types for the Orbit members client.
//!
//! - [`HttpConfig`]: API origin, timeouts, and TLS verification
//!
//! Credentials are configured separately through
//! [`CredentialResolver`](crate::auth::CredentialResolver).

mod http;

pub use http::{DEFAULT_BASE_URL, HttpConfig};
