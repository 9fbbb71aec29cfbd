//! Transport layer for Orbit API communication.
//!
//! The [`Client`](crate::Client) builds fully-formed [`TransportRequest`]s
//! (absolute URL, auth headers, JSON body) and hands them to a [`Transport`]:
//!
//! - [`RestTransport`]: HTTP via reqwest (default)
//! - [`MockTransport`](crate::testing::MockTransport): in-memory, for tests
//!
//! Custom transports implement [`Transport`] and are installed with
//! [`ClientBuilder::build_with_transport`](crate::ClientBuilder::build_with_transport).

mod rest;
mod traits;

pub use rest::RestTransport;
pub use traits::{Transport, TransportFuture, TransportRequest};
