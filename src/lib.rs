//! # Orbit Members
//!
//! Rust client for the member endpoints of the Orbit community API.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use orbit_members::prelude::*;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), orbit_members::Error> {
//!     // Reads ORBIT_WORKSPACE_ID / ORBIT_API_KEY when not set explicitly
//!     let client = Client::builder().workspace_id("my-workspace").build()?;
//!     let members = client.members();
//!
//!     members
//!         .create(&json!({
//!             "member": {"name": "Ada"},
//!             "identity": {"source": "github", "username": "ada"}
//!         }))
//!         .await?;
//!
//!     let page = members.list().items(25).await?;
//!     println!("{} members, next page: {:?}", page.items, page.next_page);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Key Concepts
//!
//! - **Credentials**: a workspace id and API key, explicit or from the
//!   environment, resolved once when the client is built
//! - **Request primitive**: [`Client::request`] sends any workspace-relative
//!   call; the member operations are thin wrappers over it
//! - **Validation before I/O**: malformed arguments fail with
//!   [`ErrorKind::InvalidArgument`] without sending a request
//!
//! ## Features
//!
//! - `rustls` (default): Use rustls for TLS
//! - `native-tls`: Use native TLS (OpenSSL on Linux, Secure Transport on macOS)

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

// Core modules
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod types;

// Workspace APIs
pub mod members;

// Transport layer
pub mod transport;

// Testing utilities
pub mod testing;

pub mod user_agent;

// Prelude for convenient imports
pub mod prelude;

pub use auth::{CredentialResolver, Credentials};
pub use client::{Client, ClientBuilder};
pub use config::HttpConfig;
pub use error::{Error, ErrorKind, Result};
pub use members::{
    FindMemberQuery, IdentityData, ListResult, MemberUpdate, MembersClient, SortDirection,
    UpdateOutcome,
};
pub use types::{Query, QueryValue};
