//! Authentication and credentials for the Orbit API.
//!
//! Every request is authenticated with a workspace-scoped API key sent as a
//! bearer token:
//!
//! - [`Credentials`]: the resolved workspace id, API key, and User-Agent
//! - [`CredentialResolver`]: resolves credentials from explicit values,
//!   falling back to the environment
//!
//! ## Environment
//!
//! | Field        | Variables (first non-empty wins)       |
//! |--------------|----------------------------------------|
//! | workspace id | `ORBIT_WORKSPACE_ID`, `WORKSPACE_ID`   |
//! | API key      | `ORBIT_API_KEY`, `API_KEY`             |
//!
//! ```rust
//! use orbit_members::auth::CredentialResolver;
//!
//! let credentials = CredentialResolver::new()
//!     .workspace_id("my-workspace")
//!     .api_key("obu_123")
//!     .resolve_with(|_| None)
//!     .unwrap();
//! assert_eq!(credentials.workspace_id(), "my-workspace");
//! ```

mod credentials;
mod resolver;

pub use credentials::Credentials;
pub use resolver::{API_KEY_ENV_VARS, CredentialResolver, WORKSPACE_ID_ENV_VARS};
