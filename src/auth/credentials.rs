//! Resolved credentials for the Orbit API.

use std::fmt;
use std::sync::Arc;

/// Credentials scoping every request to one Orbit workspace.
///
/// Only [`CredentialResolver`](super::CredentialResolver) constructs this
/// type, so the workspace id and API key are always non-empty. The value is
/// immutable and cheap to clone.
///
/// The API key is redacted from `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    workspace_id: Arc<str>,
    api_key: Arc<str>,
    user_agent: Arc<str>,
}

impl Credentials {
    pub(crate) fn new(workspace_id: String, api_key: String, user_agent: String) -> Self {
        debug_assert!(!workspace_id.is_empty() && !api_key.is_empty());
        Self {
            workspace_id: Arc::from(workspace_id),
            api_key: Arc::from(api_key),
            user_agent: Arc::from(user_agent),
        }
    }

    /// Returns the workspace id (the tenant slug in API paths).
    pub fn workspace_id(&self) -> &str {
        &self.workspace_id
    }

    /// Returns the API key sent as the bearer token.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the User-Agent sent with every request.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Returns the value of the `Authorization` header.
    pub(crate) fn bearer(&self) -> String {
        format!("Bearer {}", self.api_key)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("workspace_id", &self.workspace_id)
            .field("api_key", &"[REDACTED]")
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
