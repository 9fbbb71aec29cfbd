//! Credential resolution from explicit values and the environment.

use super::Credentials;
use crate::{Error, user_agent};

/// Environment variables consulted for the workspace id, in order.
pub const WORKSPACE_ID_ENV_VARS: &[&str] = &["ORBIT_WORKSPACE_ID", "WORKSPACE_ID"];

/// Environment variables consulted for the API key, in order.
pub const API_KEY_ENV_VARS: &[&str] = &["ORBIT_API_KEY", "API_KEY"];

const MISSING_CREDENTIALS: &str = "You must provide an Orbit Workspace ID and Orbit API Key";

/// Resolves [`Credentials`] from explicit values, falling back to the environment.
///
/// Per field, the first non-empty value wins:
///
/// 1. the explicitly set value
/// 2. the environment variables ([`WORKSPACE_ID_ENV_VARS`], [`API_KEY_ENV_VARS`])
/// 3. for the User-Agent only, the library default
///    ([`user_agent::user_agent`](crate::user_agent::user_agent))
///
/// Resolution fails with [`ErrorKind::Configuration`](crate::ErrorKind::Configuration)
/// when the workspace id or the API key is still missing.
///
/// ## Example
///
/// ```rust
/// use std::collections::HashMap;
/// use orbit_members::auth::CredentialResolver;
///
/// let env = HashMap::from([("ORBIT_API_KEY", "obu_from_env")]);
///
/// let credentials = CredentialResolver::new()
///     .workspace_id("my-workspace")
///     .resolve_with(|name| env.get(name).map(|v| v.to_string()))
///     .unwrap();
///
/// assert_eq!(credentials.api_key(), "obu_from_env");
/// ```
#[derive(Clone, Default)]
pub struct CredentialResolver {
    workspace_id: Option<String>,
    api_key: Option<String>,
    user_agent: Option<String>,
}

impl CredentialResolver {
    /// Creates a resolver with no explicit values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the workspace id explicitly.
    #[must_use]
    pub fn workspace_id(mut self, workspace_id: impl Into<String>) -> Self {
        self.workspace_id = Some(workspace_id.into());
        self
    }

    /// Sets the API key explicitly.
    #[must_use]
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the User-Agent explicitly.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Resolves credentials against the process environment.
    pub fn resolve(self) -> Result<Credentials, Error> {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Resolves credentials against a custom environment lookup.
    ///
    /// `lookup` receives a variable name and returns its value, if set.
    pub fn resolve_with<F>(self, lookup: F) -> Result<Credentials, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let workspace_id = non_empty(self.workspace_id)
            .or_else(|| from_env(WORKSPACE_ID_ENV_VARS, &lookup));
        let api_key = non_empty(self.api_key).or_else(|| from_env(API_KEY_ENV_VARS, &lookup));

        let (Some(workspace_id), Some(api_key)) = (workspace_id, api_key) else {
            tracing::debug!("workspace id or API key missing after resolution");
            return Err(Error::configuration(MISSING_CREDENTIALS));
        };

        let user_agent =
            non_empty(self.user_agent).unwrap_or_else(|| user_agent::user_agent().to_string());

        Ok(Credentials::new(workspace_id, api_key, user_agent))
    }
}

impl std::fmt::Debug for CredentialResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialResolver")
            .field("workspace_id", &self.workspace_id)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn from_env<F>(names: &[&str], lookup: &F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    names.iter().find_map(|name| non_empty(lookup(name)))
}
