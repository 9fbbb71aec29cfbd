//! Request and response types for member operations.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    Error,
    types::{PageCursor, Query, next_page_from_url},
};

/// One page of members.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListResult {
    /// The members on this page.
    pub data: Vec<Value>,
    /// Related resources (identities, organizations) referenced by `data`.
    pub included: Vec<Value>,
    /// Number of members on this page (`data.len()`).
    pub items: usize,
    /// Page number of the next page, if there is one.
    pub next_page: PageCursor,
}

impl ListResult {
    /// Shapes a list response body.
    ///
    /// `included` defaults to empty; a body without a `data` array is a
    /// request error.
    pub(crate) fn from_response(body: Value) -> Result<Self, Error> {
        let next_page =
            next_page_from_url(body.pointer("/links/next").and_then(Value::as_str));

        let Value::Object(mut body) = body else {
            return Err(Error::request("list response is not a JSON object"));
        };

        let data = match body.remove("data") {
            Some(Value::Array(data)) => data,
            _ => return Err(Error::request("list response did not include a data array")),
        };
        let included = match body.remove("included") {
            Some(Value::Array(included)) => included,
            _ => Vec::new(),
        };

        Ok(Self { items: data.len(), data, included, next_page })
    }

    /// Returns `true` if another page is available.
    pub fn has_next_page(&self) -> bool {
        self.next_page.is_some()
    }
}

/// Criteria for looking up a single member by identity.
///
/// A lookup needs a `source` (e.g. `github`, `twitter`, `email`) and at least
/// one of `username`, `uid`, or `email`. Empty strings count as missing.
///
/// ## Example
///
/// ```rust
/// use orbit_members::members::FindMemberQuery;
///
/// let query = FindMemberQuery::new("github").username("octocat");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FindMemberQuery {
    /// Identity source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Username on the source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// User id on the source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// Email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl FindMemberQuery {
    /// Creates a query for the given source.
    pub fn new(source: impl Into<String>) -> Self {
        Self { source: Some(source.into()), ..Self::default() }
    }

    /// Sets the username.
    #[must_use]
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Sets the source uid.
    #[must_use]
    pub fn uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = Some(uid.into());
        self
    }

    /// Sets the email.
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Validates the criteria and converts them into query parameters.
    pub(crate) fn to_query(&self) -> Result<Query, Error> {
        let present = |field: &Option<String>| field.as_deref().is_some_and(|v| !v.is_empty());

        if !present(&self.source)
            || !(present(&self.username) || present(&self.uid) || present(&self.email))
        {
            return Err(Error::invalid_argument(
                "You must provide a source and one of username/uid/email",
            ));
        }

        Ok([
            ("source", &self.source),
            ("username", &self.username),
            ("uid", &self.uid),
            ("email", &self.email),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().filter(|v| !v.is_empty()).map(|v| (key, v)))
        .collect())
    }
}

/// An identity to link to, or unlink from, a member.
///
/// `source` is required; the remaining fields identify the account on that
/// source.
///
/// ## Example
///
/// ```rust
/// use orbit_members::members::IdentityData;
///
/// let identity = IdentityData::new("github").username("octocat").uid("583231");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdentityData {
    /// Identity source (e.g. `github`, `discourse`).
    pub source: String,
    /// Host of the source, for self-hosted sources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_host: Option<String>,
    /// Username on the source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// User id on the source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// Email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Profile URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl IdentityData {
    /// Creates an identity for the given source.
    pub fn new(source: impl Into<String>) -> Self {
        Self { source: source.into(), ..Self::default() }
    }

    /// Sets the source host.
    #[must_use]
    pub fn source_host(mut self, source_host: impl Into<String>) -> Self {
        self.source_host = Some(source_host.into());
        self
    }

    /// Sets the username.
    #[must_use]
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Sets the source uid.
    #[must_use]
    pub fn uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = Some(uid.into());
        self
    }

    /// Sets the email.
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the profile URL.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the display name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub(crate) fn to_body(&self) -> Result<Value, Error> {
        if self.source.is_empty() {
            return Err(Error::invalid_argument("identity data must include a source"));
        }
        serde_json::to_value(self).map_err(|e| {
            Error::invalid_argument(format!("identity could not be serialized: {}", e))
                .with_source(e)
        })
    }
}

/// A member update, addressed either by id or by payload.
#[derive(Debug, Clone, PartialEq)]
pub enum MemberUpdate {
    /// Update the member with this id.
    ById {
        /// Member id.
        id: String,
        /// Fields to update.
        data: Value,
    },
    /// Create or update the member identified by the payload itself.
    ByPayload(Value),
}

/// The outcome of [`MembersClient::update`](super::MembersClient::update).
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    /// Confirmation message for an update by id, `"member {id} updated"`.
    Updated(String),
    /// Response body of an upsert by payload.
    Upserted(Value),
}
