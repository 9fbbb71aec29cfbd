//! Member operations.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use super::{FindMemberQuery, IdentityData, ListMembersRequest, MemberUpdate, UpdateOutcome};
use crate::{Error, client::Client, types::Query};

/// Client for member operations in the workspace.
///
/// Access via [`Client::members`].
///
/// Payloads are passed through to the API as JSON; any `Serialize` value that
/// serializes to a JSON object is accepted (a `serde_json::json!` literal, a
/// map, or your own struct).
///
/// ## Example
///
/// ```rust,ignore
/// use serde_json::json;
///
/// let members = client.members();
///
/// // Create or update a member by identity
/// members.create(&json!({
///     "member": {"name": "Ada"},
///     "identity": {"source": "github", "username": "ada"}
/// })).await?;
///
/// // Update by id
/// members.update_by_id("abc123", &json!({"member": {"bio": "Analyst"}})).await?;
///
/// // Look up by identity
/// let found = members.find(&FindMemberQuery::new("github").username("ada")).await?;
/// ```
#[derive(Clone)]
pub struct MembersClient {
    client: Client,
}

impl MembersClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Creates a member, or updates the member matching the payload's identity.
    ///
    /// Returns the response body.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument) with
    /// `"You must provide data"` when `data` serializes to `null`, or
    /// `"data must be an object"` when it is not a JSON object.
    pub async fn create<T>(&self, data: &T) -> Result<Value, Error>
    where
        T: Serialize + ?Sized,
    {
        let body = require_object(data, "You must provide data")?;
        self.send(Method::POST, "/members".to_string(), &Query::new(), Some(&body)).await
    }

    /// Upserts a member from a payload alone. Identical to [`create`](Self::create).
    pub async fn upsert<T>(&self, data: &T) -> Result<Value, Error>
    where
        T: Serialize + ?Sized,
    {
        self.create(data).await
    }

    /// Updates the member with the given id.
    ///
    /// Returns `"member {id} updated"`.
    pub async fn update_by_id<T>(&self, member_id: &str, data: &T) -> Result<String, Error>
    where
        T: Serialize + ?Sized,
    {
        if member_id.is_empty() {
            return Err(Error::invalid_argument(
                "You must provide a memberId as the first parameter",
            ));
        }
        let body = require_object(data, "You must provide a data object as the second parameter")?;

        self.send(Method::PUT, member_path(member_id, ""), &Query::new(), Some(&body)).await?;
        Ok(format!("member {} updated", member_id))
    }

    /// Applies a [`MemberUpdate`]: by id, or as an upsert by payload.
    pub async fn update(&self, update: MemberUpdate) -> Result<UpdateOutcome, Error> {
        match update {
            MemberUpdate::ById { id, data } => {
                self.update_by_id(&id, &data).await.map(UpdateOutcome::Updated)
            },
            MemberUpdate::ByPayload(data) => self.upsert(&data).await.map(UpdateOutcome::Upserted),
        }
    }

    /// Lists members. Await the returned request, optionally after setting
    /// paging parameters.
    pub fn list(&self) -> ListMembersRequest {
        ListMembersRequest::new(self.client.clone())
    }

    /// Gets a member by id. Returns the response body.
    pub async fn get(&self, member_id: &str) -> Result<Value, Error> {
        require_member_id(member_id)?;
        self.send(Method::GET, member_path(member_id, ""), &Query::new(), None).await
    }

    /// Finds a member by identity. Returns the response body.
    pub async fn find(&self, query: &FindMemberQuery) -> Result<Value, Error> {
        let query = query.to_query()?;
        self.send(Method::GET, "/members/find".to_string(), &query, None).await
    }

    /// Links an identity to a member. Returns the response body.
    pub async fn add_identity(&self, member_id: &str, identity: &IdentityData) -> Result<Value, Error> {
        require_member_id(member_id)?;
        let body = identity.to_body()?;
        self.send(Method::POST, member_path(member_id, "/identities"), &Query::new(), Some(&body))
            .await
    }

    /// Unlinks an identity from a member.
    ///
    /// Returns `"identity on member {id} removed"`.
    pub async fn remove_identity(
        &self,
        member_id: &str,
        identity: &IdentityData,
    ) -> Result<String, Error> {
        require_member_id(member_id)?;
        let body = identity.to_body()?;
        self.send(Method::DELETE, member_path(member_id, "/identities"), &Query::new(), Some(&body))
            .await?;
        Ok(format!("identity on member {} removed", member_id))
    }

    /// Deletes a member.
    ///
    /// Returns `"member {id} deleted"`.
    pub async fn delete(&self, member_id: &str) -> Result<String, Error> {
        require_member_id(member_id)?;
        self.send(Method::DELETE, member_path(member_id, ""), &Query::new(), None).await?;
        Ok(format!("member {} deleted", member_id))
    }

    async fn send(
        &self,
        method: Method,
        path: String,
        query: &Query,
        body: Option<&Value>,
    ) -> Result<Value, Error> {
        self.client.inner().execute(method, &path, query, body).await
    }
}

impl std::fmt::Debug for MembersClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MembersClient")
            .field("workspace_id", &self.client.credentials().workspace_id())
            .finish_non_exhaustive()
    }
}

fn member_path(member_id: &str, suffix: &str) -> String {
    format!("/members/{}{}", urlencoding::encode(member_id), suffix)
}

fn require_member_id(member_id: &str) -> Result<(), Error> {
    if member_id.is_empty() {
        return Err(Error::invalid_argument("You must provide a memberId"));
    }
    Ok(())
}

/// Serializes a payload and checks that it is a JSON object.
fn require_object<T>(data: &T, missing: &'static str) -> Result<Value, Error>
where
    T: Serialize + ?Sized,
{
    let value = serde_json::to_value(data).map_err(|e| {
        Error::invalid_argument(format!("data could not be serialized: {}", e)).with_source(e)
    })?;

    match value {
        Value::Null => Err(Error::invalid_argument(missing)),
        Value::Object(_) => Ok(value),
        _ => Err(Error::invalid_argument("data must be an object")),
    }
}
