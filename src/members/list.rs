//! Paginated member listing.

use std::future::{Future, IntoFuture};
use std::pin::Pin;

use reqwest::Method;

use super::ListResult;
use crate::{
    Error,
    client::Client,
    types::{Query, QueryValue},
};

/// Sort direction for list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Ascending order.
    Ascending,
    /// Descending order.
    #[default]
    Descending,
}

impl SortDirection {
    /// Returns the string representation for API queries.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        }
    }
}

/// Request to list members, one page at a time.
///
/// Await it directly, optionally after setting parameters. With nothing set,
/// the API's default page is returned.
///
/// ## Example
///
/// ```rust,ignore
/// let mut page = client.members().list().items(100).await?;
/// while let Some(next) = page.next_page {
///     page = client.members().list().items(100).page(next).await?;
/// }
/// ```
#[must_use = "list requests do nothing unless awaited"]
pub struct ListMembersRequest {
    client: Client,
    query: Query,
}

impl ListMembersRequest {
    pub(crate) fn new(client: Client) -> Self {
        Self { client, query: Query::new() }
    }

    /// Sets the page number to fetch.
    pub fn page(self, page: u32) -> Self {
        self.param("page", page)
    }

    /// Sets the page size.
    pub fn items(self, items: u32) -> Self {
        self.param("items", items)
    }

    /// Sets the sort field (e.g. `love`, `last_activity_occurred_at`).
    pub fn sort(self, field: impl Into<String>) -> Self {
        self.param("sort", field.into())
    }

    /// Sets the sort direction.
    pub fn direction(self, direction: SortDirection) -> Self {
        self.param("direction", direction.as_str())
    }

    /// Sets an arbitrary query parameter, such as a filter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.query.insert(key, value);
        self
    }

    /// Merges a prepared query; its parameters replace any already set.
    pub fn query(mut self, query: Query) -> Self {
        for (key, value) in query.iter() {
            self.query.insert(key, value.clone());
        }
        self
    }

    async fn execute(self) -> Result<ListResult, Error> {
        let body = self.client.inner().execute(Method::GET, "/members", &self.query, None).await?;
        ListResult::from_response(body)
    }
}

impl IntoFuture for ListMembersRequest {
    type Output = Result<ListResult, Error>;
    type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.execute())
    }
}

impl std::fmt::Debug for ListMembersRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListMembersRequest").field("query", &self.query).finish_non_exhaustive()
    }
}
