//! Member operations for an Orbit workspace.
//!
//! Everything here is reached through [`Client::members`](crate::Client::members):
//!
//! | Operation | Method | Path |
//! |-----------|--------|------|
//! | [`create`](MembersClient::create) / [`upsert`](MembersClient::upsert) | `POST` | `/members` |
//! | [`update_by_id`](MembersClient::update_by_id) | `PUT` | `/members/{id}` |
//! | [`list`](MembersClient::list) | `GET` | `/members` |
//! | [`get`](MembersClient::get) | `GET` | `/members/{id}` |
//! | [`find`](MembersClient::find) | `GET` | `/members/find` |
//! | [`add_identity`](MembersClient::add_identity) | `POST` | `/members/{id}/identities` |
//! | [`remove_identity`](MembersClient::remove_identity) | `DELETE` | `/members/{id}/identities` |
//! | [`delete`](MembersClient::delete) | `DELETE` | `/members/{id}` |
//!
//! Paths are relative to `{base_url}{workspace_id}`.

mod client;
mod list;
mod types;

pub use client::MembersClient;
pub use list::{ListMembersRequest, SortDirection};
pub use types::{FindMemberQuery, IdentityData, ListResult, MemberUpdate, UpdateOutcome};
