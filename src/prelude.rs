//! Prelude module for convenient imports.
//!
//! ```rust
//! use orbit_members::prelude::*;
//! ```
//!
//! This provides access to:
//! - Client types
//! - Error types
//! - Member request and response types

pub use crate::{
    auth::{CredentialResolver, Credentials},
    client::{Client, ClientBuilder},
    config::HttpConfig,
    error::{Error, ErrorKind, Result},
    members::{
        FindMemberQuery, IdentityData, ListMembersRequest, ListResult, MemberUpdate,
        MembersClient, SortDirection, UpdateOutcome,
    },
    types::{Query, QueryValue},
};
