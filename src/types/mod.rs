//! Core data types shared by the request primitive and member operations.
//!
//! - [`Query`]: URL query parameters for a request
//! - [`next_page_from_url`]: extracts the page cursor from a `links.next` URL

mod pagination;
mod query;

pub use pagination::{PageCursor, next_page_from_url};
pub use query::{Query, QueryValue};
