//! Testing utilities for code that uses the Orbit members client.
//!
//! - [`MockTransport`]: an in-memory [`Transport`](crate::transport::Transport)
//!   that records requests and replays queued responses
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use orbit_members::{Client, testing::MockTransport};
//!
//! # async fn example() -> orbit_members::Result<()> {
//! let mock = MockTransport::new().respond_with(serde_json::json!({"data": {"id": "m1"}}));
//!
//! let client = Client::builder()
//!     .workspace_id("ws")
//!     .api_key("key")
//!     .build_with_transport(Arc::new(mock.clone()))?;
//!
//! client.members().get("m1").await?;
//! assert_eq!(mock.request_count(), 1);
//! # Ok(())
//! # }
//! ```

mod mock_transport;

pub use mock_transport::MockTransport;
