//! Integration tests for the Orbit members client.
//!
//! Each test starts a local mock API server with wiremock and drives the
//! public client against it, so no Orbit account or network access is needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test integration
//!
//! # With request logging
//! RUST_LOG=orbit_members=debug cargo test --test integration -- --nocapture
//! ```

mod client_tests;
mod common;
mod members_tests;
