//! Common test harness for Orbit members integration tests.
//!
//! Provides a mock API server and a client pointed at it.

use std::sync::OnceLock;

use anyhow::{Context, Result};
use orbit_members::Client;
use wiremock::MockServer;

/// Workspace id used by every fixture.
pub const WORKSPACE_ID: &str = "test-workspace";

/// API key used by every fixture.
pub const API_KEY: &str = "obu_test_key";

static TRACING: OnceLock<()> = OnceLock::new();

/// Installs a tracing subscriber once per test binary, honoring `RUST_LOG`.
pub fn init_tracing() {
    TRACING.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A mock Orbit API and a client configured against it.
pub struct TestFixture {
    pub server: MockServer,
    pub client: Client,
}

impl TestFixture {
    /// Starts a mock server and builds a client for [`WORKSPACE_ID`].
    pub async fn create() -> Result<Self> {
        init_tracing();

        let server = MockServer::start().await;
        let client = Client::builder()
            .workspace_id(WORKSPACE_ID)
            .api_key(API_KEY)
            .base_url(format!("{}/api/v1", server.uri()))
            .insecure()
            .build()
            .context("Failed to build client for mock server")?;

        Ok(Self { server, client })
    }

    /// Absolute path of a workspace-relative endpoint on the mock server.
    pub fn path(&self, endpoint: &str) -> String {
        format!("/api/v1/{}{}", WORKSPACE_ID, endpoint)
    }

    /// Absolute URL of a workspace-relative endpoint on the mock server.
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.server.uri(), self.path(endpoint))
    }
}
