//! Default User-Agent string for requests.
//!
//! Callers may override it per client; when they don't, requests identify
//! the library, its version, and the host platform.

use std::sync::OnceLock;

/// Library identifier used in the User-Agent string.
pub const SDK_NAME: &str = "orbit-members-rust";

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Cached User-Agent string (computed once on first access).
static USER_AGENT: OnceLock<String> = OnceLock::new();

/// Returns the default User-Agent string.
///
/// Format: `orbit-members-rust/0.1.0 (rust/1.92; darwin/aarch64)`
pub fn user_agent() -> &'static str {
    USER_AGENT.get_or_init(|| {
        format!(
            "{}/{} ({}; {}/{})",
            SDK_NAME,
            SDK_VERSION,
            rust_version(),
            os_name(),
            std::env::consts::ARCH,
        )
    })
}

fn rust_version() -> &'static str {
    concat!("rust/", env!("CARGO_PKG_RUST_VERSION"))
}

fn os_name() -> &'static str {
    match std::env::consts::OS {
        "macos" => "darwin",
        os => os,
    }
}
