//! Error types for the Orbit members client.
//!
//! Every fallible operation returns [`Error`], categorized by [`ErrorKind`]:
//!
//! - [`ErrorKind::Configuration`]: a mandatory credential is missing when the
//!   client is built
//! - [`ErrorKind::InvalidArgument`]: an operation argument is missing or malformed;
//!   nothing is sent over the wire
//! - [`ErrorKind::Request`]: the HTTP round trip failed (network, non-success
//!   status, undecodable body, or a request that could not be built)
//!
//! ```rust,ignore
//! match client.members().get("abc").await {
//!     Ok(member) => println!("{member}"),
//!     Err(err) if err.kind() == ErrorKind::Request => {
//!         eprintln!("request failed ({:?}): {}", err.status(), err.message());
//!     }
//!     Err(err) => return Err(err),
//! }
//! ```

mod core;
mod kind;

pub use core::Error;
pub use kind::ErrorKind;

/// A specialized `Result` type for Orbit members operations.
pub type Result<T> = std::result::Result<T, Error>;
