//! Construction errors.
//!
//! Domain failures are never reported through this type, they travel inside
//! `Outcome` as values. `Error` only covers misuse at the point an outcome or
//! a dispatcher is built.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A required argument was absent.
    #[error("invalid argument: `{name}` must be present")]
    InvalidArgument { name: &'static str },
}

/// Result type alias using verdict's `Error`.
pub type Result<T> = std::result::Result<T, Error>;
