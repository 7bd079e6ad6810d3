//! Crate-wide error type.

use thiserror::Error;

/// Errors produced by the utilities in this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// An argument outside the accepted domain. Displays the carried message as-is.
    #[error("{0}")]
    InvalidArgument(String),

    /// A day ordinal outside `0..7`.
    #[error("invalid day ordinal: {0} (expected 0..7)")]
    InvalidDay(u8),
}

pub type Result<T> = std::result::Result<T, Error>;
