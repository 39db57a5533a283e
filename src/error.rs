//! Error types for table configuration and display helpers.
//!
//! The render pipeline itself cannot fail; errors only come from validating
//! declarations at the boundary and from the fallible helper variants.

use thiserror::Error;

/// Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building or configuring a table.
#[derive(Debug, Error)]
pub enum Error {
    /// Page size of zero.
    #[error("page size must be at least 1")]
    InvalidPageSize,

    /// Two columns share the same key.
    #[error("duplicate column key: {0}")]
    DuplicateColumn(String),

    /// A search or filter key names no column.
    #[error("unknown column key: {0}")]
    UnknownColumn(String),

    /// Two filters target the same key.
    #[error("duplicate filter key: {0}")]
    DuplicateFilter(String),

    /// Input that no supported date format accepts.
    #[error("invalid date: {0:?}")]
    InvalidDate(String),

    /// Malformed configuration document.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Config(e.to_string())
    }
}
