//! Structured error types for bmsview-core.
//!
//! Library crates get `thiserror` enums; the `bmsview` binary wraps them in
//! `anyhow` for context.

use thiserror::Error;

/// Failure while producing a [`crate::ResultSet`] from the database.
///
/// Messages carry the driver's own text so they can be surfaced verbatim to
/// HTTP clients.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataAccessError {
    /// Connection could not be established (network, auth, config)
    #[error("{message}")]
    Connect { message: String },

    /// Query execution failed (e.g. missing table)
    #[error("{message}")]
    Query { message: String },

    /// A step exceeded its configured time limit
    #[error("{stage} timed out after {seconds} seconds")]
    Timeout { stage: &'static str, seconds: u64 },

    /// A column value could not be decoded
    #[error("failed to decode column '{column}': {message}")]
    Decode { column: String, message: String },

    /// Driver returned a row that does not match the column list
    #[error(transparent)]
    Shape(#[from] ShapeError),
}

impl DataAccessError {
    pub fn connect(err: impl std::fmt::Display) -> Self {
        Self::Connect {
            message: err.to_string(),
        }
    }

    pub fn query(err: impl std::fmt::Display) -> Self {
        Self::Query {
            message: err.to_string(),
        }
    }
}

/// Row arity differs from the result set's column count
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("row {row} has {found} values, expected {expected}")]
pub struct ShapeError {
    pub row: usize,
    pub expected: usize,
    pub found: usize,
}
