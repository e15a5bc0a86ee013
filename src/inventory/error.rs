//! Error types for the inventory module.

use thiserror::Error;

/// Errors produced while decoding persisted text.
///
/// Always recoverable: the flat-file loader reacts to any of these by
/// skipping the offending line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed date {0:?}, expected DD/MM/YYYY")]
    Date(String),

    #[error("expected 9 fields, found {0}")]
    FieldCount(usize),

    #[error("field {field} is not an integer: {value:?}")]
    Integer { field: &'static str, value: String },

    #[error("field {field} is not a number: {value:?}")]
    Number { field: &'static str, value: String },
}

/// Errors that can occur during store and backend operations.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("no record with id {0}")]
    NotFound(u32),

    #[error("invalid input: {0}")]
    Validation(String),
}

/// A [`Result`] type alias using [`StoreError`].
pub type Result<T> = std::result::Result<T, StoreError>;
