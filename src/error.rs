//! Error types for divtrie

use std::collections::TryReserveError;
use thiserror::Error;

/// Result type alias for divtrie operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in divtrie operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Divisor failed to split key {key:?}")]
    DivisorFailed { key: String },

    #[error("Allocation failed: {0}")]
    Alloc(#[from] TryReserveError),
}
