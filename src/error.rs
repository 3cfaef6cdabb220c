//! Rate lookup error types.

use thiserror::Error;

/// Errors that can occur during a rate lookup.
///
/// Only rate sources raise these; the caching layer introduces no failure
/// kind of its own.
#[derive(Debug, Error)]
pub enum RateError {
    /// The underlying rate source failed with an I/O problem.
    #[error("rate source I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for rate operations.
pub type RateResult<T> = Result<T, RateError>;
