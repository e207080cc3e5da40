//! Domain error types.

use thiserror::Error;

/// Top-level domain error type for history operations.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// No history exists for the given order: it was never recorded, or it
    /// has been deleted.
    #[error("no history recorded for order {0}")]
    OrderNotFound(String),

    /// The backing store failed to carry out the operation.
    #[error("history store error: {0}")]
    Storage(String),
}
