//! History repository abstraction.

use async_trait::async_trait;

use crate::error::HistoryError;
use crate::location::Location;

/// Sentinel limit meaning "return the entire history".
///
/// Any negative limit is treated as unbounded; this constant is the
/// canonical spelling used when no cap was requested.
pub const UNBOUNDED: i64 = -1;

/// Repository trait for recording and reading per-order location history.
///
/// The order identifier is opaque, caller-supplied text; implementations
/// must not interpret it beyond using it as a key.
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Append a location to the end of the order's history, creating the
    /// history if this is the first report for the order.
    async fn append(&self, order_id: &str, location: Location) -> Result<(), HistoryError>;

    /// Read the order's history, shaped by `max`:
    ///
    /// - `max < 0`: the full history, oldest first.
    /// - `max == 0`: an empty list.
    /// - `max > 0`: the `min(max, len)` most recent records, newest first.
    ///
    /// The ordering asymmetry between unbounded and capped reads is a
    /// deliberate, observable contract of the service.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::OrderNotFound` if no history exists for the
    /// order (never recorded, or deleted since).
    async fn history(&self, order_id: &str, max: i64) -> Result<Vec<Location>, HistoryError>;

    /// Delete the order's entire history.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::OrderNotFound` if no history exists for the
    /// order.
    async fn delete(&self, order_id: &str) -> Result<(), HistoryError>;
}
