//! Test repositories — mock `HistoryRepository` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use location_history_core::error::HistoryError;
use location_history_core::location::Location;
use location_history_core::repository::HistoryRepository;

/// A history repository that records every `append` call and returns a fixed
/// history from every `history` call. `delete` always succeeds.
#[derive(Debug)]
pub struct RecordingHistoryRepository {
    history: Vec<Location>,
    appended: Mutex<Vec<(String, Location)>>,
}

impl RecordingHistoryRepository {
    /// Create a recording repository that will return `history` from every
    /// `history` call.
    #[must_use]
    pub fn new(history: Vec<Location>) -> Self {
        Self {
            history,
            appended: Mutex::new(Vec::new()),
        }
    }

    /// Returns a snapshot of all locations that were appended.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn appended_locations(&self) -> Vec<(String, Location)> {
        self.appended.lock().unwrap().clone()
    }
}

#[async_trait]
impl HistoryRepository for RecordingHistoryRepository {
    async fn append(&self, order_id: &str, location: Location) -> Result<(), HistoryError> {
        self.appended
            .lock()
            .unwrap()
            .push((order_id.to_owned(), location));
        Ok(())
    }

    async fn history(&self, _order_id: &str, _max: i64) -> Result<Vec<Location>, HistoryError> {
        Ok(self.history.clone())
    }

    async fn delete(&self, _order_id: &str) -> Result<(), HistoryError> {
        Ok(())
    }
}

/// A history repository that answers `OrderNotFound` for every read and
/// delete, and accepts appends. Useful for testing the not-found paths.
#[derive(Debug)]
pub struct EmptyHistoryRepository;

#[async_trait]
impl HistoryRepository for EmptyHistoryRepository {
    async fn append(&self, _order_id: &str, _location: Location) -> Result<(), HistoryError> {
        Ok(())
    }

    async fn history(&self, order_id: &str, _max: i64) -> Result<Vec<Location>, HistoryError> {
        Err(HistoryError::OrderNotFound(order_id.to_owned()))
    }

    async fn delete(&self, order_id: &str) -> Result<(), HistoryError> {
        Err(HistoryError::OrderNotFound(order_id.to_owned()))
    }
}

/// A history repository that always returns a storage error. Useful for
/// testing error-handling paths.
#[derive(Debug)]
pub struct FailingHistoryRepository;

#[async_trait]
impl HistoryRepository for FailingHistoryRepository {
    async fn append(&self, _order_id: &str, _location: Location) -> Result<(), HistoryError> {
        Err(HistoryError::Storage("store unavailable".into()))
    }

    async fn history(&self, _order_id: &str, _max: i64) -> Result<Vec<Location>, HistoryError> {
        Err(HistoryError::Storage("store unavailable".into()))
    }

    async fn delete(&self, _order_id: &str) -> Result<(), HistoryError> {
        Err(HistoryError::Storage("store unavailable".into()))
    }
}
