//! Shared test doubles for the location history service.

mod repository;

pub use repository::{EmptyHistoryRepository, FailingHistoryRepository, RecordingHistoryRepository};
