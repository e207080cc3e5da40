//! In-memory implementation of the `HistoryRepository` trait.
//!
//! Process-lifetime storage only; history does not survive a restart.

mod memory;

pub use memory::InMemoryHistoryRepository;
