//! `HashMap`-backed history repository guarded by a readers-writer lock.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use location_history_core::error::HistoryError;
use location_history_core::location::Location;
use location_history_core::repository::HistoryRepository;

/// In-memory history repository.
///
/// All access goes through a single `RwLock`: reads take the shared lock,
/// appends and deletes take the exclusive lock. This serializes concurrent
/// request tasks mutating the same map.
#[derive(Debug, Default)]
pub struct InMemoryHistoryRepository {
    orders: RwLock<HashMap<String, Vec<Location>>>,
}

impl InMemoryHistoryRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HistoryRepository for InMemoryHistoryRepository {
    async fn append(&self, order_id: &str, location: Location) -> Result<(), HistoryError> {
        let mut orders = self.orders.write().await;
        orders.entry(order_id.to_owned()).or_default().push(location);
        Ok(())
    }

    async fn history(&self, order_id: &str, max: i64) -> Result<Vec<Location>, HistoryError> {
        let orders = self.orders.read().await;
        let Some(history) = orders.get(order_id) else {
            return Err(HistoryError::OrderNotFound(order_id.to_owned()));
        };

        if max == 0 {
            return Ok(Vec::new());
        }

        if max < 0 {
            // Unbounded reads are chronological.
            return Ok(history.clone());
        }

        // Capped reads are reverse-chronological: last-inserted first.
        let take = usize::try_from(max).unwrap_or(usize::MAX).min(history.len());
        Ok(history.iter().rev().take(take).cloned().collect())
    }

    async fn delete(&self, order_id: &str) -> Result<(), HistoryError> {
        let mut orders = self.orders.write().await;
        if orders.remove(order_id).is_none() {
            return Err(HistoryError::OrderNotFound(order_id.to_owned()));
        }
        Ok(())
    }
}
