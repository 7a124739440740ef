use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::models::reading::{ReadingSnapshot, StoredReading};
use super::errors::RepositoryError;
use super::reading::ReadingFilter;

/// In-memory storage for readings; clones share the same store
#[derive(Debug, Clone)]
pub struct InMemoryStorage {
    readings: Arc<Mutex<HashMap<String, StoredReading>>>,
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStorage {
    /// Create a new in-memory storage
    pub fn new() -> Self {
        Self {
            readings: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Store a reading in memory
    pub async fn store_reading(&self, reading: &StoredReading) -> Result<StoredReading, RepositoryError> {
        let mut store = self.readings.lock()?;
        store.insert(reading.id.clone(), reading.clone());
        Ok(reading.clone())
    }

    /// Get a reading by ID from memory
    pub async fn get_by_id(&self, id: &str) -> Result<Option<StoredReading>, RepositoryError> {
        let store = self.readings.lock()?;
        Ok(store.get(id).cloned())
    }

    /// Readings inside the filter window, oldest first
    pub async fn get_filtered(&self, filter: &ReadingFilter) -> Result<ReadingSnapshot, RepositoryError> {
        let store = self.readings.lock()?;

        let mut readings: Vec<StoredReading> = store
            .values()
            .filter(|reading| filter.contains(reading.timestamp))
            .cloned()
            .collect();

        // Ties on timestamp are ordered by id so snapshots are reproducible
        readings.sort_by(|a, b| a.timestamp.cmp(&b.timestamp).then_with(|| a.id.cmp(&b.id)));

        Ok(ReadingSnapshot { readings })
    }

    /// Number of stored readings
    pub async fn count(&self) -> Result<usize, RepositoryError> {
        let store = self.readings.lock()?;
        Ok(store.len())
    }
}
