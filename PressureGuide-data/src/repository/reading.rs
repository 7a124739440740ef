use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::models::reading::{CreateReadingRequest, ReadingSnapshot, StoredReading};
use super::errors::RepositoryError;
use super::in_memory::InMemoryStorage;

/// Inclusive time window, epoch seconds; open on a side left as `None`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadingFilter {
    pub start: Option<i64>,
    pub end: Option<i64>,
}

impl ReadingFilter {
    pub fn between(start: Option<i64>, end: Option<i64>) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, timestamp: i64) -> bool {
        self.start.map_or(true, |start| timestamp >= start) && self.end.map_or(true, |end| timestamp <= end)
    }
}

/// Repository trait for blood pressure readings
#[async_trait]
pub trait ReadingRepositoryTrait {
    /// Store a new reading from a request
    async fn create(&self, request: CreateReadingRequest) -> Result<StoredReading, RepositoryError>;

    /// Get a reading by ID
    async fn get_by_id(&self, id: &str) -> Result<Option<StoredReading>, RepositoryError>;

    /// Consistent snapshot of readings (with tags) inside the filter window
    async fn snapshot(&self, filter: ReadingFilter) -> Result<ReadingSnapshot, RepositoryError>;

    /// Whether the backing store can currently serve requests
    async fn is_available(&self) -> bool;
}

/// Repository for readings backed by in-memory storage
#[derive(Debug, Clone, Default)]
pub struct ReadingRepository {
    storage: InMemoryStorage,
}

impl ReadingRepository {
    /// Create a new repository
    pub fn new() -> Self {
        Self {
            storage: InMemoryStorage::new(),
        }
    }
}

/// Trim tags, drop empty ones and keep the first occurrence of each
fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if !tag.is_empty() && !normalized.iter().any(|existing| existing == tag) {
            normalized.push(tag.to_string());
        }
    }
    normalized
}

#[async_trait]
impl ReadingRepositoryTrait for ReadingRepository {
    async fn create(&self, request: CreateReadingRequest) -> Result<StoredReading, RepositoryError> {
        let reading = StoredReading {
            id: Uuid::new_v4().to_string(),
            systolic: request.systolic,
            diastolic: request.diastolic,
            pulse: request.pulse,
            timestamp: request.timestamp,
            location: request.location,
            posture: request.posture,
            notes: request.notes,
            weight_kg: request.weight_kg,
            tags: normalize_tags(request.tags),
            created_at: Utc::now(),
        };

        debug!("Storing reading {} in memory", reading.id);
        self.storage.store_reading(&reading).await
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<StoredReading>, RepositoryError> {
        self.storage.get_by_id(id).await
    }

    async fn snapshot(&self, filter: ReadingFilter) -> Result<ReadingSnapshot, RepositoryError> {
        let snapshot = self.storage.get_filtered(&filter).await?;
        debug!(readings = snapshot.readings.len(), "Took reading snapshot");
        Ok(snapshot)
    }

    async fn is_available(&self) -> bool {
        self.storage.count().await.is_ok()
    }
}

/// Mock repository used by tests in this and dependent crates
#[cfg(any(test, feature = "mock"))]
pub mod tests {
    use super::*;

    /// Repository serving a fixed set of readings, optionally failing every call
    #[derive(Debug, Clone, Default)]
    pub struct MockReadingRepository {
        readings: Vec<StoredReading>,
        should_fail: bool,
    }

    impl MockReadingRepository {
        /// Create a new empty mock repository
        pub fn new() -> Self {
            Self::default()
        }

        /// Create a mock repository with predefined readings
        pub fn with_readings(readings: Vec<StoredReading>) -> Self {
            Self { readings, should_fail: false }
        }

        /// Make every call fail as if the backing store were down
        pub fn with_failure(mut self) -> Self {
            self.should_fail = true;
            self
        }

        fn check(&self) -> Result<(), RepositoryError> {
            if self.should_fail {
                return Err(RepositoryError::Unavailable("mock storage is down".to_string()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl ReadingRepositoryTrait for MockReadingRepository {
        async fn create(&self, request: CreateReadingRequest) -> Result<StoredReading, RepositoryError> {
            self.check()?;
            Ok(StoredReading {
                id: Uuid::new_v4().to_string(),
                systolic: request.systolic,
                diastolic: request.diastolic,
                pulse: request.pulse,
                timestamp: request.timestamp,
                location: request.location,
                posture: request.posture,
                notes: request.notes,
                weight_kg: request.weight_kg,
                tags: normalize_tags(request.tags),
                created_at: Utc::now(),
            })
        }

        async fn get_by_id(&self, id: &str) -> Result<Option<StoredReading>, RepositoryError> {
            self.check()?;
            Ok(self.readings.iter().find(|r| r.id == id).cloned())
        }

        async fn snapshot(&self, filter: ReadingFilter) -> Result<ReadingSnapshot, RepositoryError> {
            self.check()?;
            let mut readings: Vec<StoredReading> = self
                .readings
                .iter()
                .filter(|r| filter.contains(r.timestamp))
                .cloned()
                .collect();
            readings.sort_by_key(|r| r.timestamp);
            Ok(ReadingSnapshot { readings })
        }

        async fn is_available(&self) -> bool {
            !self.should_fail
        }
    }
}
