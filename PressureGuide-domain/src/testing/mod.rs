// Testing utilities for the domain layer
// This module is only available when the "mock" feature is enabled

// Re-export the mock repository from the data layer
#[cfg(feature = "with-data")]
pub use pressure_guide_data::repository::tests::MockReadingRepository;

#[cfg(feature = "with-data")]
use pressure_guide_data::models::StoredReading;

use crate::entities::blood_pressure::BloodPressureReading;

/// One hour in seconds
pub const HOUR: i64 = 3_600;

/// 2024-03-04T00:00:00Z, a fixed local midnight for UTC fixtures
pub const MIDNIGHT_UTC: i64 = 1_709_510_400;

/// Builder for reading sets used across domain and API tests.
///
/// Ids are assigned in insertion order (`r0`, `r1`, ...).
#[derive(Debug, Clone, Default)]
pub struct ReadingFixture {
    readings: Vec<(BloodPressureReading, Vec<String>)>,
}

impl ReadingFixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an untagged reading
    pub fn reading(self, systolic: i32, diastolic: i32, timestamp: i64) -> Self {
        self.tagged(systolic, diastolic, timestamp, &[])
    }

    /// Add a reading at `hour` hours after [`MIDNIGHT_UTC`]; negative hours fall on the previous day
    pub fn at_hour(self, hour: i64, systolic: i32, diastolic: i32) -> Self {
        self.reading(systolic, diastolic, MIDNIGHT_UTC + hour * HOUR)
    }

    /// Add a reading carrying lifestyle tags
    pub fn tagged(mut self, systolic: i32, diastolic: i32, timestamp: i64, tags: &[&str]) -> Self {
        let id = format!("r{}", self.readings.len());
        let reading = BloodPressureReading::new(id, systolic, diastolic, timestamp);
        self.readings.push((reading, tags.iter().map(|t| t.to_string()).collect()));
        self
    }

    /// Add `count` identical readings spaced one hour apart
    pub fn repeated(mut self, count: usize, systolic: i32, diastolic: i32, start: i64, tags: &[&str]) -> Self {
        for i in 0..count {
            self = self.tagged(systolic, diastolic, start + i as i64 * HOUR, tags);
        }
        self
    }

    /// Domain readings in insertion order
    pub fn readings(&self) -> Vec<BloodPressureReading> {
        self.readings.iter().map(|(reading, _)| reading.clone()).collect()
    }

    /// Tag map keyed by reading id, tagged readings only
    pub fn tags_by_reading_id(&self) -> std::collections::HashMap<String, Vec<String>> {
        self.readings
            .iter()
            .filter(|(_, tags)| !tags.is_empty())
            .map(|(reading, tags)| (reading.id.clone(), tags.clone()))
            .collect()
    }

    /// Storage models for seeding a repository
    #[cfg(feature = "with-data")]
    pub fn stored(&self) -> Vec<StoredReading> {
        self.readings
            .iter()
            .map(|(reading, tags)| StoredReading {
                id: reading.id.clone(),
                systolic: reading.systolic,
                diastolic: reading.diastolic,
                pulse: reading.pulse,
                timestamp: reading.timestamp,
                location: reading.location.clone(),
                posture: reading.posture.clone(),
                notes: reading.notes.clone(),
                weight_kg: reading.weight_kg,
                tags: tags.clone(),
                created_at: chrono::Utc::now(),
            })
            .collect()
    }

    /// Mock repository seeded with this fixture
    #[cfg(feature = "with-data")]
    pub fn repository(&self) -> MockReadingRepository {
        MockReadingRepository::with_readings(self.stored())
    }
}
