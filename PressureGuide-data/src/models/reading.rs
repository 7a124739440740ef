use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Storage model for a blood pressure reading
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredReading {
    /// Unique identifier for the reading
    pub id: String,

    /// Systolic blood pressure (the higher number)
    pub systolic: i32,

    /// Diastolic blood pressure (the lower number)
    pub diastolic: i32,

    /// Optional pulse rate in beats per minute
    pub pulse: Option<i32>,

    /// When the reading was taken, epoch seconds
    pub timestamp: i64,

    /// Optional location (e.g., home, pharmacy)
    pub location: Option<String>,

    /// Optional posture (e.g., sitting, standing)
    pub posture: Option<String>,

    /// Optional notes about the reading
    pub notes: Option<String>,

    /// Optional body weight in kilograms
    pub weight_kg: Option<f64>,

    /// Lifestyle tags attached to the reading (e.g., caffeine, exercise)
    pub tags: Vec<String>,

    /// When the reading was stored
    pub created_at: DateTime<Utc>,
}

/// Input data for storing a new reading
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateReadingRequest {
    pub systolic: i32,
    pub diastolic: i32,
    pub pulse: Option<i32>,
    pub timestamp: i64,
    pub location: Option<String>,
    pub posture: Option<String>,
    pub notes: Option<String>,
    pub weight_kg: Option<f64>,
    pub tags: Vec<String>,
}

/// Readings and their tags taken under a single lock
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadingSnapshot {
    /// Readings ordered by timestamp, oldest first
    pub readings: Vec<StoredReading>,
}

impl ReadingSnapshot {
    /// Tag lists keyed by reading id; readings without tags are left out
    pub fn tags_by_reading_id(&self) -> HashMap<String, Vec<String>> {
        self.readings
            .iter()
            .filter(|reading| !reading.tags.is_empty())
            .map(|reading| (reading.id.clone(), reading.tags.clone()))
            .collect()
    }
}
