use serde::{Deserialize, Serialize};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use crate::services::validation::{validate_reading, ValidationResult};

/// Request to record a new reading.
///
/// Pressure values are optional here so that a missing value can be reported
/// as a validation issue instead of a decoding failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct RecordReadingRequest {
    /// Systolic blood pressure (the higher number)
    pub systolic: Option<i32>,

    /// Diastolic blood pressure (the lower number)
    pub diastolic: Option<i32>,

    /// Optional pulse rate in beats per minute
    pub pulse: Option<i32>,

    /// Moment of measurement, epoch seconds
    pub timestamp: i64,

    #[serde(default)]
    pub location: Option<String>,

    #[serde(default)]
    pub posture: Option<String>,

    #[serde(default)]
    pub notes: Option<String>,

    #[serde(default)]
    pub weight_kg: Option<f64>,

    /// Lifestyle tags (e.g., caffeine, exercise, stress)
    #[serde(default)]
    pub tags: Vec<String>,
}

impl RecordReadingRequest {
    pub fn validate(&self) -> ValidationResult {
        validate_reading(self.systolic, self.diastolic, self.pulse)
    }
}
