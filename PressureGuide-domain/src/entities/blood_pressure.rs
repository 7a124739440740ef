use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

/// Domain model for a blood pressure reading
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct BloodPressureReading {
    /// Unique identifier for the reading
    pub id: String,

    /// Systolic blood pressure in mmHg (the higher number)
    pub systolic: i32,

    /// Diastolic blood pressure in mmHg (the lower number)
    pub diastolic: i32,

    /// Optional pulse rate in beats per minute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pulse: Option<i32>,

    /// Moment of measurement, epoch seconds
    pub timestamp: i64,

    /// Where the reading was taken (e.g., home, clinic)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Body posture during measurement (e.g., sitting, standing)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posture: Option<String>,

    /// Optional free-text notes about the reading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Optional body weight in kilograms recorded alongside the reading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
}

impl BloodPressureReading {
    /// Create a reading without contextual metadata
    pub fn new(id: impl Into<String>, systolic: i32, diastolic: i32, timestamp: i64) -> Self {
        Self {
            id: id.into(),
            systolic,
            diastolic,
            pulse: None,
            timestamp,
            location: None,
            posture: None,
            notes: None,
            weight_kg: None,
        }
    }

    /// Attach a pulse value
    pub fn with_pulse(mut self, pulse: i32) -> Self {
        self.pulse = Some(pulse);
        self
    }
}

/// Blood pressure category of a single reading.
///
/// Variants are declared in severity order; `Ord` follows that order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum BloodPressureCategory {
    /// Below every guideline threshold
    #[serde(rename = "normal")]
    Normal,

    /// Above normal but below stage 1 (high-normal for ESC/ESH, JSH and WHO)
    #[serde(rename = "elevated")]
    Elevated,

    /// Stage 1 hypertension (grade 1 for ESC/ESH, JSH and WHO)
    #[serde(rename = "stage_1")]
    Stage1,

    /// Stage 2 hypertension (grade 2)
    #[serde(rename = "stage_2")]
    Stage2,

    /// Hypertensive crisis (grade 3)
    #[serde(rename = "crisis")]
    Crisis,
}

impl BloodPressureCategory {
    /// Every category in severity order
    pub fn all() -> [BloodPressureCategory; 5] {
        [
            BloodPressureCategory::Normal,
            BloodPressureCategory::Elevated,
            BloodPressureCategory::Stage1,
            BloodPressureCategory::Stage2,
            BloodPressureCategory::Crisis,
        ]
    }

    /// Stable symbolic identifier used by presentation collaborators
    pub fn token(&self) -> &'static str {
        match self {
            BloodPressureCategory::Normal => "normal",
            BloodPressureCategory::Elevated => "elevated",
            BloodPressureCategory::Stage1 => "stage_1",
            BloodPressureCategory::Stage2 => "stage_2",
            BloodPressureCategory::Crisis => "crisis",
        }
    }

    /// Stage 2 and crisis readings need the user's attention
    pub fn is_high_alert(&self) -> bool {
        matches!(self, BloodPressureCategory::Stage2 | BloodPressureCategory::Crisis)
    }
}

impl fmt::Display for BloodPressureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Interpretation band for pulse pressure and mean arterial pressure
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum Band {
    Low,
    Normal,
    High,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_order_follows_severity() {
        let mut categories = vec![
            BloodPressureCategory::Crisis,
            BloodPressureCategory::Normal,
            BloodPressureCategory::Stage2,
            BloodPressureCategory::Elevated,
            BloodPressureCategory::Stage1,
        ];
        categories.sort();
        assert_eq!(categories, BloodPressureCategory::all().to_vec());
    }

    #[test]
    fn test_high_alert_categories() {
        let high_alert: Vec<_> = BloodPressureCategory::all()
            .into_iter()
            .filter(|c| c.is_high_alert())
            .collect();
        assert_eq!(high_alert, vec![BloodPressureCategory::Stage2, BloodPressureCategory::Crisis]);
    }

    #[test]
    fn test_category_serializes_to_token() {
        for category in BloodPressureCategory::all() {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.token()));
        }
    }

    #[test]
    fn test_reading_metadata_is_optional_on_the_wire() {
        let reading: BloodPressureReading =
            serde_json::from_str(r#"{"id":"r1","systolic":120,"diastolic":80,"timestamp":0}"#).unwrap();
        assert_eq!(reading, BloodPressureReading::new("r1", 120, 80, 0));
    }
}
