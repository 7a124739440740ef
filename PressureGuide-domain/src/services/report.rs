use serde::{Deserialize, Serialize};
use tracing::debug;

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use crate::entities::blood_pressure::{Band, BloodPressureCategory, BloodPressureReading};
use crate::entities::guideline::Guideline;
use crate::services::classifier::categorize_blood_pressure;
use crate::services::metrics::{
    interpret_mean_arterial_pressure, interpret_pulse_pressure, mean_arterial_pressure, pulse_pressure,
};
use crate::services::stats::{mean, percent, rounded_mean};
use crate::services::time_in_range::category_counts;
use crate::services::validation::{validate_reading, ValidationResult};

/// Count and share of one category within a report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct CategoryBreakdown {
    pub category: BloodPressureCategory,
    pub count: usize,
    pub percent: u32,
}

/// Summary statistics of a reading set under one guideline
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct ReportStats {
    pub total_readings: usize,
    pub avg_systolic: i32,
    pub avg_diastolic: i32,
    pub min_systolic: i32,
    pub max_systolic: i32,
    pub min_diastolic: i32,
    pub max_diastolic: i32,

    /// Average over readings that carry a pulse, 0 when none do
    pub avg_pulse: i32,
    pub avg_pulse_pressure: i64,
    pub avg_mean_arterial_pressure: i32,

    /// Categories present in the set, in severity order
    pub category_breakdown: Vec<CategoryBreakdown>,

    /// Stage 2 and crisis readings
    pub high_alert_count: usize,
}

/// Everything the engine can say about a single reading
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct ReadingAssessment {
    pub guideline: Guideline,
    pub category: BloodPressureCategory,
    pub is_high_alert: bool,
    pub pulse_pressure: i64,
    pub pulse_pressure_band: Band,
    pub mean_arterial_pressure: i32,
    pub mean_arterial_pressure_band: Band,

    /// Validity is reported next to the category; invalid values are still classified
    pub validation: ValidationResult,
}

/// Classify, measure and validate one set of values
pub fn assess_reading(systolic: i32, diastolic: i32, pulse: Option<i32>, guideline: Guideline) -> ReadingAssessment {
    let category = categorize_blood_pressure(systolic, diastolic, guideline);
    let pp = pulse_pressure(systolic, diastolic);
    let map = mean_arterial_pressure(systolic, diastolic);

    ReadingAssessment {
        guideline,
        category,
        is_high_alert: category.is_high_alert(),
        pulse_pressure: pp,
        pulse_pressure_band: interpret_pulse_pressure(pp),
        mean_arterial_pressure: map,
        mean_arterial_pressure_band: interpret_mean_arterial_pressure(map),
        validation: validate_reading(Some(systolic), Some(diastolic), pulse),
    }
}

/// Aggregate a reading set into presentation-ready statistics.
///
/// An empty set yields all zeros and an empty breakdown.
pub fn aggregate_report(readings: &[BloodPressureReading], guideline: Guideline) -> ReportStats {
    debug!(readings = readings.len(), %guideline, "Aggregating report statistics");

    let total = readings.len();
    if total == 0 {
        return ReportStats::default();
    }

    let systolic = || readings.iter().map(|r| r.systolic);
    let diastolic = || readings.iter().map(|r| r.diastolic);
    let (Some(mean_systolic), Some(mean_diastolic)) = (mean(systolic()), mean(diastolic())) else {
        return ReportStats::default();
    };

    let category_breakdown: Vec<CategoryBreakdown> = category_counts(readings, guideline)
        .into_iter()
        .map(|(category, count)| CategoryBreakdown {
            category,
            count,
            percent: percent(count, total),
        })
        .collect();

    let high_alert_count = category_breakdown
        .iter()
        .filter(|entry| entry.category.is_high_alert())
        .map(|entry| entry.count)
        .sum();

    ReportStats {
        total_readings: total,
        avg_systolic: mean_systolic.round() as i32,
        avg_diastolic: mean_diastolic.round() as i32,
        min_systolic: systolic().min().unwrap_or(0),
        max_systolic: systolic().max().unwrap_or(0),
        min_diastolic: diastolic().min().unwrap_or(0),
        max_diastolic: diastolic().max().unwrap_or(0),
        avg_pulse: rounded_mean(readings.iter().filter_map(|r| r.pulse)).unwrap_or(0),
        // Averages of derived metrics come from the exact means, rounded once
        avg_pulse_pressure: (mean_systolic - mean_diastolic).round() as i64,
        avg_mean_arterial_pressure: ((mean_systolic + 2.0 * mean_diastolic) / 3.0).round() as i32,
        category_breakdown,
        high_alert_count,
    }
}
