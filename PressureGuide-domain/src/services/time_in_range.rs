use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use crate::entities::blood_pressure::{BloodPressureCategory, BloodPressureReading};
use crate::entities::guideline::Guideline;
use crate::services::circadian::{circadian_breakdown, DayPart, LocalClock};
use crate::services::classifier::categorize_blood_pressure;
use crate::services::stats::percent;

/// Share of readings per category, overall and per day part.
///
/// Each map always holds all five categories. Percentages are rounded one by
/// one, so a window may not add up to exactly 100.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct TimeInRange {
    pub overall: BTreeMap<BloodPressureCategory, u32>,
    pub morning: BTreeMap<BloodPressureCategory, u32>,
    pub day: BTreeMap<BloodPressureCategory, u32>,
    pub evening: BTreeMap<BloodPressureCategory, u32>,
    pub night: BTreeMap<BloodPressureCategory, u32>,
}

impl TimeInRange {
    pub fn window(&self, part: DayPart) -> &BTreeMap<BloodPressureCategory, u32> {
        match part {
            DayPart::Morning => &self.morning,
            DayPart::Day => &self.day,
            DayPart::Evening => &self.evening,
            DayPart::Night => &self.night,
        }
    }
}

/// Number of readings per category; categories without readings are absent
pub fn category_counts(
    readings: &[BloodPressureReading],
    guideline: Guideline,
) -> BTreeMap<BloodPressureCategory, usize> {
    let mut counts = BTreeMap::new();
    for reading in readings {
        let category = categorize_blood_pressure(reading.systolic, reading.diastolic, guideline);
        *counts.entry(category).or_insert(0) += 1;
    }
    counts
}

/// Percentage of readings per category, with every category present (0 when absent)
pub fn category_percentages(
    readings: &[BloodPressureReading],
    guideline: Guideline,
) -> BTreeMap<BloodPressureCategory, u32> {
    let counts = category_counts(readings, guideline);
    BloodPressureCategory::all()
        .into_iter()
        .map(|category| {
            let count = counts.get(&category).copied().unwrap_or(0);
            (category, percent(count, readings.len()))
        })
        .collect()
}

/// Classify every reading and report category shares overall and for each day part
pub fn time_in_range(readings: &[BloodPressureReading], guideline: Guideline, clock: &LocalClock) -> TimeInRange {
    debug!(readings = readings.len(), %guideline, "Computing time in range");

    let breakdown = circadian_breakdown(readings, clock);

    TimeInRange {
        overall: category_percentages(readings, guideline),
        morning: category_percentages(&breakdown.morning, guideline),
        day: category_percentages(&breakdown.day, guideline),
        evening: category_percentages(&breakdown.evening, guideline),
        night: category_percentages(&breakdown.night, guideline),
    }
}
