use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use tracing::debug;

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use crate::entities::blood_pressure::BloodPressureReading;
use crate::services::stats::mean;

/// Both the tagged and the untagged side need at least this many readings
pub const MIN_SAMPLE_SIZE: usize = 3;

/// Smallest absolute systolic delta (mmHg) worth showing to the user
pub const DEFAULT_DISPLAY_THRESHOLD_MMHG: i32 = 3;

/// Average difference between readings carrying a tag and readings without it.
///
/// A plain difference of means; no significance testing is involved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct TagCorrelation {
    pub tag: String,
    pub avg_systolic_delta: i32,
    pub avg_diastolic_delta: i32,
    pub tagged_count: usize,
    pub untagged_count: usize,
}

impl TagCorrelation {
    pub fn meets_display_threshold(&self, min_abs_delta: i32) -> bool {
        i64::from(self.avg_systolic_delta).abs() >= i64::from(min_abs_delta)
    }
}

/// Compare tagged against untagged readings for every distinct tag in the map.
///
/// Tags with fewer than [`MIN_SAMPLE_SIZE`] readings on either side are
/// skipped. The result is ordered by absolute systolic delta, largest first;
/// ties keep alphabetical tag order.
pub fn correlate_tags(
    readings: &[BloodPressureReading],
    tags_by_reading_id: &HashMap<String, Vec<String>>,
) -> Vec<TagCorrelation> {
    let distinct_tags: BTreeSet<&str> = tags_by_reading_id
        .values()
        .flatten()
        .map(String::as_str)
        .collect();

    let mut correlations: Vec<TagCorrelation> = distinct_tags
        .into_iter()
        .filter_map(|tag| correlate_tag(tag, readings, tags_by_reading_id))
        .collect();

    correlations.sort_by(|a, b| b.avg_systolic_delta.unsigned_abs().cmp(&a.avg_systolic_delta.unsigned_abs()));

    debug!(
        readings = readings.len(),
        qualifying_tags = correlations.len(),
        "Computed tag correlations"
    );

    correlations
}

fn correlate_tag(
    tag: &str,
    readings: &[BloodPressureReading],
    tags_by_reading_id: &HashMap<String, Vec<String>>,
) -> Option<TagCorrelation> {
    let (tagged, untagged): (Vec<&BloodPressureReading>, Vec<&BloodPressureReading>) =
        readings.iter().partition(|reading| {
            tags_by_reading_id
                .get(&reading.id)
                .is_some_and(|tags| tags.iter().any(|t| t == tag))
        });

    if tagged.len() < MIN_SAMPLE_SIZE || untagged.len() < MIN_SAMPLE_SIZE {
        return None;
    }

    let systolic_delta = mean(tagged.iter().map(|r| r.systolic))? - mean(untagged.iter().map(|r| r.systolic))?;
    let diastolic_delta = mean(tagged.iter().map(|r| r.diastolic))? - mean(untagged.iter().map(|r| r.diastolic))?;

    Some(TagCorrelation {
        tag: tag.to_string(),
        avg_systolic_delta: systolic_delta.round() as i32,
        avg_diastolic_delta: diastolic_delta.round() as i32,
        tagged_count: tagged.len(),
        untagged_count: untagged.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn readings(specs: &[(&str, i32, i32)]) -> Vec<BloodPressureReading> {
        specs
            .iter()
            .enumerate()
            .map(|(i, &(id, systolic, diastolic))| BloodPressureReading::new(id, systolic, diastolic, i as i64 * 3600))
            .collect()
    }

    fn tag_map(entries: &[(&str, &[&str])]) -> HashMap<String, Vec<String>> {
        entries
            .iter()
            .map(|(id, tags)| (id.to_string(), tags.iter().map(|t| t.to_string()).collect()))
            .collect()
    }

    #[test]
    fn test_skips_tag_with_too_few_tagged_readings() {
        let readings = readings(&[
            ("a", 140, 90),
            ("b", 140, 90),
            ("c", 120, 80),
            ("d", 120, 80),
            ("e", 120, 80),
            ("f", 120, 80),
            ("g", 120, 80),
        ]);
        let tags = tag_map(&[("a", &["salt"]), ("b", &["salt"])]);

        assert!(correlate_tags(&readings, &tags).is_empty());
    }

    #[test]
    fn test_skips_tag_with_too_few_untagged_readings() {
        let readings = readings(&[("a", 140, 90), ("b", 140, 90), ("c", 140, 90), ("d", 120, 80)]);
        let tags = tag_map(&[("a", &["salt"]), ("b", &["salt"]), ("c", &["salt"])]);

        assert!(correlate_tags(&readings, &tags).is_empty());
    }

    #[test]
    fn test_ranks_by_absolute_systolic_delta() {
        // Three readings tagged "alcohol" are 25 above the rest, three tagged "exercise" are 10 below
        let readings = readings(&[
            ("a1", 145, 95),
            ("a2", 145, 95),
            ("a3", 145, 95),
            ("x1", 110, 75),
            ("x2", 110, 75),
            ("x3", 110, 75),
            ("u1", 120, 80),
            ("u2", 120, 80),
            ("u3", 120, 80),
        ]);
        let tags = tag_map(&[
            ("a1", &["alcohol"]),
            ("a2", &["alcohol"]),
            ("a3", &["alcohol"]),
            ("x1", &["exercise"]),
            ("x2", &["exercise"]),
            ("x3", &["exercise"]),
        ]);

        let result = correlate_tags(&readings, &tags);

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].tag, "alcohol");
        // tagged 145 vs untagged mean of 110 x3 and 120 x3 = 115
        assert_eq!(result[0].avg_systolic_delta, 30);
        assert_eq!(result[0].tagged_count, 3);
        assert_eq!(result[0].untagged_count, 6);
        assert_eq!(result[1].tag, "exercise");
        // tagged 110 vs untagged mean of 145 x3 and 120 x3 = 132.5
        assert_eq!(result[1].avg_systolic_delta, -23);
        assert_eq!(result[1].avg_diastolic_delta, -13);
    }

    #[test]
    fn test_display_threshold() {
        let correlation = TagCorrelation {
            tag: "coffee".to_string(),
            avg_systolic_delta: -3,
            avg_diastolic_delta: 1,
            tagged_count: 3,
            untagged_count: 3,
        };
        assert!(correlation.meets_display_threshold(DEFAULT_DISPLAY_THRESHOLD_MMHG));
        assert!(!correlation.meets_display_threshold(4));

        let saturated = TagCorrelation {
            avg_systolic_delta: i32::MIN,
            ..correlation
        };
        assert!(saturated.meets_display_threshold(i32::MAX));
    }

    #[test]
    fn test_extreme_values_saturate_the_delta() {
        let readings = readings(&[
            ("a", i32::MIN, 80),
            ("b", i32::MIN, 80),
            ("c", i32::MIN, 80),
            ("d", i32::MAX, 80),
            ("e", i32::MAX, 80),
            ("f", i32::MAX, 80),
        ]);
        let tags = tag_map(&[("a", &["cold"]), ("b", &["cold"]), ("c", &["cold"])]);

        let result = correlate_tags(&readings, &tags);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].avg_systolic_delta, i32::MIN);
        assert_eq!(result[0].avg_diastolic_delta, 0);
    }

    #[test]
    fn test_tags_for_unknown_readings_do_not_count() {
        let readings = readings(&[("a", 130, 85), ("b", 130, 85), ("c", 120, 80), ("d", 120, 80), ("e", 120, 80)]);
        let tags = tag_map(&[("a", &["stress"]), ("b", &["stress"]), ("zz", &["stress"])]);

        assert!(correlate_tags(&readings, &tags).is_empty());
    }
}
