use serde::{Deserialize, Serialize};
use tracing::debug;

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use crate::entities::blood_pressure::BloodPressureReading;
use crate::services::circadian::{DayPart, LocalClock};
use crate::services::stats::mean;

/// Systolic rise (mmHg) from night average to first morning reading that counts as a surge
pub const SURGE_THRESHOLD_MMHG: i32 = 20;

const HOUR: i64 = 3_600;
const DAY: i64 = 24 * HOUR;

/// Result of comparing today's first morning reading with last night's readings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct MorningSurge {
    pub has_surge: bool,

    /// Rounded systolic difference, 0 when either side has no readings
    pub delta: i32,

    /// Morning reading that triggered the surge
    pub surge_reading_id: Option<String>,
}

/// Compare the earliest morning reading of the local day containing `now`
/// against the average systolic of the night readings between 22:00 the
/// previous evening and 06:00 today.
///
/// Only that single night/morning pair is evaluated.
pub fn detect_morning_surge(readings: &[BloodPressureReading], now: i64, clock: &LocalClock) -> MorningSurge {
    let Some(today_start) = clock.start_of_day(now) else {
        return MorningSurge::default();
    };
    let tomorrow_start = today_start + DAY;
    let night_from = today_start - 2 * HOUR;
    let night_until = today_start + 6 * HOUR;

    let first_morning = readings
        .iter()
        .filter(|r| r.timestamp >= today_start && r.timestamp < tomorrow_start)
        .filter(|r| DayPart::of_timestamp(r.timestamp, clock) == DayPart::Morning)
        .min_by_key(|r| r.timestamp);

    let night_average = mean(
        readings
            .iter()
            .filter(|r| r.timestamp >= night_from && r.timestamp < night_until)
            .filter(|r| DayPart::of_timestamp(r.timestamp, clock) == DayPart::Night)
            .map(|r| r.systolic),
    );

    let (Some(morning), Some(night_average)) = (first_morning, night_average) else {
        debug!("Not enough readings around last night to check for a morning surge");
        return MorningSurge::default();
    };

    let delta = (f64::from(morning.systolic) - night_average).round() as i32;
    let has_surge = delta >= SURGE_THRESHOLD_MMHG;

    MorningSurge {
        has_surge,
        delta,
        surge_reading_id: has_surge.then(|| morning.id.clone()),
    }
}
