//! Time-of-day windowing of readings.
//!
//! A reading's window is derived only from the local hour of its timestamp:
//! morning [06:00, 10:00), day [10:00, 18:00), evening [18:00, 22:00) and
//! night [22:00, 06:00), which wraps midnight.

use chrono::{DateTime, FixedOffset, Offset, Timelike, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use crate::entities::blood_pressure::BloodPressureReading;
use crate::services::stats::rounded_mean;

/// Largest UTC offset accepted, in minutes
pub const MAX_UTC_OFFSET_MINUTES: i32 = 18 * 60;

/// Errors raised while building a local clock
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClockError {
    #[error("UTC offset out of range: {0} minutes")]
    OffsetOutOfRange(i32),
}

/// Converts reading timestamps to the user's wall-clock time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalClock {
    offset: FixedOffset,
}

impl Default for LocalClock {
    fn default() -> Self {
        Self::utc()
    }
}

impl LocalClock {
    pub fn utc() -> Self {
        Self { offset: Utc.fix() }
    }

    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Build a clock from a UTC offset in minutes (east positive)
    pub fn from_offset_minutes(minutes: i32) -> Result<Self, ClockError> {
        if !(-MAX_UTC_OFFSET_MINUTES..=MAX_UTC_OFFSET_MINUTES).contains(&minutes) {
            return Err(ClockError::OffsetOutOfRange(minutes));
        }
        FixedOffset::east_opt(minutes * 60)
            .map(Self::new)
            .ok_or(ClockError::OffsetOutOfRange(minutes))
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Local date and time of an epoch-seconds timestamp; `None` outside chrono's range
    pub fn local_time(&self, timestamp: i64) -> Option<DateTime<FixedOffset>> {
        DateTime::<Utc>::from_timestamp(timestamp, 0).map(|utc| utc.with_timezone(&self.offset))
    }

    /// Local hour (0-23). Timestamps chrono cannot represent are treated as midnight.
    pub fn local_hour(&self, timestamp: i64) -> u32 {
        self.local_time(timestamp).map_or(0, |local| local.hour())
    }

    /// Epoch seconds of the local midnight starting the day that contains `timestamp`
    pub fn start_of_day(&self, timestamp: i64) -> Option<i64> {
        let local = self.local_time(timestamp)?;
        let seconds_into_day = i64::from(local.num_seconds_from_midnight());
        Some(timestamp - seconds_into_day)
    }
}

/// Part of the day a reading falls in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum DayPart {
    Morning,
    Day,
    Evening,
    Night,
}

impl DayPart {
    pub fn all() -> [DayPart; 4] {
        [DayPart::Morning, DayPart::Day, DayPart::Evening, DayPart::Night]
    }

    pub fn from_hour(hour: u32) -> DayPart {
        match hour {
            6..=9 => DayPart::Morning,
            10..=17 => DayPart::Day,
            18..=21 => DayPart::Evening,
            _ => DayPart::Night,
        }
    }

    pub fn of_timestamp(timestamp: i64, clock: &LocalClock) -> DayPart {
        DayPart::from_hour(clock.local_hour(timestamp))
    }
}

/// Rounded average of one window
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct WindowAverage {
    pub systolic: i32,
    pub diastolic: i32,
    pub count: usize,
}

impl WindowAverage {
    /// `None` for an empty window
    pub fn of(readings: &[BloodPressureReading]) -> Option<WindowAverage> {
        Some(WindowAverage {
            systolic: rounded_mean(readings.iter().map(|r| r.systolic))?,
            diastolic: rounded_mean(readings.iter().map(|r| r.diastolic))?,
            count: readings.len(),
        })
    }
}

/// Readings grouped by day part, with per-window averages
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct CircadianBreakdown {
    pub morning: Vec<BloodPressureReading>,
    pub day: Vec<BloodPressureReading>,
    pub evening: Vec<BloodPressureReading>,
    pub night: Vec<BloodPressureReading>,
    pub morning_avg: Option<WindowAverage>,
    pub day_avg: Option<WindowAverage>,
    pub evening_avg: Option<WindowAverage>,
    pub night_avg: Option<WindowAverage>,
}

impl CircadianBreakdown {
    pub fn readings(&self, part: DayPart) -> &[BloodPressureReading] {
        match part {
            DayPart::Morning => &self.morning,
            DayPart::Day => &self.day,
            DayPart::Evening => &self.evening,
            DayPart::Night => &self.night,
        }
    }

    pub fn average(&self, part: DayPart) -> Option<WindowAverage> {
        match part {
            DayPart::Morning => self.morning_avg,
            DayPart::Day => self.day_avg,
            DayPart::Evening => self.evening_avg,
            DayPart::Night => self.night_avg,
        }
    }
}

/// Partition readings by day part in a single pass, keeping input order inside each window
pub fn circadian_breakdown(readings: &[BloodPressureReading], clock: &LocalClock) -> CircadianBreakdown {
    let mut breakdown = CircadianBreakdown::default();

    for reading in readings {
        let window = match DayPart::of_timestamp(reading.timestamp, clock) {
            DayPart::Morning => &mut breakdown.morning,
            DayPart::Day => &mut breakdown.day,
            DayPart::Evening => &mut breakdown.evening,
            DayPart::Night => &mut breakdown.night,
        };
        window.push(reading.clone());
    }

    breakdown.morning_avg = WindowAverage::of(&breakdown.morning);
    breakdown.day_avg = WindowAverage::of(&breakdown.day);
    breakdown.evening_avg = WindowAverage::of(&breakdown.evening);
    breakdown.night_avg = WindowAverage::of(&breakdown.night);

    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-03-04T00:00:00Z
    const MIDNIGHT_UTC: i64 = 1_709_510_400;

    fn at(hour: i64, minute: i64) -> i64 {
        MIDNIGHT_UTC + hour * 3600 + minute * 60
    }

    #[test]
    fn test_day_part_boundaries() {
        let clock = LocalClock::utc();
        assert_eq!(DayPart::of_timestamp(at(9, 59), &clock), DayPart::Morning);
        assert_eq!(DayPart::of_timestamp(at(10, 0), &clock), DayPart::Day);
        assert_eq!(DayPart::of_timestamp(at(0, 0), &clock), DayPart::Night);
        assert_eq!(DayPart::of_timestamp(at(22, 0), &clock), DayPart::Night);
        assert_eq!(DayPart::of_timestamp(at(5, 59), &clock), DayPart::Night);
        assert_eq!(DayPart::of_timestamp(at(6, 0), &clock), DayPart::Morning);
        assert_eq!(DayPart::of_timestamp(at(17, 59), &clock), DayPart::Day);
        assert_eq!(DayPart::of_timestamp(at(18, 0), &clock), DayPart::Evening);
        assert_eq!(DayPart::of_timestamp(at(21, 59), &clock), DayPart::Evening);
    }

    #[test]
    fn test_day_part_uses_local_hour() {
        // 04:30 UTC is 09:30 at UTC+5
        let clock = LocalClock::from_offset_minutes(300).unwrap();
        assert_eq!(DayPart::of_timestamp(at(4, 30), &clock), DayPart::Morning);
        assert_eq!(DayPart::of_timestamp(at(4, 30), &LocalClock::utc()), DayPart::Night);
    }

    #[test]
    fn test_offset_limits() {
        assert!(LocalClock::from_offset_minutes(-720).is_ok());
        assert_eq!(
            LocalClock::from_offset_minutes(19 * 60),
            Err(ClockError::OffsetOutOfRange(19 * 60))
        );
        assert!(LocalClock::from_offset_minutes(MAX_UTC_OFFSET_MINUTES).is_ok());
        assert!(LocalClock::from_offset_minutes(-MAX_UTC_OFFSET_MINUTES).is_ok());
        assert_eq!(
            LocalClock::from_offset_minutes(MAX_UTC_OFFSET_MINUTES + 1),
            Err(ClockError::OffsetOutOfRange(MAX_UTC_OFFSET_MINUTES + 1))
        );
    }

    #[test]
    fn test_offset_at_integer_limits_is_rejected() {
        assert_eq!(
            LocalClock::from_offset_minutes(i32::MIN),
            Err(ClockError::OffsetOutOfRange(i32::MIN))
        );
        assert_eq!(
            LocalClock::from_offset_minutes(i32::MAX),
            Err(ClockError::OffsetOutOfRange(i32::MAX))
        );
    }

    #[test]
    fn test_start_of_day_follows_local_midnight() {
        let clock = LocalClock::from_offset_minutes(-300).unwrap();
        // 03:00 UTC on the 4th is 22:00 on the 3rd at UTC-5; local midnight was 05:00 UTC on the 3rd
        assert_eq!(clock.start_of_day(at(3, 0)), Some(MIDNIGHT_UTC - 19 * 3600));
        assert_eq!(LocalClock::utc().start_of_day(at(13, 45)), Some(MIDNIGHT_UTC));
    }

    #[test]
    fn test_breakdown_groups_and_averages() {
        let readings = vec![
            BloodPressureReading::new("a", 120, 80, at(7, 0)),
            BloodPressureReading::new("b", 131, 85, at(8, 0)),
            BloodPressureReading::new("c", 110, 70, at(12, 0)),
            BloodPressureReading::new("d", 100, 60, at(23, 0)),
        ];

        let breakdown = circadian_breakdown(&readings, &LocalClock::utc());

        assert_eq!(breakdown.morning.len(), 2);
        assert_eq!(breakdown.day.len(), 1);
        assert!(breakdown.evening.is_empty());
        assert_eq!(breakdown.night.len(), 1);
        // (120 + 131) / 2 = 125.5, (80 + 85) / 2 = 82.5
        assert_eq!(
            breakdown.morning_avg,
            Some(WindowAverage { systolic: 126, diastolic: 83, count: 2 })
        );
        assert_eq!(breakdown.evening_avg, None);
        assert_eq!(breakdown.average(DayPart::Night).map(|avg| avg.count), Some(1));
        assert_eq!(breakdown.readings(DayPart::Day)[0].id, "c");
    }

    #[test]
    fn test_breakdown_of_empty_input() {
        let breakdown = circadian_breakdown(&[], &LocalClock::utc());
        for part in DayPart::all() {
            assert!(breakdown.readings(part).is_empty());
            assert_eq!(breakdown.average(part), None);
        }
    }
}
