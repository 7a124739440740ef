pub mod classifier;
pub mod metrics;
pub mod validation;
pub mod stats;
pub mod circadian;
pub mod time_in_range;
pub mod surge;
pub mod correlation;
pub mod report;

#[cfg(feature = "with-data")]
pub mod insight_service;

// Domain services
// The engine modules above are pure functions over readings; insight_service
// runs them over repository snapshots.

pub use circadian::{circadian_breakdown, CircadianBreakdown, ClockError, DayPart, LocalClock, WindowAverage};
pub use classifier::{categorize_blood_pressure, is_high_alert};
pub use correlation::{correlate_tags, TagCorrelation, DEFAULT_DISPLAY_THRESHOLD_MMHG};
pub use metrics::{interpret_mean_arterial_pressure, interpret_pulse_pressure, mean_arterial_pressure, pulse_pressure};
pub use report::{aggregate_report, assess_reading, CategoryBreakdown, ReadingAssessment, ReportStats};
pub use surge::{detect_morning_surge, MorningSurge};
pub use time_in_range::{time_in_range, TimeInRange};
pub use validation::{validate_reading, ValidationCode, ValidationIssue, ValidationResult};

#[cfg(feature = "with-data")]
pub use insight_service::{create_default_insight_service, InsightService, InsightServiceError, InsightServiceTrait};
