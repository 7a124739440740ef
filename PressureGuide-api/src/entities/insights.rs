use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use pressure_guide_domain::entities::Guideline;
use pressure_guide_domain::services::{
    CircadianBreakdown, MorningSurge, ReadingAssessment, ReportStats, TagCorrelation, TimeInRange,
};
use pressure_guide_domain::thresholds::GuidelineThresholds;

/// One entry of the guideline listing
#[derive(Debug, Serialize, ToSchema)]
pub struct GuidelineInfo {
    pub guideline: Guideline,

    /// Issuing body (e.g., "AHA/ACC")
    pub name: String,

    /// Whether this guideline is used when a request names none
    pub is_default: bool,

    pub thresholds: GuidelineThresholds,
}

/// Single reading to classify
#[derive(Debug, Deserialize, ToSchema)]
pub struct ClassifyRequest {
    pub systolic: i32,
    pub diastolic: i32,
    pub pulse: Option<i32>,

    /// Guideline token; unknown tokens fall back to aha_acc
    pub guideline: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ClassifyResponse {
    /// True when the requested guideline was not recognised
    pub fell_back: bool,
    pub assessment: ReadingAssessment,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReportResponse {
    pub guideline: Guideline,
    pub fell_back: bool,
    pub report: ReportStats,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TimeInRangeResponse {
    pub guideline: Guideline,
    pub fell_back: bool,
    pub utc_offset_minutes: i32,
    pub time_in_range: TimeInRange,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CircadianResponse {
    pub utc_offset_minutes: i32,
    pub circadian: CircadianBreakdown,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SurgeResponse {
    /// Reference instant the local day was taken from, epoch seconds
    pub now: i64,
    pub utc_offset_minutes: i32,
    pub surge: MorningSurge,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CorrelationsResponse {
    /// Display threshold applied to the list
    pub min_abs_delta: i32,
    pub correlations: Vec<TagCorrelation>,
}
