use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Standardized error response format
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PublicErrorResponse {
    /// Error type/code - machine-readable identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Optional details about the error (e.g., every validation issue)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Time window filter for reading lists
#[derive(Debug, Default, Clone, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ReadingsQueryParams {
    /// Earliest timestamp to include, epoch seconds
    pub start: Option<i64>,

    /// Latest timestamp to include, epoch seconds
    pub end: Option<i64>,
}

/// Query parameters shared by the insight endpoints
#[derive(Debug, Default, Clone, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct InsightQueryParams {
    /// Guideline token (aha_acc, esc_esh, jsh, who); unknown tokens fall back to aha_acc
    pub guideline: Option<String>,

    /// Earliest timestamp to include, epoch seconds
    pub start: Option<i64>,

    /// Latest timestamp to include, epoch seconds
    pub end: Option<i64>,

    /// User's UTC offset in minutes, east positive (default from configuration)
    pub utc_offset_minutes: Option<i32>,

    /// Reference instant for the morning surge check, epoch seconds (default: now)
    pub now: Option<i64>,

    /// Smallest absolute systolic delta (mmHg) a correlation needs to be listed (default: 3)
    pub min_abs_delta: Option<i32>,
}
