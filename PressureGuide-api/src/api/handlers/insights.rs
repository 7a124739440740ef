use std::sync::Arc;

use axum::{
    extract::{Json, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use tracing::{debug, info, instrument};

use pressure_guide_domain::entities::{Guideline, GuidelineSelection};
use pressure_guide_domain::services::{LocalClock, DEFAULT_DISPLAY_THRESHOLD_MMHG};

use crate::api::handlers::error::{ErrorResponse, QueryError};
use crate::api::handlers::readings::reading_filter;
use crate::api::state::InsightServiceHandle;
use crate::config::AppConfig;
use crate::entities::common::{InsightQueryParams, PublicErrorResponse};
use crate::entities::insights::{
    CircadianResponse, CorrelationsResponse, ReportResponse, SurgeResponse, TimeInRangeResponse,
};

impl InsightQueryParams {
    fn guideline(&self, config: &AppConfig) -> GuidelineSelection {
        Guideline::resolve_or(self.guideline.as_deref(), config.default_guideline)
    }

    fn utc_offset_minutes(&self, config: &AppConfig) -> i32 {
        self.utc_offset_minutes.unwrap_or(config.default_utc_offset_minutes)
    }

    fn clock(&self, config: &AppConfig) -> Result<LocalClock, QueryError> {
        Ok(LocalClock::from_offset_minutes(self.utc_offset_minutes(config))?)
    }
}

/// Summary statistics of the readings in a window
#[utoipa::path(
    get,
    path = "/api/v1/insights/report",
    params(InsightQueryParams),
    responses(
        (status = 200, description = "Report under the resolved guideline", body = ReportResponse),
        (status = 400, description = "Invalid query", body = PublicErrorResponse),
        (status = 500, description = "Internal server error", body = PublicErrorResponse),
    ),
    tag = "insights"
)]
#[instrument(skip(service, config))]
pub async fn get_report(
    State(service): State<InsightServiceHandle>,
    State(config): State<Arc<AppConfig>>,
    Query(params): Query<InsightQueryParams>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let selection = params.guideline(&config);
    let filter = reading_filter(params.start, params.end)?;

    let report = service.report(selection.guideline, filter).await?;
    info!(readings = report.total_readings, guideline = %selection.guideline, "Generated report");

    Ok((
        StatusCode::OK,
        Json(ReportResponse {
            guideline: selection.guideline,
            fell_back: selection.fell_back,
            report,
        }),
    ))
}

/// Category shares overall and per time of day
#[utoipa::path(
    get,
    path = "/api/v1/insights/time-in-range",
    params(InsightQueryParams),
    responses(
        (status = 200, description = "Percent of readings per category", body = TimeInRangeResponse),
        (status = 400, description = "Invalid query", body = PublicErrorResponse),
        (status = 500, description = "Internal server error", body = PublicErrorResponse),
    ),
    tag = "insights"
)]
#[instrument(skip(service, config))]
pub async fn get_time_in_range(
    State(service): State<InsightServiceHandle>,
    State(config): State<Arc<AppConfig>>,
    Query(params): Query<InsightQueryParams>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let selection = params.guideline(&config);
    let filter = reading_filter(params.start, params.end)?;
    let clock = params.clock(&config)?;

    let time_in_range = service.time_in_range(selection.guideline, filter, clock).await?;
    debug!(guideline = %selection.guideline, "Computed time in range");

    Ok((
        StatusCode::OK,
        Json(TimeInRangeResponse {
            guideline: selection.guideline,
            fell_back: selection.fell_back,
            utc_offset_minutes: params.utc_offset_minutes(&config),
            time_in_range,
        }),
    ))
}

/// Readings grouped by time of day
#[utoipa::path(
    get,
    path = "/api/v1/insights/circadian",
    params(InsightQueryParams),
    responses(
        (status = 200, description = "Readings and averages per day part", body = CircadianResponse),
        (status = 400, description = "Invalid query", body = PublicErrorResponse),
        (status = 500, description = "Internal server error", body = PublicErrorResponse),
    ),
    tag = "insights"
)]
#[instrument(skip(service, config))]
pub async fn get_circadian(
    State(service): State<InsightServiceHandle>,
    State(config): State<Arc<AppConfig>>,
    Query(params): Query<InsightQueryParams>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let filter = reading_filter(params.start, params.end)?;
    let clock = params.clock(&config)?;

    let circadian = service.circadian(filter, clock).await?;

    Ok((
        StatusCode::OK,
        Json(CircadianResponse {
            utc_offset_minutes: params.utc_offset_minutes(&config),
            circadian,
        }),
    ))
}

/// Morning surge check for the local day containing `now`
#[utoipa::path(
    get,
    path = "/api/v1/insights/surge",
    params(InsightQueryParams),
    responses(
        (status = 200, description = "Surge result for the day", body = SurgeResponse),
        (status = 400, description = "Invalid query", body = PublicErrorResponse),
        (status = 500, description = "Internal server error", body = PublicErrorResponse),
    ),
    tag = "insights"
)]
#[instrument(skip(service, config))]
pub async fn get_morning_surge(
    State(service): State<InsightServiceHandle>,
    State(config): State<Arc<AppConfig>>,
    Query(params): Query<InsightQueryParams>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let clock = params.clock(&config)?;
    let now = params.now.unwrap_or_else(|| Utc::now().timestamp());

    let surge = service.morning_surge(now, clock).await?;
    if surge.has_surge {
        info!(delta = surge.delta, "Morning surge detected");
    }

    Ok((
        StatusCode::OK,
        Json(SurgeResponse {
            now,
            utc_offset_minutes: params.utc_offset_minutes(&config),
            surge,
        }),
    ))
}

/// Tag correlations at or above the display threshold
#[utoipa::path(
    get,
    path = "/api/v1/insights/correlations",
    params(InsightQueryParams),
    responses(
        (status = 200, description = "Tags ordered by absolute systolic delta", body = CorrelationsResponse),
        (status = 400, description = "Invalid query", body = PublicErrorResponse),
        (status = 500, description = "Internal server error", body = PublicErrorResponse),
    ),
    tag = "insights"
)]
#[instrument(skip(service))]
pub async fn get_correlations(
    State(service): State<InsightServiceHandle>,
    Query(params): Query<InsightQueryParams>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let filter = reading_filter(params.start, params.end)?;
    let min_abs_delta = params.min_abs_delta.unwrap_or(DEFAULT_DISPLAY_THRESHOLD_MMHG);

    let correlations: Vec<_> = service
        .correlations(filter)
        .await?
        .into_iter()
        .filter(|c| c.meets_display_threshold(min_abs_delta))
        .collect();
    debug!(count = correlations.len(), min_abs_delta, "Listed tag correlations");

    Ok((
        StatusCode::OK,
        Json(CorrelationsResponse {
            min_abs_delta,
            correlations,
        }),
    ))
}
