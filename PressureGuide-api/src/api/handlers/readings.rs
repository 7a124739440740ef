use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::{info, instrument};

use pressure_guide_data::repository::ReadingFilter;
use pressure_guide_domain::entities::{BloodPressureReading, RecordReadingRequest};

use crate::api::handlers::error::{ErrorResponse, QueryError};
use crate::api::state::InsightServiceHandle;
use crate::entities::common::{PublicErrorResponse, ReadingsQueryParams};

/// Build an inclusive time filter, rejecting windows that end before they start
pub fn reading_filter(start: Option<i64>, end: Option<i64>) -> Result<ReadingFilter, QueryError> {
    match (start, end) {
        (Some(start), Some(end)) if start > end => Err(QueryError::InvertedRange { start, end }),
        _ => Ok(ReadingFilter::between(start, end)),
    }
}

/// Record a new blood pressure reading
#[utoipa::path(
    post,
    path = "/api/v1/readings",
    request_body = RecordReadingRequest,
    responses(
        (status = 201, description = "Reading stored", body = BloodPressureReading),
        (status = 400, description = "Reading failed validation; details lists every issue", body = PublicErrorResponse),
        (status = 500, description = "Internal server error", body = PublicErrorResponse),
    ),
    tag = "readings"
)]
#[instrument(skip(service, request))]
pub async fn record_reading(
    State(service): State<InsightServiceHandle>,
    Json(request): Json<RecordReadingRequest>,
) -> Result<impl IntoResponse, ErrorResponse> {
    info!("Recording new blood pressure reading");

    let reading = service.record_reading(request).await?;
    info!("Blood pressure reading created with ID: {}", reading.id);

    Ok((StatusCode::CREATED, Json(reading)))
}

/// List stored readings, oldest first
#[utoipa::path(
    get,
    path = "/api/v1/readings",
    params(ReadingsQueryParams),
    responses(
        (status = 200, description = "Readings inside the window", body = [BloodPressureReading]),
        (status = 400, description = "Invalid time window", body = PublicErrorResponse),
        (status = 500, description = "Internal server error", body = PublicErrorResponse),
    ),
    tag = "readings"
)]
#[instrument(skip(service))]
pub async fn list_readings(
    State(service): State<InsightServiceHandle>,
    Query(params): Query<ReadingsQueryParams>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let filter = reading_filter(params.start, params.end)?;
    let readings = service.get_readings(filter).await?;
    info!(count = readings.len(), "Listed readings");

    Ok((StatusCode::OK, Json(readings)))
}

/// Get a single reading by ID
#[utoipa::path(
    get,
    path = "/api/v1/readings/{id}",
    params(
        ("id" = String, Path, description = "Reading ID")
    ),
    responses(
        (status = 200, description = "Reading found", body = BloodPressureReading),
        (status = 404, description = "Reading not found", body = PublicErrorResponse),
        (status = 500, description = "Internal server error", body = PublicErrorResponse),
    ),
    tag = "readings"
)]
#[instrument(skip(service))]
pub async fn get_reading(
    State(service): State<InsightServiceHandle>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let reading = service.get_reading_by_id(&id).await?;
    Ok((StatusCode::OK, Json(reading)))
}
