use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tracing::{info, instrument, warn};

use pressure_guide_domain::entities::Guideline;
use pressure_guide_domain::services::assess_reading;
use pressure_guide_domain::thresholds::thresholds;

use crate::config::AppConfig;
use crate::entities::common::PublicErrorResponse;
use crate::entities::insights::{ClassifyRequest, ClassifyResponse, GuidelineInfo};

/// List the threshold tables of every supported guideline
#[utoipa::path(
    get,
    path = "/api/v1/guidelines",
    responses(
        (status = 200, description = "Supported guidelines and their thresholds", body = [GuidelineInfo]),
    ),
    tag = "guidelines"
)]
#[instrument(skip(config))]
pub async fn list_guidelines(State(config): State<Arc<AppConfig>>) -> impl IntoResponse {
    let guidelines: Vec<GuidelineInfo> = Guideline::all()
        .into_iter()
        .map(|guideline| GuidelineInfo {
            guideline,
            name: guideline.display_name().to_string(),
            is_default: guideline == config.default_guideline,
            thresholds: *thresholds(guideline),
        })
        .collect();

    (StatusCode::OK, Json(guidelines))
}

/// Classify a single reading without storing it
#[utoipa::path(
    post,
    path = "/api/v1/classify",
    request_body = ClassifyRequest,
    responses(
        (status = 200, description = "Category, derived metrics and validation of the values", body = ClassifyResponse),
        (status = 400, description = "Malformed request body", body = PublicErrorResponse),
    ),
    tag = "guidelines"
)]
#[instrument(skip(config, request))]
pub async fn classify_reading(
    State(config): State<Arc<AppConfig>>,
    Json(request): Json<ClassifyRequest>,
) -> impl IntoResponse {
    let selection = Guideline::resolve_or(request.guideline.as_deref(), config.default_guideline);
    let assessment = assess_reading(request.systolic, request.diastolic, request.pulse, selection.guideline);

    if !assessment.validation.is_valid {
        warn!(
            issues = assessment.validation.errors.len(),
            "Classified values that fail validation"
        );
    }
    info!(category = %assessment.category, guideline = %selection.guideline, "Classified reading");

    (
        StatusCode::OK,
        Json(ClassifyResponse {
            fell_back: selection.fell_back,
            assessment,
        }),
    )
}
