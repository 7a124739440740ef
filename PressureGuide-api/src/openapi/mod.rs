use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Configure Swagger UI endpoints
pub fn configure_swagger_routes() -> SwaggerUi {
    SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi())
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        crate::api::handlers::health::health_check,

        // Guideline endpoints
        crate::api::handlers::guidelines::list_guidelines,
        crate::api::handlers::guidelines::classify_reading,

        // Reading endpoints
        crate::api::handlers::readings::record_reading,
        crate::api::handlers::readings::list_readings,
        crate::api::handlers::readings::get_reading,

        // Insight endpoints
        crate::api::handlers::insights::get_report,
        crate::api::handlers::insights::get_time_in_range,
        crate::api::handlers::insights::get_circadian,
        crate::api::handlers::insights::get_morning_surge,
        crate::api::handlers::insights::get_correlations
    ),
    components(
        schemas(
            // Domain entities
            pressure_guide_domain::entities::Guideline,
            pressure_guide_domain::entities::GuidelineSelection,
            pressure_guide_domain::entities::BloodPressureReading,
            pressure_guide_domain::entities::BloodPressureCategory,
            pressure_guide_domain::entities::Band,
            pressure_guide_domain::entities::RecordReadingRequest,

            // Threshold tables
            pressure_guide_domain::thresholds::GuidelineThresholds,
            pressure_guide_domain::thresholds::AtLeastRule,
            pressure_guide_domain::thresholds::ElevatedRule,
            pressure_guide_domain::thresholds::BelowRule,

            // Engine results
            pressure_guide_domain::services::ReadingAssessment,
            pressure_guide_domain::services::ReportStats,
            pressure_guide_domain::services::CategoryBreakdown,
            pressure_guide_domain::services::TimeInRange,
            pressure_guide_domain::services::CircadianBreakdown,
            pressure_guide_domain::services::WindowAverage,
            pressure_guide_domain::services::MorningSurge,
            pressure_guide_domain::services::TagCorrelation,
            pressure_guide_domain::services::ValidationResult,
            pressure_guide_domain::services::ValidationIssue,
            pressure_guide_domain::services::ValidationCode,

            // Public entities
            crate::entities::common::PublicErrorResponse,
            crate::entities::common::ReadingsQueryParams,
            crate::entities::common::InsightQueryParams,
            crate::entities::insights::GuidelineInfo,
            crate::entities::insights::ClassifyRequest,
            crate::entities::insights::ClassifyResponse,
            crate::entities::insights::ReportResponse,
            crate::entities::insights::TimeInRangeResponse,
            crate::entities::insights::CircadianResponse,
            crate::entities::insights::SurgeResponse,
            crate::entities::insights::CorrelationsResponse,

            // Health handlers
            crate::api::handlers::health::HealthResponse,
            crate::api::handlers::health::ComponentStatus,
            crate::api::handlers::health::ComponentHealthStatus,

            crate::api::handlers::error::ErrorResponse
        )
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "guidelines", description = "Guideline tables and single-reading classification"),
        (name = "readings", description = "Blood pressure reading storage"),
        (name = "insights", description = "Temporal analytics over stored readings")
    ),
    info(
        title = "PressureGuide API",
        version = "0.1.0",
        description = "Blood pressure classification under AHA/ACC, ESC/ESH, JSH and WHO guidelines with temporal insights",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_doc_generation() {
        let openapi = ApiDoc::openapi();

        assert_eq!(openapi.info.title, "PressureGuide API");
        assert_eq!(openapi.info.version, "0.1.0");

        let tags = openapi.tags.as_ref().expect("tags should be defined");
        assert!(tags.iter().any(|tag| tag.name == "insights"));
        assert!(tags.iter().any(|tag| tag.name == "readings"));

        for path in [
            "/health",
            "/api/v1/guidelines",
            "/api/v1/classify",
            "/api/v1/readings",
            "/api/v1/readings/{id}",
            "/api/v1/insights/report",
            "/api/v1/insights/time-in-range",
            "/api/v1/insights/circadian",
            "/api/v1/insights/surge",
            "/api/v1/insights/correlations",
        ] {
            assert!(openapi.paths.paths.contains_key(path), "missing path {}", path);
        }
    }
}
