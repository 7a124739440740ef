use axum::{routing::get, routing::post, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::api::handlers::{guidelines, health, insights, readings};
use crate::api::state::AppState;
use crate::openapi::configure_swagger_routes;

/// Create the application router over the given state
pub fn create_app(state: AppState) -> Router {
    debug!("Creating application router");

    let api_routes = Router::new()
        .route("/guidelines", get(guidelines::list_guidelines))
        .route("/classify", post(guidelines::classify_reading))
        .route("/readings", get(readings::list_readings).post(readings::record_reading))
        .route("/readings/:id", get(readings::get_reading))
        .route("/insights/report", get(insights::get_report))
        .route("/insights/time-in-range", get(insights::get_time_in_range))
        .route("/insights/circadian", get(insights::get_circadian))
        .route("/insights/surge", get(insights::get_morning_surge))
        .route("/insights/correlations", get(insights::get_correlations));

    debug!("API routes configured");

    let public_routes = Router::new().route("/health", get(health::health_check));

    let app = Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .with_state(state);

    debug!("API routes nested");

    let app = add_swagger_ui(app)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Initialize health check service startup time
    health::initialize_server_start_time();

    app
}

/// Add Swagger UI to the router
pub fn add_swagger_ui(app: Router) -> Router {
    let swagger = configure_swagger_routes();
    app.merge(swagger)
}
