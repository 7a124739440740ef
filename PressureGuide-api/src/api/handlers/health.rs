use std::sync::{Arc, Once};
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::ToSchema;

use pressure_guide_domain::health::{self, ComponentStatus as DomainComponentStatus, SystemHealth, SystemStatus};

use crate::api::state::StorageHandle;
use crate::config::AppConfig;

/// Health check response model
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Current service status ("ok", "degraded", or "error")
    pub status: String,
    /// Current application version from Cargo manifest
    pub version: String,
    /// Timestamp of when the response was generated
    pub timestamp: u64,
    /// Uptime of the service in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime: Option<u64>,
    /// Details about various components of the system
    pub components: ComponentStatus,
    /// Environment information
    pub environment: String,
}

/// Status of individual system components
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ComponentStatus {
    /// Reading storage status
    pub storage: ComponentHealthStatus,
    /// Classification engine self-check
    pub engine: ComponentHealthStatus,
}

/// Health status for an individual component
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ComponentHealthStatus {
    /// Status of the component ("ok", "degraded", or "error")
    pub status: String,
    /// Optional message with more details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// Track the time when the server started using a thread-safe OnceCell
static SERVER_START_TIME: OnceCell<u64> = OnceCell::new();
static INIT: Once = Once::new();

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

// Initialize the server start time
pub fn initialize_server_start_time() {
    INIT.call_once(|| {
        let _ = SERVER_START_TIME.set(now_secs());
    });
}

/// Health check endpoint to verify the API is running
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "API is healthy", body = HealthResponse),
        (status = 500, description = "API is not healthy", body = HealthResponse),
        (status = 503, description = "API is degraded", body = HealthResponse)
    ),
    tag = "health"
)]
#[instrument(skip(storage, config))]
pub async fn health_check(
    State(storage): State<StorageHandle>,
    State(config): State<Arc<AppConfig>>,
) -> impl IntoResponse {
    info!("Health check requested");

    let now = now_secs();
    let uptime = SERVER_START_TIME.get().map(|&start_time| now.saturating_sub(start_time));

    let system_health = health::get_system_health(storage.as_ref()).await;

    let overall_status = match system_health.status {
        SystemStatus::Healthy => "ok",
        SystemStatus::Degraded => "degraded",
        SystemStatus::Unhealthy => "error",
    };

    let response = HealthResponse {
        status: overall_status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: now,
        uptime,
        components: ComponentStatus {
            storage: component(&system_health, "storage"),
            engine: component(&system_health, "engine"),
        },
        environment: config.environment.clone(),
    };

    let status = match system_health.status {
        SystemStatus::Healthy => StatusCode::OK,
        SystemStatus::Degraded => StatusCode::SERVICE_UNAVAILABLE,
        SystemStatus::Unhealthy => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (status, Json(response))
}

fn component(health: &SystemHealth, name: &str) -> ComponentHealthStatus {
    match health.components.get(name) {
        Some(component) => ComponentHealthStatus {
            status: map_component_status(component.status),
            message: component.details.clone(),
        },
        None => ComponentHealthStatus {
            status: "error".to_string(),
            message: Some(format!("{} was not checked", name)),
        },
    }
}

/// Map domain component status to API status string
fn map_component_status(status: DomainComponentStatus) -> String {
    match status {
        DomainComponentStatus::Healthy => "ok",
        DomainComponentStatus::Degraded => "degraded",
        DomainComponentStatus::Unhealthy => "error",
    }
    .to_string()
}
