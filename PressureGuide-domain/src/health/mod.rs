//! Domain layer health check functionality
//! This module reports on storage availability and the classification engine

use std::collections::HashMap;

use pressure_guide_data::repository::ReadingRepositoryTrait;
use tracing::warn;

use crate::entities::blood_pressure::BloodPressureCategory;
use crate::entities::guideline::Guideline;
use crate::services::classifier::categorize_blood_pressure;
use crate::thresholds::thresholds;

/// System health status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemStatus {
    /// All components are healthy
    Healthy,
    /// Some components are degraded but the system is functional
    Degraded,
    /// System is not functioning properly
    Unhealthy,
}

/// Component health status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Represents a health component with status and optional details
#[derive(Debug, Clone)]
pub struct HealthComponent {
    pub status: ComponentStatus,
    pub details: Option<String>,
}

impl HealthComponent {
    fn healthy() -> Self {
        Self { status: ComponentStatus::Healthy, details: None }
    }

    fn unhealthy(details: impl Into<String>) -> Self {
        Self { status: ComponentStatus::Unhealthy, details: Some(details.into()) }
    }
}

/// Represents the overall health of the system
#[derive(Debug, Clone)]
pub struct SystemHealth {
    pub status: SystemStatus,
    /// Map of component names to their health status
    pub components: HashMap<String, HealthComponent>,
}

/// Check that every guideline table still puts its own boundary values in the right category.
///
/// Returns the guidelines whose table failed the check.
pub fn check_engine_status() -> Vec<Guideline> {
    Guideline::all()
        .into_iter()
        .filter(|&guideline| {
            let table = thresholds(guideline);
            let anchors = [
                (table.crisis.systolic_at_least, 0, BloodPressureCategory::Crisis),
                (0, table.crisis.diastolic_at_least, BloodPressureCategory::Crisis),
                (table.stage_2.systolic_at_least, 0, BloodPressureCategory::Stage2),
                (table.stage_1.systolic_at_least, 0, BloodPressureCategory::Stage1),
                (0, 0, BloodPressureCategory::Normal),
            ];
            anchors
                .iter()
                .any(|&(systolic, diastolic, expected)| categorize_blood_pressure(systolic, diastolic, guideline) != expected)
        })
        .collect()
}

/// Get overall system health
pub async fn get_system_health<R>(repository: &R) -> SystemHealth
where
    R: ReadingRepositoryTrait + Sync + ?Sized,
{
    let storage = if repository.is_available().await {
        HealthComponent::healthy()
    } else {
        warn!("Reading storage is unavailable");
        HealthComponent::unhealthy("Reading storage is unavailable")
    };

    let failing = check_engine_status();
    let engine = if failing.is_empty() {
        HealthComponent::healthy()
    } else {
        warn!(?failing, "Threshold self-check failed");
        let names: Vec<&str> = failing.iter().map(|g| g.token()).collect();
        HealthComponent {
            status: ComponentStatus::Degraded,
            details: Some(format!("Threshold self-check failed for: {}", names.join(", "))),
        }
    };

    let overall_status = if storage.status == ComponentStatus::Unhealthy {
        SystemStatus::Unhealthy
    } else if engine.status != ComponentStatus::Healthy {
        SystemStatus::Degraded
    } else {
        SystemStatus::Healthy
    };

    SystemHealth {
        status: overall_status,
        components: vec![("storage".to_string(), storage), ("engine".to_string(), engine)]
            .into_iter()
            .collect(),
    }
}
