use std::sync::Arc;

use axum::extract::FromRef;

use pressure_guide_data::repository::{ReadingRepository, ReadingRepositoryTrait};
use pressure_guide_domain::services::{InsightService, InsightServiceTrait};

use crate::config::AppConfig;

/// Service type for dependency injection
pub type InsightServiceHandle = Arc<dyn InsightServiceTrait + Send + Sync>;

/// Storage handle used by the health check
pub type StorageHandle = Arc<dyn ReadingRepositoryTrait + Send + Sync>;

/// Shared state of every handler; each field can be extracted on its own
#[derive(Clone, FromRef)]
pub struct AppState {
    pub service: InsightServiceHandle,
    pub storage: StorageHandle,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// State backed by a fresh in-memory repository
    pub fn new(config: AppConfig) -> Self {
        Self::with_repository(ReadingRepository::new(), config)
    }

    /// State over a caller-provided repository; the service and health check share it
    pub fn with_repository<R>(repository: R, config: AppConfig) -> Self
    where
        R: ReadingRepositoryTrait + Clone + Send + Sync + 'static,
    {
        Self {
            service: Arc::new(InsightService::new(repository.clone())),
            storage: Arc::new(repository),
            config: Arc::new(config),
        }
    }
}
