use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::entities::blood_pressure::BloodPressureReading;
use crate::entities::conversions;
use crate::entities::guideline::Guideline;
use crate::entities::requests::RecordReadingRequest;
use crate::services::circadian::{circadian_breakdown, CircadianBreakdown, LocalClock};
use crate::services::correlation::{correlate_tags, TagCorrelation};
use crate::services::report::{aggregate_report, ReportStats};
use crate::services::surge::{detect_morning_surge, MorningSurge};
use crate::services::time_in_range::{time_in_range, TimeInRange};
use crate::services::validation::ValidationIssue;
use pressure_guide_data::models::ReadingSnapshot;
use pressure_guide_data::repository::{ReadingFilter, ReadingRepository, ReadingRepositoryTrait, RepositoryError};

/// Insight service errors
#[derive(Debug, Error)]
pub enum InsightServiceError {
    /// Input rejected by reading validation
    #[error("Validation failed with {} issue(s)", .0.len())]
    Validation(Vec<ValidationIssue>),

    /// Not found error
    #[error("Reading not found: {0}")]
    NotFound(String),

    /// Repository error
    #[error("Repository error: {0}")]
    Repository(String),
}

/// Trait for insight service operations
#[async_trait]
pub trait InsightServiceTrait {
    /// Validate and store a new reading
    async fn record_reading(&self, request: RecordReadingRequest) -> Result<BloodPressureReading, InsightServiceError>;

    /// Readings inside the filter window, oldest first
    async fn get_readings(&self, filter: ReadingFilter) -> Result<Vec<BloodPressureReading>, InsightServiceError>;

    /// Get a reading by ID
    async fn get_reading_by_id(&self, id: &str) -> Result<BloodPressureReading, InsightServiceError>;

    /// Summary statistics over the filter window
    async fn report(&self, guideline: Guideline, filter: ReadingFilter) -> Result<ReportStats, InsightServiceError>;

    /// Category distribution overall and per day part
    async fn time_in_range(
        &self,
        guideline: Guideline,
        filter: ReadingFilter,
        clock: LocalClock,
    ) -> Result<TimeInRange, InsightServiceError>;

    /// Readings grouped by day part with their averages
    async fn circadian(&self, filter: ReadingFilter, clock: LocalClock) -> Result<CircadianBreakdown, InsightServiceError>;

    /// Morning surge check for the local day containing `now`
    async fn morning_surge(&self, now: i64, clock: LocalClock) -> Result<MorningSurge, InsightServiceError>;

    /// Tag correlations over the filter window
    async fn correlations(&self, filter: ReadingFilter) -> Result<Vec<TagCorrelation>, InsightServiceError>;
}

/// Runs the analytics engine over repository snapshots
pub struct InsightService<R: ReadingRepositoryTrait> {
    repository: R,
}

impl<R: ReadingRepositoryTrait> InsightService<R> {
    /// Create a new insight service
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Map repository errors to service errors
    fn map_repo_error(&self, err: RepositoryError) -> InsightServiceError {
        match err {
            RepositoryError::NotFound(msg) => InsightServiceError::NotFound(msg),
            RepositoryError::Validation(msg) => {
                InsightServiceError::Repository(format!("storage rejected reading: {}", msg))
            }
            _ => {
                error!("Repository failure: {}", err);
                InsightServiceError::Repository(err.to_string())
            }
        }
    }

    async fn snapshot(&self, filter: ReadingFilter) -> Result<ReadingSnapshot, InsightServiceError> {
        self.repository.snapshot(filter).await.map_err(|e| self.map_repo_error(e))
    }

    async fn load_readings(&self, filter: ReadingFilter) -> Result<Vec<BloodPressureReading>, InsightServiceError> {
        let snapshot = self.snapshot(filter).await?;
        Ok(to_domain_readings(&snapshot))
    }
}

fn to_domain_readings(snapshot: &ReadingSnapshot) -> Vec<BloodPressureReading> {
    snapshot
        .readings
        .iter()
        .cloned()
        .map(conversions::convert_to_domain_reading)
        .collect()
}

#[async_trait]
impl<R: ReadingRepositoryTrait + Send + Sync> InsightServiceTrait for InsightService<R> {
    async fn record_reading(&self, request: RecordReadingRequest) -> Result<BloodPressureReading, InsightServiceError> {
        let validation = request.validate();
        let data_request = match conversions::convert_to_data_create_request(&request) {
            Some(data_request) if validation.is_valid => data_request,
            _ => {
                warn!(issues = validation.errors.len(), "Rejected invalid reading");
                return Err(InsightServiceError::Validation(validation.errors));
            }
        };

        let stored = self.repository.create(data_request).await.map_err(|e| self.map_repo_error(e))?;
        debug!("Recorded reading {}", stored.id);

        Ok(conversions::convert_to_domain_reading(stored))
    }

    async fn get_readings(&self, filter: ReadingFilter) -> Result<Vec<BloodPressureReading>, InsightServiceError> {
        self.load_readings(filter).await
    }

    async fn get_reading_by_id(&self, id: &str) -> Result<BloodPressureReading, InsightServiceError> {
        let stored = self
            .repository
            .get_by_id(id)
            .await
            .map_err(|e| self.map_repo_error(e))?
            .ok_or_else(|| InsightServiceError::NotFound(format!("Reading with ID {} not found", id)))?;

        Ok(conversions::convert_to_domain_reading(stored))
    }

    async fn report(&self, guideline: Guideline, filter: ReadingFilter) -> Result<ReportStats, InsightServiceError> {
        let readings = self.load_readings(filter).await?;
        Ok(aggregate_report(&readings, guideline))
    }

    async fn time_in_range(
        &self,
        guideline: Guideline,
        filter: ReadingFilter,
        clock: LocalClock,
    ) -> Result<TimeInRange, InsightServiceError> {
        let readings = self.load_readings(filter).await?;
        Ok(time_in_range(&readings, guideline, &clock))
    }

    async fn circadian(&self, filter: ReadingFilter, clock: LocalClock) -> Result<CircadianBreakdown, InsightServiceError> {
        let readings = self.load_readings(filter).await?;
        Ok(circadian_breakdown(&readings, &clock))
    }

    async fn morning_surge(&self, now: i64, clock: LocalClock) -> Result<MorningSurge, InsightServiceError> {
        let readings = self.load_readings(ReadingFilter::default()).await?;
        Ok(detect_morning_surge(&readings, now, &clock))
    }

    async fn correlations(&self, filter: ReadingFilter) -> Result<Vec<TagCorrelation>, InsightServiceError> {
        // Readings and tags must come from the same snapshot
        let snapshot = self.snapshot(filter).await?;
        let readings = to_domain_readings(&snapshot);
        Ok(correlate_tags(&readings, &snapshot.tags_by_reading_id()))
    }
}

/// Create a default insight service using the in-memory repository from the data layer
pub fn create_default_insight_service() -> impl InsightServiceTrait + Send + Sync {
    InsightService::new(ReadingRepository::new())
}
