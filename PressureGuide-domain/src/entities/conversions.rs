use pressure_guide_data::models::reading::{CreateReadingRequest, StoredReading};

use crate::entities::blood_pressure::BloodPressureReading;
use crate::entities::requests::RecordReadingRequest;

/// Conversion functions between domain entities and data models
/// These functions follow the pattern convert_to_[target_layer]_[model_name]

/// Convert from data model to domain entity for a reading; tags are not part of the reading
pub fn convert_to_domain_reading(stored: StoredReading) -> BloodPressureReading {
    BloodPressureReading {
        id: stored.id,
        systolic: stored.systolic,
        diastolic: stored.diastolic,
        pulse: stored.pulse,
        timestamp: stored.timestamp,
        location: stored.location,
        posture: stored.posture,
        notes: stored.notes,
        weight_kg: stored.weight_kg,
    }
}

/// Convert a record request to the data layer's create request.
///
/// Returns `None` when either pressure value is missing; callers validate first.
pub fn convert_to_data_create_request(request: &RecordReadingRequest) -> Option<CreateReadingRequest> {
    Some(CreateReadingRequest {
        systolic: request.systolic?,
        diastolic: request.diastolic?,
        pulse: request.pulse,
        timestamp: request.timestamp,
        location: request.location.clone(),
        posture: request.posture.clone(),
        notes: request.notes.clone(),
        weight_kg: request.weight_kg,
        tags: request.tags.clone(),
    })
}
