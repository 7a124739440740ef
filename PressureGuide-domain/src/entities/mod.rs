// Domain entities and value objects
pub mod blood_pressure;
pub mod guideline;
pub mod requests;

#[cfg(feature = "with-data")]
pub mod conversions;

// Re-export common types for easier imports
pub use blood_pressure::{Band, BloodPressureCategory, BloodPressureReading};
pub use guideline::{Guideline, GuidelineError, GuidelineSelection};
pub use requests::RecordReadingRequest;
