pub mod error;
pub mod guidelines;
pub mod health;
pub mod insights;
pub mod readings;

// Tests module
#[cfg(test)]
mod tests;

// Re-export handlers for easier imports
pub use error::ErrorResponse;
pub use guidelines::{classify_reading, list_guidelines};
pub use health::health_check;
pub use insights::{get_circadian, get_correlations, get_morning_surge, get_report, get_time_in_range};
pub use readings::{get_reading, list_readings, record_reading};
