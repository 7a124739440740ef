// PressureGuide Domain
// This crate contains guideline classification and the reading analytics engine

// Domain entities
pub mod entities;

// Guideline threshold tables
pub mod thresholds;

// Services that implement business logic
pub mod services;

// Health checks and system status
#[cfg(feature = "with-data")]
pub mod health;

// Testing utilities - only available with mock feature
#[cfg(feature = "mock")]
pub mod testing;
