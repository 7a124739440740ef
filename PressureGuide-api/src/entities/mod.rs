// Public entities for the PressureGuide API
// This module contains data structures that are shared across the application boundary

// Query parameters and error bodies
pub mod common;

// Request and response bodies of the classification and insight endpoints
pub mod insights;
