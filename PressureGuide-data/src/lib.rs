// PressureGuide Data
// This crate stores readings and their lifestyle tags for the analytics engine

// Storage models
pub mod models;

// Repository implementations for data access
pub mod repository;
