// Doc Appointments Data
// This crate owns the persisted document and the repositories built on it

// Repository implementations for data access
pub mod repository;

// Data storage models
pub mod models;
