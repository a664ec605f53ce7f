// DocAppointments Domain
// This crate contains the booking and prescription rules for the appointments API

// Services that implement business logic
pub mod services;

// Domain entities
pub mod entities;

// Data store health reporting
pub mod health;

// Re-export the storage seam so callers can build services without naming the data crate
pub use doc_appointments_data::repository::{DocumentStore, InMemoryDocumentStore, JsonFileStore};

// Testing utilities - only available with mock feature
#[cfg(feature = "mock")]
pub mod testing;
