pub mod appointment;
pub mod errors;
pub mod prescription;
pub mod validation;

// Domain services
// This module contains business logic implementations.

// Re-export service traits and factory functions
pub use appointment::{create_appointment_service, AppointmentServiceTrait};
pub use errors::ServiceError;
pub use prescription::{create_prescription_service, PrescriptionServiceTrait};
