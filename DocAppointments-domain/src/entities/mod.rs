// Domain entities and value objects
pub mod appointment;
pub mod conversions;
pub mod prescription;

// Re-export common types for easier imports
pub use appointment::{
    Appointment, AppointmentQuery, AppointmentStatus, CreateAppointmentRequest, UpdateStatusRequest,
};
pub use prescription::{CreatePrescriptionRequest, Prescription};
