// Storage models, serialized in camelCase to match the JSON document on disk
pub mod appointment;
pub mod document;
pub mod prescription;

pub use appointment::{Appointment, AppointmentFilters, AppointmentStatus, NewAppointment};
pub use document::Document;
pub use prescription::{NewPrescription, Prescription};
