pub mod appointments;
pub mod health;
pub mod prescriptions;
pub mod system;

// Re-export handlers for easier imports
pub use appointments::{create_appointment, get_appointment, list_appointments, update_appointment_status};
pub use health::health_check;
pub use prescriptions::{create_prescription, get_prescription_by_appointment};
pub use system::{method_not_allowed, route_not_found, welcome};
