// Public entities for the appointments API
// Records themselves are the domain entities; this module holds the wire wrappers

// Response envelope shared by every endpoint
pub mod common;

pub use common::{
    ApiResponse, AppointmentListResponse, AppointmentResponse, ErrorResponse, HealthCheckResponse,
    PrescriptionResponse,
};
