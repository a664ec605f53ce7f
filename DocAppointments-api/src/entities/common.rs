use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use doc_appointments_domain::entities::{Appointment, Prescription};

use crate::api::handlers::health::HealthResponse;

/// Envelope wrapping every API result.
///
/// Absent fields are omitted from the JSON rather than sent as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[aliases(
    AppointmentResponse = ApiResponse<Appointment>,
    AppointmentListResponse = ApiResponse<Vec<Appointment>>,
    PrescriptionResponse = ApiResponse<Prescription>,
    HealthCheckResponse = ApiResponse<HealthResponse>,
    ErrorResponse = ApiResponse<String>
)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,

    /// Payload of a successful request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Human-readable summary of a successful request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Reason a request failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Successful result carrying data and a message
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
            error: None,
        }
    }

    /// Failed result carrying only the error text
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: None,
            error: Some(error.into()),
        }
    }
}
