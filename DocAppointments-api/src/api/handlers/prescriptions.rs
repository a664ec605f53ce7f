use axum::{
    extract::{rejection::JsonRejection, Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::{info, instrument};

use doc_appointments_domain::entities::prescription::CreatePrescriptionRequest;

use crate::api::errors::ApiError;
use crate::api::routes::AppState;
use crate::entities::ApiResponse;

/// Write the prescription for an appointment and complete it
#[utoipa::path(
    post,
    path = "/api/prescriptions",
    request_body = CreatePrescriptionRequest,
    responses(
        (status = 201, description = "Prescription written, appointment completed", body = crate::entities::PrescriptionResponse),
        (status = 400, description = "appointmentId, medicineName or dosage missing", body = crate::entities::ErrorResponse),
        (status = 404, description = "Appointment not found", body = crate::entities::ErrorResponse),
        (status = 409, description = "Prescription already exists for this appointment", body = crate::entities::ErrorResponse),
        (status = 500, description = "Data store failure", body = crate::entities::ErrorResponse),
    ),
    tag = "prescriptions"
)]
#[instrument(skip(state, payload))]
pub async fn create_prescription(
    State(state): State<AppState>,
    payload: Result<Json<CreatePrescriptionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;

    let prescription = state
        .prescriptions
        .create_prescription(request)
        .await
        .map_err(|e| ApiError::from_service(e, "Failed to create prescription"))?;

    info!(
        "Prescription {} written for appointment {}",
        prescription.id, prescription.appointment_id
    );
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(prescription, "Prescription created successfully")),
    ))
}

/// Get the prescription written for an appointment
#[utoipa::path(
    get,
    path = "/api/prescriptions/appointment/{appointmentId}",
    params(
        ("appointmentId" = String, Path, description = "Appointment ID")
    ),
    responses(
        (status = 200, description = "Prescription found", body = crate::entities::PrescriptionResponse),
        (status = 404, description = "Prescription not found for this appointment", body = crate::entities::ErrorResponse),
        (status = 500, description = "Data store failure", body = crate::entities::ErrorResponse),
    ),
    tag = "prescriptions"
)]
#[instrument(skip(state))]
pub async fn get_prescription_by_appointment(
    State(state): State<AppState>,
    Path(appointment_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let prescription = state
        .prescriptions
        .get_by_appointment_id(&appointment_id)
        .await
        .map_err(|e| ApiError::from_service(e, "Failed to fetch prescription"))?
        .ok_or_else(|| ApiError::NotFound("Prescription not found for this appointment".to_string()))?;

    Ok(Json(ApiResponse::ok(prescription, "Prescription retrieved successfully")))
}
