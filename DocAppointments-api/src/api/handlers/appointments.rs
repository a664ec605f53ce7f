use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Json, Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::{info, instrument};
use utoipa::IntoParams;

use doc_appointments_domain::entities::appointment::{
    AppointmentQuery, CreateAppointmentRequest, UpdateStatusRequest,
};

use crate::api::errors::ApiError;
use crate::api::routes::AppState;
use crate::entities::ApiResponse;

/// Query parameters for listing appointments
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct AppointmentListParams {
    /// Only appointments in this status (scheduled, completed, cancelled)
    pub status: Option<String>,

    /// Only appointments with this doctor
    pub doctor_id: Option<String>,

    /// Only appointments on this server-local day (YYYY-MM-DD)
    pub date: Option<String>,
}

impl From<AppointmentListParams> for AppointmentQuery {
    fn from(params: AppointmentListParams) -> Self {
        AppointmentQuery {
            status: params.status,
            doctor_id: params.doctor_id,
            date: params.date,
        }
    }
}

/// List appointments, earliest first
#[utoipa::path(
    get,
    path = "/api/appointments",
    params(AppointmentListParams),
    responses(
        (status = 200, description = "Appointments matching every supplied filter", body = crate::entities::AppointmentListResponse),
        (status = 400, description = "Unknown status or malformed date filter", body = crate::entities::ErrorResponse),
        (status = 500, description = "Data store failure", body = crate::entities::ErrorResponse),
    ),
    tag = "appointments"
)]
#[instrument(skip(state, query))]
pub async fn list_appointments(
    State(state): State<AppState>,
    query: Result<Query<AppointmentListParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(params) = query?;

    let appointments = state
        .appointments
        .list_appointments(params.into())
        .await
        .map_err(|e| ApiError::from_service(e, "Failed to fetch appointments"))?;

    let message = format!("Retrieved {} appointments", appointments.len());
    Ok(Json(ApiResponse::ok(appointments, message)))
}

/// Get a single appointment by ID
#[utoipa::path(
    get,
    path = "/api/appointments/{id}",
    params(
        ("id" = String, Path, description = "Appointment ID")
    ),
    responses(
        (status = 200, description = "Appointment found", body = crate::entities::AppointmentResponse),
        (status = 404, description = "Appointment not found", body = crate::entities::ErrorResponse),
        (status = 500, description = "Data store failure", body = crate::entities::ErrorResponse),
    ),
    tag = "appointments"
)]
#[instrument(skip(state))]
pub async fn get_appointment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let appointment = state
        .appointments
        .get_appointment(&id)
        .await
        .map_err(|e| ApiError::from_service(e, "Failed to fetch appointment"))?
        .ok_or_else(|| ApiError::NotFound("Appointment not found".to_string()))?;

    Ok(Json(ApiResponse::ok(appointment, "Appointment retrieved successfully")))
}

/// Book a new appointment
#[utoipa::path(
    post,
    path = "/api/appointments",
    request_body = CreateAppointmentRequest,
    responses(
        (status = 201, description = "Appointment booked", body = crate::entities::AppointmentResponse),
        (status = 400, description = "Missing fields, age out of range, or time not in the future", body = crate::entities::ErrorResponse),
        (status = 500, description = "Data store failure", body = crate::entities::ErrorResponse),
    ),
    tag = "appointments"
)]
#[instrument(skip(state, payload))]
pub async fn create_appointment(
    State(state): State<AppState>,
    payload: Result<Json<CreateAppointmentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;

    let appointment = state
        .appointments
        .create_appointment(request)
        .await
        .map_err(|e| ApiError::from_service(e, "Failed to create appointment"))?;

    info!("Booked appointment {} with doctor {}", appointment.id, appointment.doctor_id);
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(appointment, "Appointment created successfully")),
    ))
}

/// Change the status of an appointment
#[utoipa::path(
    patch,
    path = "/api/appointments/{id}/status",
    params(
        ("id" = String, Path, description = "Appointment ID")
    ),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = crate::entities::AppointmentResponse),
        (status = 400, description = "Status missing or not one of scheduled, completed, cancelled", body = crate::entities::ErrorResponse),
        (status = 404, description = "Appointment not found", body = crate::entities::ErrorResponse),
        (status = 500, description = "Data store failure", body = crate::entities::ErrorResponse),
    ),
    tag = "appointments"
)]
#[instrument(skip(state, payload))]
pub async fn update_appointment_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;

    let appointment = state
        .appointments
        .update_status(&id, request)
        .await
        .map_err(|e| ApiError::from_service(e, "Failed to update appointment status"))?
        .ok_or_else(|| ApiError::NotFound("Appointment not found".to_string()))?;

    info!("Appointment {} is now {}", appointment.id, appointment.status);
    Ok(Json(ApiResponse::ok(appointment, "Appointment status updated successfully")))
}
