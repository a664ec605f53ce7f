use std::time::Instant;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use utoipa::ToSchema;

use doc_appointments_domain::health::{HealthReport, HealthStatus};

use crate::api::routes::AppState;
use crate::entities::ApiResponse;

/// Health check response with process metadata
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// `healthy` when the data file could be read, `degraded` otherwise
    pub status: HealthStatus,
    /// Number of stored appointments
    pub appointment_count: usize,
    /// Number of stored prescriptions
    pub prescription_count: usize,
    /// When the response was generated
    pub timestamp: DateTime<Utc>,
    /// Seconds since the server started
    pub uptime: u64,
    /// Deployment environment (`APP_ENV`)
    pub environment: String,
    /// Application version from the Cargo manifest
    pub version: String,
}

impl HealthResponse {
    fn new(report: HealthReport, environment: &str) -> Self {
        Self {
            status: report.status,
            appointment_count: report.appointment_count,
            prescription_count: report.prescription_count,
            timestamp: Utc::now(),
            uptime: uptime_seconds(),
            environment: environment.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// Track the time when the server started
static SERVER_START_TIME: OnceCell<Instant> = OnceCell::new();

/// Record the server start time. Later calls keep the first value.
pub fn initialize_server_start_time() {
    SERVER_START_TIME.get_or_init(Instant::now);
}

fn uptime_seconds() -> u64 {
    SERVER_START_TIME
        .get()
        .map(|start| start.elapsed().as_secs())
        .unwrap_or(0)
}

/// Health check endpoint reporting data store state
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Data store readable", body = crate::entities::HealthCheckResponse),
        (status = 503, description = "Data store unreadable", body = crate::entities::HealthCheckResponse)
    ),
    tag = "health"
)]
#[instrument(skip(state))]
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    info!("Health check requested");

    let report = state.health.check().await;
    let healthy = report.is_healthy();
    let response = HealthResponse::new(report, &state.environment);

    if healthy {
        (
            StatusCode::OK,
            Json(ApiResponse::ok(response, "Server is healthy")),
        )
    } else {
        warn!("Reporting degraded health");
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiResponse {
                success: false,
                data: Some(response),
                message: None,
                error: Some("Data store is unavailable".to_string()),
            }),
        )
    }
}
