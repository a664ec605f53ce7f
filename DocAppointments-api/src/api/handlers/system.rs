use axum::{
    http::{Method, Uri},
    Json,
};
use serde_json::{json, Value};
use tracing::debug;

use crate::api::errors::ApiError;
use crate::entities::ApiResponse;

/// Welcome document listing the top-level endpoints
pub async fn welcome() -> Json<ApiResponse<Value>> {
    debug!("Welcome endpoint called");

    Json(ApiResponse::ok(
        json!({
            "message": "Doctor Appointment API",
            "version": env!("CARGO_PKG_VERSION"),
            "endpoints": {
                "appointments": "/api/appointments",
                "prescriptions": "/api/prescriptions",
                "health": "/health",
                "docs": "/api-docs"
            }
        }),
        "Welcome to Doctor Appointment API",
    ))
}

/// Fallback for paths no route matches
pub async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("Route {} not found", uri))
}

/// Fallback for known paths called with an unsupported method
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed(format!("Method {} not allowed for {}", method, uri.path()))
}
