use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue},
    routing::{get, patch, post},
    Router,
};
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tracing::debug;

use doc_appointments_data::repository::DocumentStore;
use doc_appointments_domain::health::{create_health_service, HealthServiceTrait};
use doc_appointments_domain::services::{
    create_appointment_service, create_prescription_service, AppointmentServiceTrait, PrescriptionServiceTrait,
};

use crate::api::errors::MAX_BODY_BYTES;
use crate::api::handlers::{appointments, health, prescriptions, system};
use crate::openapi::configure_swagger_routes;

/// Services shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub appointments: Arc<dyn AppointmentServiceTrait + Send + Sync>,
    pub prescriptions: Arc<dyn PrescriptionServiceTrait + Send + Sync>,
    pub health: Arc<dyn HealthServiceTrait>,
    /// Reported by the health endpoint
    pub environment: String,
}

impl AppState {
    /// Build every service over one document store
    pub fn new(store: Arc<dyn DocumentStore>, environment: impl Into<String>) -> Self {
        Self {
            appointments: Arc::new(create_appointment_service(store.clone())),
            prescriptions: Arc::new(create_prescription_service(store.clone())),
            health: create_health_service(store),
            environment: environment.into(),
        }
    }
}

/// Create the application router
pub fn create_app(state: AppState) -> Router {
    debug!("Creating application router");

    let api_routes = Router::new()
        .route(
            "/api/appointments",
            get(appointments::list_appointments).post(appointments::create_appointment),
        )
        .route("/api/appointments/:id", get(appointments::get_appointment))
        .route(
            "/api/appointments/:id/status",
            patch(appointments::update_appointment_status),
        )
        .route("/api/prescriptions", post(prescriptions::create_prescription))
        .route(
            "/api/prescriptions/appointment/:appointment_id",
            get(prescriptions::get_prescription_by_appointment),
        );

    debug!("API routes configured");

    let app = Router::new()
        .route("/", get(system::welcome))
        .route("/health", get(health::health_check))
        .merge(api_routes)
        .method_not_allowed_fallback(system::method_not_allowed)
        .with_state(state);

    // Configure the Swagger UI using the helper function
    let app = app.merge(configure_swagger_routes());
    debug!("Swagger UI merged");

    // Initialize health check service startup time
    health::initialize_server_start_time();

    app.fallback(system::route_not_found)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("SAMEORIGIN"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
