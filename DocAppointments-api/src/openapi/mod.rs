use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Configure Swagger UI endpoints
pub fn configure_swagger_routes() -> SwaggerUi {
    SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi())
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        crate::api::handlers::health::health_check,

        // Appointment endpoints
        crate::api::handlers::appointments::list_appointments,
        crate::api::handlers::appointments::get_appointment,
        crate::api::handlers::appointments::create_appointment,
        crate::api::handlers::appointments::update_appointment_status,

        // Prescription endpoints
        crate::api::handlers::prescriptions::create_prescription,
        crate::api::handlers::prescriptions::get_prescription_by_appointment
    ),
    components(
        schemas(
            // Domain entities
            doc_appointments_domain::entities::appointment::Appointment,
            doc_appointments_domain::entities::appointment::AppointmentStatus,
            doc_appointments_domain::entities::appointment::CreateAppointmentRequest,
            doc_appointments_domain::entities::appointment::UpdateStatusRequest,
            doc_appointments_domain::entities::prescription::Prescription,
            doc_appointments_domain::entities::prescription::CreatePrescriptionRequest,
            doc_appointments_domain::health::HealthStatus,

            // Health handlers
            crate::api::handlers::health::HealthResponse,

            // Response envelopes
            crate::entities::AppointmentResponse,
            crate::entities::AppointmentListResponse,
            crate::entities::PrescriptionResponse,
            crate::entities::HealthCheckResponse,
            crate::entities::ErrorResponse
        )
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "appointments", description = "Appointment booking and status endpoints"),
        (name = "prescriptions", description = "Prescription endpoints")
    ),
    info(
        title = "Doctor Appointment API",
        version = "0.1.0",
        description = "API for booking doctor appointments and recording prescriptions",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_doc_generation() {
        let openapi = ApiDoc::openapi();

        assert_eq!(openapi.info.title, "Doctor Appointment API");

        let tags = openapi.tags.as_ref().unwrap();
        assert!(tags.iter().any(|tag| tag.name == "appointments"));
        assert!(tags.iter().any(|tag| tag.name == "prescriptions"));

        for path in [
            "/health",
            "/api/appointments",
            "/api/appointments/{id}",
            "/api/appointments/{id}/status",
            "/api/prescriptions",
            "/api/prescriptions/appointment/{appointmentId}",
        ] {
            assert!(openapi.paths.paths.contains_key(path), "missing path {}", path);
        }
    }

    #[test]
    fn test_schemas_are_registered() {
        let openapi = ApiDoc::openapi();
        let schemas = &openapi.components.as_ref().unwrap().schemas;

        assert!(schemas.contains_key("Appointment"));
        assert!(schemas.contains_key("Prescription"));
        assert!(schemas.contains_key("HealthResponse"));
    }

    #[test]
    fn test_responses_reference_the_envelope() {
        let openapi = ApiDoc::openapi();
        let schemas = &openapi.components.as_ref().unwrap().schemas;

        for name in [
            "AppointmentResponse",
            "AppointmentListResponse",
            "PrescriptionResponse",
            "HealthCheckResponse",
            "ErrorResponse",
        ] {
            assert!(schemas.contains_key(name), "missing schema {}", name);
        }

        let doc = serde_json::to_value(&openapi).unwrap();
        let get_one = &doc["paths"]["/api/appointments/{id}"]["get"]["responses"];
        assert_eq!(
            get_one["200"]["content"]["application/json"]["schema"]["$ref"],
            "#/components/schemas/AppointmentResponse"
        );
        assert_eq!(
            get_one["404"]["content"]["application/json"]["schema"]["$ref"],
            "#/components/schemas/ErrorResponse"
        );
    }
}
