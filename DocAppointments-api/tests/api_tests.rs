use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{Duration, Local, TimeZone, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;

use doc_appointments_api::api::{create_app, AppState};
use doc_appointments_data::models::{AppointmentStatus, Document};
use doc_appointments_data::repository::JsonFileStore;
use doc_appointments_domain::testing::{appointment_fixture, booking_request, prescription_request, TestServices};

fn app_for(services: &TestServices) -> Router {
    create_app(AppState {
        appointments: services.appointments.clone(),
        prescriptions: services.prescriptions.clone(),
        health: services.health.clone(),
        environment: "test".to_string(),
    })
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_welcome_lists_endpoints() {
    let app = app_for(&TestServices::new());

    let (status, body) = send(&app, Method::GET, "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["endpoints"]["appointments"], "/api/appointments");
    assert_eq!(body["message"], "Welcome to Doctor Appointment API");
}

#[tokio::test]
async fn test_unknown_route_is_enveloped_404() {
    let app = app_for(&TestServices::new());

    let (status, body) = send(&app, Method::GET, "/api/doctors", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "success": false, "error": "Route /api/doctors not found" }));
}

#[tokio::test]
async fn test_health_reports_counts() {
    let mut doc = Document::empty();
    doc.appointments.push(appointment_fixture(
        "apt_1",
        "doc_1",
        AppointmentStatus::Scheduled,
        Utc::now() + Duration::days(1),
    ));
    let app = app_for(&TestServices::with_document(doc));

    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "healthy");
    assert_eq!(body["data"]["appointmentCount"], 1);
    assert_eq!(body["data"]["prescriptionCount"], 0);
    assert_eq!(body["data"]["environment"], "test");
    assert!(body["data"]["uptime"].is_u64());
    assert!(body["data"]["timestamp"].is_string());
}

#[tokio::test]
async fn test_health_is_degraded_when_store_unreadable() {
    // A directory cannot be read as the data file
    let store = Arc::new(JsonFileStore::new(std::env::temp_dir()));
    let app = create_app(AppState::new(store, "test"));

    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["success"], false);
    assert_eq!(body["data"]["status"], "degraded");
    assert_eq!(body["data"]["appointmentCount"], 0);
}

#[tokio::test]
async fn test_create_appointment_returns_201() {
    let services = TestServices::new();
    let app = app_for(&services);
    let request = serde_json::to_value(booking_request("Jane Doe", "doc_1")).unwrap();

    let (status, body) = send(&app, Method::POST, "/api/appointments", Some(request)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Appointment created successfully");
    assert_eq!(body["data"]["status"], "scheduled");
    assert_eq!(body["data"]["patientName"], "Jane Doe");
    assert!(body["data"]["id"].as_str().unwrap().starts_with("apt_"));
    assert!(body["data"].get("prescription").is_none());
    assert_eq!(services.store.save_count(), 1);
}

#[tokio::test]
async fn test_create_appointment_validation_errors_are_400() {
    let services = TestServices::new();
    let app = app_for(&services);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/appointments",
        Some(json!({ "patientName": "Jane Doe", "age": 30 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(
        body["error"],
        "Missing required fields: symptoms, appointmentTime, doctorId"
    );

    let mut too_old = serde_json::to_value(booking_request("Jane Doe", "doc_1")).unwrap();
    too_old["age"] = json!(151);
    let (status, body) = send(&app, Method::POST, "/api/appointments", Some(too_old)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Age must be between 0 and 150");

    let mut past = serde_json::to_value(booking_request("Jane Doe", "doc_1")).unwrap();
    past["appointmentTime"] = json!((Utc::now() - Duration::hours(1)).to_rfc3339());
    let (status, body) = send(&app, Method::POST, "/api/appointments", Some(past)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Appointment time must be in the future");

    assert_eq!(services.store.save_count(), 0);
}

#[tokio::test]
async fn test_malformed_json_is_400_envelope() {
    let app = app_for(&TestServices::new());

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/appointments")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"patientName\": "))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON body"));
}

#[tokio::test]
async fn test_list_filters_and_sorting() {
    let day = Local.with_ymd_and_hms(2031, 3, 10, 9, 0, 0).unwrap().with_timezone(&Utc);
    let mut doc = Document::empty();
    doc.appointments = vec![
        appointment_fixture("apt_c", "doc_1", AppointmentStatus::Scheduled, day + Duration::hours(4)),
        appointment_fixture("apt_a", "doc_2", AppointmentStatus::Scheduled, day),
        appointment_fixture("apt_b", "doc_1", AppointmentStatus::Cancelled, day + Duration::hours(1)),
        appointment_fixture("apt_d", "doc_1", AppointmentStatus::Scheduled, day + Duration::days(2)),
    ];
    let app = app_for(&TestServices::with_document(doc));

    let (status, body) = send(&app, Method::GET, "/api/appointments", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Retrieved 4 appointments");
    let ids: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["apt_a", "apt_b", "apt_c", "apt_d"]);

    let (_, body) = send(
        &app,
        Method::GET,
        "/api/appointments?status=scheduled&doctorId=doc_1&date=2031-03-10",
        None,
    )
    .await;
    assert_eq!(body["message"], "Retrieved 1 appointments");
    assert_eq!(body["data"][0]["id"], "apt_c");

    let (status, body) = send(&app, Method::GET, "/api/appointments?status=archived", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Status must be one of: scheduled, completed, cancelled");
}

#[tokio::test]
async fn test_get_appointment_by_id() {
    let mut doc = Document::empty();
    doc.appointments.push(appointment_fixture(
        "apt_1",
        "doc_1",
        AppointmentStatus::Scheduled,
        Utc::now() + Duration::days(1),
    ));
    let app = app_for(&TestServices::with_document(doc));

    let (status, body) = send(&app, Method::GET, "/api/appointments/apt_1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], "apt_1");
    assert_eq!(body["message"], "Appointment retrieved successfully");

    let (status, body) = send(&app, Method::GET, "/api/appointments/apt_missing", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "success": false, "error": "Appointment not found" }));
}

#[tokio::test]
async fn test_update_status() {
    let mut doc = Document::empty();
    doc.appointments.push(appointment_fixture(
        "apt_1",
        "doc_1",
        AppointmentStatus::Scheduled,
        Utc::now() + Duration::days(1),
    ));
    let services = TestServices::with_document(doc);
    let app = app_for(&services);

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/api/appointments/apt_1/status",
        Some(json!({ "status": "cancelled" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "cancelled");

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/api/appointments/apt_1/status",
        Some(json!({ "status": "archived" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Status must be one of: scheduled, completed, cancelled");

    let (status, _) = send(
        &app,
        Method::PATCH,
        "/api/appointments/apt_missing/status",
        Some(json!({ "status": "completed" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    assert_eq!(services.store.save_count(), 1);
}

#[tokio::test]
async fn test_booking_to_prescription_flow() {
    let services = TestServices::new();
    let app = app_for(&services);

    let booking = serde_json::to_value(booking_request("John Smith", "doc_7")).unwrap();
    let (_, created) = send(&app, Method::POST, "/api/appointments", Some(booking)).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let (status, _) = send(&app, Method::GET, &format!("/api/prescriptions/appointment/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let prescription = serde_json::to_value(prescription_request(&id, "Amoxicillin")).unwrap();
    let (status, body) = send(&app, Method::POST, "/api/prescriptions", Some(prescription)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Prescription created successfully");
    assert_eq!(body["data"]["doctorId"], "doc_7");
    assert!(body["data"]["id"].as_str().unwrap().starts_with("pres_"));
    let written = body["data"].clone();

    let (_, body) = send(&app, Method::GET, &format!("/api/appointments/{}", id), None).await;
    assert_eq!(body["data"]["status"], "completed");
    assert_eq!(body["data"]["prescription"], written);

    let duplicate = serde_json::to_value(prescription_request(&id, "Ibuprofen")).unwrap();
    let (status, body) = send(&app, Method::POST, "/api/prescriptions", Some(duplicate)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Prescription already exists for this appointment");

    let (status, body) = send(&app, Method::GET, &format!("/api/prescriptions/appointment/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], written);

    let stored = services.store.snapshot().unwrap();
    assert_eq!(stored.prescriptions.len(), 1);
}

#[tokio::test]
async fn test_prescription_for_unknown_appointment_is_404() {
    let app = app_for(&TestServices::new());

    let request = serde_json::to_value(prescription_request("apt_missing", "Amoxicillin")).unwrap();
    let (status, body) = send(&app, Method::POST, "/api/prescriptions", Some(request)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Appointment not found");
}

#[tokio::test]
async fn test_storage_failure_is_generic_500() {
    let services = TestServices::new();
    services.store.fail_writes(true);
    let app = app_for(&services);

    let booking = serde_json::to_value(booking_request("Jane Doe", "doc_1")).unwrap();
    let (status, body) = send(&app, Method::POST, "/api/appointments", Some(booking)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "success": false, "error": "Failed to create appointment" }));
}

#[tokio::test]
async fn test_file_backed_round_trip() {
    let path = std::env::temp_dir()
        .join(format!("api_round_trip_{}", uuid::Uuid::new_v4()))
        .join("appointments.json");
    let store = Arc::new(JsonFileStore::new(path.clone()));
    let app = create_app(AppState::new(store, "test"));

    let booking = serde_json::to_value(booking_request("Jane Doe", "doc_1")).unwrap();
    let (status, created) = send(&app, Method::POST, "/api/appointments", Some(booking)).await;
    assert_eq!(status, StatusCode::CREATED);

    let raw = tokio::fs::read_to_string(&path).await.unwrap();
    let saved: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(saved["appointments"][0]["id"], created["data"]["id"]);
    assert!(saved["lastUpdated"].is_string());

    let _ = tokio::fs::remove_dir_all(path.parent().unwrap()).await;
}

#[tokio::test]
async fn test_rejected_query_string_is_enveloped_400() {
    let app = app_for(&TestServices::new());

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/appointments?status=scheduled&status=completed",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid query string"));
}

#[tokio::test]
async fn test_unsupported_method_is_enveloped_405() {
    let services = TestServices::new();
    let app = app_for(&services);

    let (status, body) = send(&app, Method::DELETE, "/api/appointments", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        body,
        json!({ "success": false, "error": "Method DELETE not allowed for /api/appointments" })
    );

    let (status, body) = send(&app, Method::PUT, "/api/appointments/apt_1/status", Some(json!({}))).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["success"], false);

    assert_eq!(services.store.save_count(), 0);
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let services = TestServices::new();
    let app = app_for(&services);

    let padding = "x".repeat(10 * 1024 * 1024);
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/appointments")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(format!("{{\"symptoms\": \"{}\"}}", padding)))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(services.store.save_count(), 0);
}

#[tokio::test]
async fn test_security_headers_are_set() {
    let app = app_for(&TestServices::new());

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    let headers = response.headers();
    assert_eq!(headers.get(header::X_CONTENT_TYPE_OPTIONS).unwrap(), "nosniff");
    assert_eq!(headers.get(header::X_FRAME_OPTIONS).unwrap(), "SAMEORIGIN");
    assert_eq!(headers.get(header::REFERRER_POLICY).unwrap(), "no-referrer");
}
