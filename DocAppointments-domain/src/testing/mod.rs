// Testing utilities for the domain layer
// This module is only available when the "mock" feature is enabled

use std::sync::Arc;

use chrono::{Duration, Utc};

use doc_appointments_data::models::Document;
use doc_appointments_data::repository::{DocumentStore, InMemoryDocumentStore};

// Re-export the record fixture from the data layer
pub use doc_appointments_data::repository::fixtures::appointment_fixture;

use crate::entities::appointment::CreateAppointmentRequest;
use crate::entities::prescription::CreatePrescriptionRequest;
use crate::health::{create_health_service, HealthServiceTrait};
use crate::services::{
    create_appointment_service, create_prescription_service, AppointmentServiceTrait, PrescriptionServiceTrait,
};

/// Every domain service wired to one in-memory store
#[derive(Clone)]
pub struct TestServices {
    pub store: InMemoryDocumentStore,
    pub appointments: Arc<dyn AppointmentServiceTrait + Send + Sync>,
    pub prescriptions: Arc<dyn PrescriptionServiceTrait + Send + Sync>,
    pub health: Arc<dyn HealthServiceTrait>,
}

impl TestServices {
    /// Services over an empty document
    pub fn new() -> Self {
        Self::with_document(Document::empty())
    }

    /// Services over a seeded document
    pub fn with_document(doc: Document) -> Self {
        let store = InMemoryDocumentStore::with_document(doc);
        let shared: Arc<dyn DocumentStore> = Arc::new(store.clone());

        Self {
            store,
            appointments: Arc::new(create_appointment_service(shared.clone())),
            prescriptions: Arc::new(create_prescription_service(shared.clone())),
            health: create_health_service(shared),
        }
    }
}

impl Default for TestServices {
    fn default() -> Self {
        Self::new()
    }
}

/// A valid booking for tomorrow
pub fn booking_request(patient_name: &str, doctor_id: &str) -> CreateAppointmentRequest {
    CreateAppointmentRequest {
        patient_name: Some(patient_name.to_string()),
        age: Some(42),
        symptoms: Some("Persistent cough".to_string()),
        appointment_time: Some((Utc::now() + Duration::days(1)).to_rfc3339()),
        doctor_id: Some(doctor_id.to_string()),
    }
}

/// A valid prescription for an appointment
pub fn prescription_request(appointment_id: &str, medicine_name: &str) -> CreatePrescriptionRequest {
    CreatePrescriptionRequest {
        appointment_id: Some(appointment_id.to_string()),
        medicine_name: Some(medicine_name.to_string()),
        dosage: Some("500mg twice daily".to_string()),
        instructions: Some("Take with food".to_string()),
    }
}
