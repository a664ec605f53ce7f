use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use doc_appointments_data::models::NewPrescription;
use doc_appointments_data::repository::{DocumentStore, PrescriptionRepository, PrescriptionRepositoryTrait};

use crate::entities::conversions;
use crate::entities::prescription::{CreatePrescriptionRequest, Prescription};
use super::errors::ServiceError;
use super::validation::{non_blank, require_fields};

/// Trait for prescription service operations
#[async_trait]
pub trait PrescriptionServiceTrait {
    /// Write the prescription for an appointment, completing the appointment
    async fn create_prescription(&self, request: CreatePrescriptionRequest) -> Result<Prescription, ServiceError>;

    /// Get the prescription written for an appointment. Absence is `Ok(None)`.
    async fn get_by_appointment_id(&self, appointment_id: &str) -> Result<Option<Prescription>, ServiceError>;
}

/// Prescription service for domain logic
pub struct PrescriptionService<R: PrescriptionRepositoryTrait> {
    repository: R,
}

impl<R: PrescriptionRepositoryTrait> PrescriptionService<R> {
    /// Create a new prescription service
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    fn validate_create_request(&self, request: &CreatePrescriptionRequest) -> Result<NewPrescription, ServiceError> {
        let appointment_id = non_blank(&request.appointment_id);
        let medicine_name = non_blank(&request.medicine_name);
        let dosage = non_blank(&request.dosage);

        require_fields(&[
            ("appointmentId", appointment_id.is_some()),
            ("medicineName", medicine_name.is_some()),
            ("dosage", dosage.is_some()),
        ])?;

        match (appointment_id, medicine_name, dosage) {
            (Some(appointment_id), Some(medicine_name), Some(dosage)) => Ok(NewPrescription {
                appointment_id: appointment_id.to_string(),
                medicine_name: medicine_name.to_string(),
                dosage: dosage.to_string(),
                instructions: request.instructions.clone().unwrap_or_default(),
            }),
            _ => Err(ServiceError::ValidationError("Missing required fields".to_string())),
        }
    }
}

#[async_trait]
impl<R: PrescriptionRepositoryTrait + Send + Sync> PrescriptionServiceTrait for PrescriptionService<R> {
    async fn create_prescription(&self, request: CreatePrescriptionRequest) -> Result<Prescription, ServiceError> {
        let new = self.validate_create_request(&request).map_err(|e| {
            warn!("Rejected prescription request: {}", e);
            e
        })?;

        let prescription = self.repository.create_for_appointment(new).await?;
        Ok(conversions::convert_to_domain_prescription(prescription))
    }

    async fn get_by_appointment_id(&self, appointment_id: &str) -> Result<Option<Prescription>, ServiceError> {
        let prescription = self.repository.get_by_appointment_id(appointment_id).await?;
        Ok(prescription.map(conversions::convert_to_domain_prescription))
    }
}

/// Create a prescription service over a document store
pub fn create_prescription_service(store: Arc<dyn DocumentStore>) -> impl PrescriptionServiceTrait + Send + Sync {
    PrescriptionService::new(PrescriptionRepository::new(store))
}
