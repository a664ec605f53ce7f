use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};

use crate::models::{AppointmentStatus, NewPrescription, Prescription};
use super::errors::RepositoryError;
use super::ids::{generate_unique_id, PRESCRIPTION_TAG};
use super::store::DocumentStore;

/// Repository trait for prescriptions
#[async_trait]
pub trait PrescriptionRepositoryTrait {
    /// Write the single prescription for an appointment.
    ///
    /// Marks the appointment completed and embeds a copy of the prescription
    /// in it, persisting both in one save.
    async fn create_for_appointment(&self, new: NewPrescription) -> Result<Prescription, RepositoryError>;

    /// Get the prescription written for an appointment
    async fn get_by_appointment_id(&self, appointment_id: &str) -> Result<Option<Prescription>, RepositoryError>;
}

/// Prescription repository over a shared document store
#[derive(Debug, Clone)]
pub struct PrescriptionRepository {
    store: Arc<dyn DocumentStore>,
}

impl PrescriptionRepository {
    /// Create a new repository
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PrescriptionRepositoryTrait for PrescriptionRepository {
    async fn create_for_appointment(&self, new: NewPrescription) -> Result<Prescription, RepositoryError> {
        let mut doc = self.store.load().await;

        let doctor_id = match doc.find_appointment(&new.appointment_id) {
            Some(appointment) => {
                if appointment.prescription.is_some() {
                    warn!("Appointment {} already has a prescription", appointment.id);
                    return Err(RepositoryError::Conflict(
                        "Prescription already exists for this appointment".to_string(),
                    ));
                }
                appointment.doctor_id.clone()
            }
            None => {
                return Err(RepositoryError::NotFound("Appointment not found".to_string()));
            }
        };

        // The collection is the source of truth even if the embedded copy was lost
        if doc.find_prescription_for(&new.appointment_id).is_some() {
            warn!("Prescription collection already references appointment {}", new.appointment_id);
            return Err(RepositoryError::Conflict(
                "Prescription already exists for this appointment".to_string(),
            ));
        }

        let id = generate_unique_id(PRESCRIPTION_TAG, |candidate| {
            doc.prescriptions.iter().any(|pres| pres.id == candidate)
        });
        let now = Utc::now();

        let prescription = Prescription {
            id,
            appointment_id: new.appointment_id,
            medicine_name: new.medicine_name,
            dosage: new.dosage,
            instructions: new.instructions,
            created_at: now,
            doctor_id,
        };

        doc.prescriptions.push(prescription.clone());

        if let Some(appointment) = doc.find_appointment_mut(&prescription.appointment_id) {
            appointment.prescription = Some(prescription.clone());
            appointment.status = AppointmentStatus::Completed;
            appointment.updated_at = now;
        }

        self.store.save(&mut doc).await?;

        info!(
            "Created prescription {} for appointment {}",
            prescription.id, prescription.appointment_id
        );
        Ok(prescription)
    }

    async fn get_by_appointment_id(&self, appointment_id: &str) -> Result<Option<Prescription>, RepositoryError> {
        let doc = self.store.load().await;
        Ok(doc.find_prescription_for(appointment_id).cloned())
    }
}
