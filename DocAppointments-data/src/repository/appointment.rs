use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Local, Utc};
use tracing::{debug, info};

use crate::models::{Appointment, AppointmentFilters, AppointmentStatus, NewAppointment};
use super::errors::RepositoryError;
use super::ids::{generate_unique_id, APPOINTMENT_TAG};
use super::store::DocumentStore;

/// Repository trait for appointments
#[async_trait]
pub trait AppointmentRepositoryTrait {
    /// List appointments matching every given filter, earliest first
    async fn list(&self, filters: &AppointmentFilters) -> Result<Vec<Appointment>, RepositoryError>;

    /// Get an appointment by ID
    async fn get_by_id(&self, id: &str) -> Result<Option<Appointment>, RepositoryError>;

    /// Store a new appointment with status `scheduled`
    async fn create(&self, new: NewAppointment) -> Result<Appointment, RepositoryError>;

    /// Replace an appointment's status. `None` when the ID is unknown.
    async fn update_status(
        &self,
        id: &str,
        status: AppointmentStatus,
    ) -> Result<Option<Appointment>, RepositoryError>;
}

/// Appointment repository over a shared document store
#[derive(Debug, Clone)]
pub struct AppointmentRepository {
    store: Arc<dyn DocumentStore>,
}

impl AppointmentRepository {
    /// Create a new repository
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

/// True when the appointment passes every filter that is set
fn matches_filters(appointment: &Appointment, filters: &AppointmentFilters) -> bool {
    if let Some(status) = filters.status {
        if appointment.status != status {
            return false;
        }
    }

    if let Some(doctor_id) = &filters.doctor_id {
        if &appointment.doctor_id != doctor_id {
            return false;
        }
    }

    if let Some(date) = filters.date {
        if appointment.appointment_time.with_timezone(&Local).date_naive() != date {
            return false;
        }
    }

    true
}

#[async_trait]
impl AppointmentRepositoryTrait for AppointmentRepository {
    async fn list(&self, filters: &AppointmentFilters) -> Result<Vec<Appointment>, RepositoryError> {
        let doc = self.store.load().await;

        let mut appointments: Vec<Appointment> = doc
            .appointments
            .into_iter()
            .filter(|apt| matches_filters(apt, filters))
            .collect();

        // Stable sort keeps insertion order for equal times
        appointments.sort_by(|a, b| a.appointment_time.cmp(&b.appointment_time));

        debug!("Listed {} appointments with filters {:?}", appointments.len(), filters);
        Ok(appointments)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Appointment>, RepositoryError> {
        let doc = self.store.load().await;
        Ok(doc.find_appointment(id).cloned())
    }

    async fn create(&self, new: NewAppointment) -> Result<Appointment, RepositoryError> {
        let mut doc = self.store.load().await;

        let id = generate_unique_id(APPOINTMENT_TAG, |candidate| doc.find_appointment(candidate).is_some());
        let now = Utc::now();

        let appointment = Appointment {
            id,
            patient_name: new.patient_name,
            age: new.age,
            symptoms: new.symptoms,
            appointment_time: new.appointment_time,
            status: AppointmentStatus::Scheduled,
            doctor_id: new.doctor_id,
            prescription: None,
            created_at: now,
            updated_at: now,
        };

        doc.appointments.push(appointment.clone());
        self.store.save(&mut doc).await?;

        info!("Created appointment {} for doctor {}", appointment.id, appointment.doctor_id);
        Ok(appointment)
    }

    async fn update_status(
        &self,
        id: &str,
        status: AppointmentStatus,
    ) -> Result<Option<Appointment>, RepositoryError> {
        let mut doc = self.store.load().await;

        let updated = match doc.find_appointment_mut(id) {
            Some(appointment) => {
                appointment.status = status;
                appointment.updated_at = Utc::now();
                appointment.clone()
            }
            None => {
                debug!("Appointment {} not found, nothing to update", id);
                return Ok(None);
            }
        };

        self.store.save(&mut doc).await?;

        info!("Appointment {} is now {}", id, status);
        Ok(Some(updated))
    }
}
