use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, warn};
use validator::Validate;

use doc_appointments_data::models::{AppointmentFilters, NewAppointment};
use doc_appointments_data::repository::{AppointmentRepository, AppointmentRepositoryTrait, DocumentStore};

use crate::entities::appointment::{
    Appointment, AppointmentQuery, AppointmentStatus, CreateAppointmentRequest, UpdateStatusRequest,
};
use crate::entities::conversions;
use super::errors::ServiceError;
use super::validation::{format_validation_errors, non_blank, parse_filter_date, parse_timestamp, require_fields};

/// Trait for appointment service operations
#[async_trait]
pub trait AppointmentServiceTrait {
    /// List appointments, earliest first, filtered conjunctively
    async fn list_appointments(&self, query: AppointmentQuery) -> Result<Vec<Appointment>, ServiceError>;

    /// Get an appointment by ID. Absence is `Ok(None)`.
    async fn get_appointment(&self, id: &str) -> Result<Option<Appointment>, ServiceError>;

    /// Validate and book a new appointment
    async fn create_appointment(&self, request: CreateAppointmentRequest) -> Result<Appointment, ServiceError>;

    /// Validate and apply a status change. Unknown IDs are `Ok(None)`.
    async fn update_status(
        &self,
        id: &str,
        request: UpdateStatusRequest,
    ) -> Result<Option<Appointment>, ServiceError>;
}

/// Appointment service for domain logic
pub struct AppointmentService<R: AppointmentRepositoryTrait> {
    repository: R,
}

impl<R: AppointmentRepositoryTrait> AppointmentService<R> {
    /// Create a new appointment service
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Turn raw query strings into repository filters
    fn parse_query(&self, query: &AppointmentQuery) -> Result<AppointmentFilters, ServiceError> {
        let status = non_blank(&query.status)
            .map(|raw| raw.parse::<AppointmentStatus>())
            .transpose()
            .map_err(ServiceError::ValidationError)?
            .map(conversions::convert_to_data_status);

        let date = non_blank(&query.date).map(parse_filter_date).transpose()?;

        Ok(AppointmentFilters {
            status,
            doctor_id: non_blank(&query.doctor_id).map(str::to_string),
            date,
        })
    }

    /// Check a booking request and build the record to store
    fn validate_create_request(&self, request: &CreateAppointmentRequest) -> Result<NewAppointment, ServiceError> {
        let patient_name = non_blank(&request.patient_name);
        let symptoms = non_blank(&request.symptoms);
        let appointment_time = non_blank(&request.appointment_time);
        let doctor_id = non_blank(&request.doctor_id);

        require_fields(&[
            ("patientName", patient_name.is_some()),
            ("age", request.age.is_some()),
            ("symptoms", symptoms.is_some()),
            ("appointmentTime", appointment_time.is_some()),
            ("doctorId", doctor_id.is_some()),
        ])?;

        if let Err(errors) = request.validate() {
            return Err(ServiceError::ValidationError(format_validation_errors(&errors)));
        }

        let (Some(patient_name), Some(age), Some(symptoms), Some(appointment_time), Some(doctor_id)) =
            (patient_name, request.age, symptoms, appointment_time, doctor_id)
        else {
            return Err(ServiceError::ValidationError("Missing required fields".to_string()));
        };

        let appointment_time = parse_timestamp("appointmentTime", appointment_time)?;
        if appointment_time <= Utc::now() {
            return Err(ServiceError::ValidationError(
                "Appointment time must be in the future".to_string(),
            ));
        }

        let age = u8::try_from(age)
            .map_err(|_| ServiceError::ValidationError("Age must be between 0 and 150".to_string()))?;

        Ok(NewAppointment {
            patient_name: patient_name.to_string(),
            age,
            symptoms: symptoms.to_string(),
            appointment_time,
            doctor_id: doctor_id.to_string(),
        })
    }
}

#[async_trait]
impl<R: AppointmentRepositoryTrait + Send + Sync> AppointmentServiceTrait for AppointmentService<R> {
    async fn list_appointments(&self, query: AppointmentQuery) -> Result<Vec<Appointment>, ServiceError> {
        let filters = self.parse_query(&query)?;
        debug!("Listing appointments with filters {:?}", filters);

        let appointments = self.repository.list(&filters).await?;

        Ok(appointments
            .into_iter()
            .map(conversions::convert_to_domain_appointment)
            .collect())
    }

    async fn get_appointment(&self, id: &str) -> Result<Option<Appointment>, ServiceError> {
        let appointment = self.repository.get_by_id(id).await?;
        Ok(appointment.map(conversions::convert_to_domain_appointment))
    }

    async fn create_appointment(&self, request: CreateAppointmentRequest) -> Result<Appointment, ServiceError> {
        let new = self.validate_create_request(&request).map_err(|e| {
            warn!("Rejected appointment request: {}", e);
            e
        })?;

        let appointment = self.repository.create(new).await?;
        Ok(conversions::convert_to_domain_appointment(appointment))
    }

    async fn update_status(
        &self,
        id: &str,
        request: UpdateStatusRequest,
    ) -> Result<Option<Appointment>, ServiceError> {
        let raw = non_blank(&request.status)
            .ok_or_else(|| ServiceError::ValidationError("Status is required".to_string()))?;
        let status = raw.parse::<AppointmentStatus>().map_err(ServiceError::ValidationError)?;

        let updated = self
            .repository
            .update_status(id, conversions::convert_to_data_status(status))
            .await?;

        Ok(updated.map(conversions::convert_to_domain_appointment))
    }
}

/// Create an appointment service over a document store
pub fn create_appointment_service(store: Arc<dyn DocumentStore>) -> impl AppointmentServiceTrait + Send + Sync {
    AppointmentService::new(AppointmentRepository::new(store))
}
