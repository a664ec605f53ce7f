use doc_appointments_data::models as data;

use crate::entities::appointment::{Appointment, AppointmentStatus};
use crate::entities::prescription::Prescription;

/// Conversion functions between domain entities and data models
/// These functions follow the pattern convert_to_[target_layer]_[model_name]

/// Convert from data model to domain entity for appointment status
pub fn convert_to_domain_status(status: data::AppointmentStatus) -> AppointmentStatus {
    match status {
        data::AppointmentStatus::Scheduled => AppointmentStatus::Scheduled,
        data::AppointmentStatus::Completed => AppointmentStatus::Completed,
        data::AppointmentStatus::Cancelled => AppointmentStatus::Cancelled,
    }
}

/// Convert from domain entity to data model for appointment status
pub fn convert_to_data_status(status: AppointmentStatus) -> data::AppointmentStatus {
    match status {
        AppointmentStatus::Scheduled => data::AppointmentStatus::Scheduled,
        AppointmentStatus::Completed => data::AppointmentStatus::Completed,
        AppointmentStatus::Cancelled => data::AppointmentStatus::Cancelled,
    }
}

/// Convert from data model to domain entity for prescription
pub fn convert_to_domain_prescription(prescription: data::Prescription) -> Prescription {
    Prescription {
        id: prescription.id,
        appointment_id: prescription.appointment_id,
        medicine_name: prescription.medicine_name,
        dosage: prescription.dosage,
        instructions: prescription.instructions,
        created_at: prescription.created_at,
        doctor_id: prescription.doctor_id,
    }
}

/// Convert from data model to domain entity for appointment
pub fn convert_to_domain_appointment(appointment: data::Appointment) -> Appointment {
    Appointment {
        id: appointment.id,
        patient_name: appointment.patient_name,
        age: appointment.age,
        symptoms: appointment.symptoms,
        appointment_time: appointment.appointment_time,
        status: convert_to_domain_status(appointment.status),
        doctor_id: appointment.doctor_id,
        prescription: appointment.prescription.map(convert_to_domain_prescription),
        created_at: appointment.created_at,
        updated_at: appointment.updated_at,
    }
}
