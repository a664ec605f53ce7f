use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

/// Domain model for a prescription
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    /// Unique identifier, e.g. `pres_lq2x9a0d_k3m1q`
    pub id: String,

    /// Appointment the prescription belongs to
    pub appointment_id: String,

    /// Name of the prescribed medicine
    pub medicine_name: String,

    /// Dosage, e.g. "500mg x3/day"
    pub dosage: String,

    /// Extra directions; empty when none were given
    pub instructions: String,

    /// When the prescription was written
    pub created_at: DateTime<Utc>,

    /// Doctor owning the appointment
    pub doctor_id: String,
}

/// Request payload for writing a prescription
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreatePrescriptionRequest {
    /// Appointment to prescribe for
    pub appointment_id: Option<String>,

    /// Name of the medicine
    pub medicine_name: Option<String>,

    /// Dosage
    pub dosage: Option<String>,

    /// Optional directions for the patient
    pub instructions: Option<String>,
}
