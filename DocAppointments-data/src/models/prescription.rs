use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Storage model for a prescription
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    /// Unique identifier for the prescription
    pub id: String,

    /// Appointment the prescription was written for
    pub appointment_id: String,

    /// Name of the prescribed medicine
    pub medicine_name: String,

    /// Dosage, e.g. "500mg x3/day"
    pub dosage: String,

    /// Extra directions for the patient (empty when none were given)
    #[serde(default)]
    pub instructions: String,

    /// When the prescription was written
    pub created_at: DateTime<Utc>,

    /// Doctor who owns the referenced appointment
    pub doctor_id: String,
}

/// Input data for creating a prescription
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPrescription {
    pub appointment_id: String,
    pub medicine_name: String,
    pub dosage: String,
    pub instructions: String,
}
