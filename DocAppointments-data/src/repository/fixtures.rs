// Record fixtures shared by this crate's tests and by downstream crates
// through the `mock` feature

use chrono::{DateTime, Utc};

use crate::models::{Appointment, AppointmentStatus};

/// Build an appointment record directly, bypassing validation
pub fn appointment_fixture(
    id: &str,
    doctor_id: &str,
    status: AppointmentStatus,
    appointment_time: DateTime<Utc>,
) -> Appointment {
    let now = Utc::now();
    Appointment {
        id: id.to_string(),
        patient_name: format!("Patient {}", id),
        age: 42,
        symptoms: "Headache".to_string(),
        appointment_time,
        status,
        doctor_id: doctor_id.to_string(),
        prescription: None,
        created_at: now,
        updated_at: now,
    }
}
