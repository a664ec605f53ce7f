use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use super::prescription::Prescription;

/// Lifecycle state of an appointment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    /// Booked and waiting to happen
    Scheduled,
    /// Seen by the doctor
    Completed,
    /// Called off
    Cancelled,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
        };
        f.write_str(name)
    }
}

impl FromStr for AppointmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "scheduled" => Ok(AppointmentStatus::Scheduled),
            "completed" => Ok(AppointmentStatus::Completed),
            "cancelled" => Ok(AppointmentStatus::Cancelled),
            _ => Err("Status must be one of: scheduled, completed, cancelled".to_string()),
        }
    }
}

/// Domain model for an appointment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    /// Unique identifier, e.g. `apt_lq2x8k1c_4f9za`
    pub id: String,

    /// Name of the patient
    pub patient_name: String,

    /// Patient age in years (0-150)
    pub age: u8,

    /// Free-text description of the complaint
    pub symptoms: String,

    /// When the appointment takes place
    pub appointment_time: DateTime<Utc>,

    /// Current lifecycle state
    pub status: AppointmentStatus,

    /// Doctor owning the appointment
    pub doctor_id: String,

    /// Prescription written for this appointment, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prescription: Option<Prescription>,

    /// When the appointment was booked
    pub created_at: DateTime<Utc>,

    /// When the appointment last changed
    pub updated_at: DateTime<Utc>,
}

/// Request payload for booking an appointment.
///
/// Every field is optional on the wire so that missing fields can be
/// reported together instead of failing on the first one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    /// Name of the patient
    pub patient_name: Option<String>,

    /// Patient age in years
    #[validate(range(min = 0, max = 150, message = "Age must be between 0 and 150"))]
    pub age: Option<i64>,

    /// Free-text description of the complaint
    pub symptoms: Option<String>,

    /// ISO 8601 timestamp, must be in the future
    pub appointment_time: Option<String>,

    /// Doctor the appointment is booked with
    pub doctor_id: Option<String>,
}

/// Request payload for changing an appointment's status
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct UpdateStatusRequest {
    /// One of `scheduled`, `completed`, `cancelled`
    pub status: Option<String>,
}

/// Raw list filters as received from a caller. Blank values count as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentQuery {
    /// Exact status
    pub status: Option<String>,

    /// Exact doctor ID
    pub doctor_id: Option<String>,

    /// `YYYY-MM-DD` or an ISO 8601 timestamp; matched by server-local calendar day
    pub date: Option<String>,
}
