use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::prescription::Prescription;

/// Lifecycle state of an appointment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    /// Booked and waiting to happen
    Scheduled,
    /// Seen by the doctor
    Completed,
    /// Called off
    Cancelled,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(AppointmentStatus::Scheduled),
            "completed" => Ok(AppointmentStatus::Completed),
            "cancelled" => Ok(AppointmentStatus::Cancelled),
            other => Err(format!("Unknown appointment status: {}", other)),
        }
    }
}

/// Storage model for an appointment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    /// Unique identifier for the appointment
    pub id: String,

    /// Name of the patient
    pub patient_name: String,

    /// Patient age in years
    pub age: u8,

    /// Free-text description of the complaint
    pub symptoms: String,

    /// When the appointment takes place
    pub appointment_time: DateTime<Utc>,

    /// Current lifecycle state
    pub status: AppointmentStatus,

    /// Doctor owning the appointment
    pub doctor_id: String,

    /// Copy of the prescription written for this appointment, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prescription: Option<Prescription>,

    /// When the record was created
    pub created_at: DateTime<Utc>,

    /// When the record was last changed
    pub updated_at: DateTime<Utc>,
}

/// Input data for creating a new appointment.
/// Fields are already validated by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAppointment {
    pub patient_name: String,
    pub age: u8,
    pub symptoms: String,
    pub appointment_time: DateTime<Utc>,
    pub doctor_id: String,
}

/// Conjunctive filters for listing appointments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentFilters {
    /// Exact status match
    pub status: Option<AppointmentStatus>,

    /// Exact doctor match
    pub doctor_id: Option<String>,

    /// Calendar day (server-local time) the appointment falls on
    pub date: Option<NaiveDate>,
}
