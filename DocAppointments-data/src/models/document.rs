use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::appointment::Appointment;
use super::prescription::Prescription;

/// The whole persisted state: every appointment and every prescription.
///
/// It is always read and written as one unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub appointments: Vec<Appointment>,

    #[serde(default)]
    pub prescriptions: Vec<Prescription>,

    /// Stamped on every save
    pub last_updated: DateTime<Utc>,
}

impl Default for Document {
    fn default() -> Self {
        Self::empty()
    }
}

impl Document {
    /// A fresh document with no records
    pub fn empty() -> Self {
        Self {
            appointments: Vec::new(),
            prescriptions: Vec::new(),
            last_updated: Utc::now(),
        }
    }

    pub fn find_appointment(&self, id: &str) -> Option<&Appointment> {
        self.appointments.iter().find(|apt| apt.id == id)
    }

    pub fn find_appointment_mut(&mut self, id: &str) -> Option<&mut Appointment> {
        self.appointments.iter_mut().find(|apt| apt.id == id)
    }

    pub fn find_prescription_for(&self, appointment_id: &str) -> Option<&Prescription> {
        self.prescriptions
            .iter()
            .find(|pres| pres.appointment_id == appointment_id)
    }
}
