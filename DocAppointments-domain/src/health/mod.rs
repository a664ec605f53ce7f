//! Domain layer health check functionality
//! Summarizes what the document store currently holds

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use doc_appointments_data::repository::DocumentStore;

/// Data store health status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// The document could be read
    Healthy,
    /// The document could not be read; counts are zero
    Degraded,
}

/// Record counts of the stored document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub status: HealthStatus,
    pub appointment_count: usize,
    pub prescription_count: usize,
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        self.status == HealthStatus::Healthy
    }
}

/// Trait for health services
#[async_trait]
pub trait HealthServiceTrait: Send + Sync + std::fmt::Debug {
    /// Report store health. Never fails.
    async fn check(&self) -> HealthReport;
}

/// Health service reading the document store
#[derive(Debug, Clone)]
pub struct HealthService {
    store: Arc<dyn DocumentStore>,
}

impl HealthService {
    /// Create a new health service
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl HealthServiceTrait for HealthService {
    async fn check(&self) -> HealthReport {
        match self.store.try_load().await {
            Ok(doc) => HealthReport {
                status: HealthStatus::Healthy,
                appointment_count: doc.appointments.len(),
                prescription_count: doc.prescriptions.len(),
            },
            Err(e) => {
                warn!("Health check could not read the data store: {}", e);
                HealthReport {
                    status: HealthStatus::Degraded,
                    appointment_count: 0,
                    prescription_count: 0,
                }
            }
        }
    }
}

/// Factory function to create a health service
pub fn create_health_service(store: Arc<dyn DocumentStore>) -> Arc<dyn HealthServiceTrait> {
    Arc::new(HealthService::new(store))
}
