// Repository module structure
pub mod errors;
pub mod ids;
mod appointment;
mod in_memory;
mod prescription;
mod store;

// Re-export commonly used types
pub use errors::RepositoryError;
pub use appointment::{AppointmentRepository, AppointmentRepositoryTrait};
pub use prescription::{PrescriptionRepository, PrescriptionRepositoryTrait};
pub use in_memory::InMemoryDocumentStore;
pub use store::{DocumentStore, JsonFileStore};

// Record fixtures for both testing and when mock feature is enabled
#[cfg(any(test, feature = "mock"))]
pub mod fixtures;
