//! Application layer - Use cases and orchestration

pub mod confirm;
pub mod export;
pub mod init;
pub mod list_incidents;
pub mod log_incident;
pub mod manage_config;
pub mod remove_incidents;

pub use confirm::{AssumeYes, Confirm};
pub use export::ExportService;
pub use list_incidents::ListIncidentsService;
pub use log_incident::LogIncidentService;
pub use manage_config::ConfigService;
pub use remove_incidents::RemoveIncidentsService;
