//! Infrastructure layer - Storage, configuration and persistence

pub mod config;
pub mod incident_log;
pub mod repository;
pub mod store;

pub use config::Config;
pub use incident_log::{IncidentLog, INCIDENTS_KEY};
pub use repository::{FileSystemRepository, LogRepository};
pub use store::{FileStore, KeyValueStore, MemoryStore};
