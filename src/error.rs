//! Error types for incilog

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for incilog application
#[derive(Debug, Error)]
pub enum IncilogError {
    #[error("Not an incilog directory: {0}")]
    NotIncilogDirectory(PathBuf),

    #[error("Incident not found: {0}")]
    IncidentNotFound(String),

    #[error("Ambiguous incident id '{prefix}' matches {matches} incidents")]
    AmbiguousId { prefix: String, matches: usize },

    #[error("Invalid incident: {0}")]
    Validation(String),

    #[error("Aborted")]
    Aborted,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl IncilogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            IncilogError::NotIncilogDirectory(_) => 2,
            IncilogError::IncidentNotFound(_) | IncilogError::AmbiguousId { .. } => 3,
            IncilogError::Validation(_) => 4,
            IncilogError::Aborted => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            IncilogError::NotIncilogDirectory(path) => {
                format!(
                    "Not an incilog directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'incilog init' in this directory to create a new log\n\
                    • Navigate to an existing incilog directory\n\
                    • Set INCILOG_ROOT environment variable to your log path",
                    path.display()
                )
            }
            IncilogError::IncidentNotFound(id) => {
                format!(
                    "Incident not found: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'incilog list' to see logged incidents and their ids\n\
                    • An unambiguous id prefix is enough (e.g., the first 6 characters)",
                    id
                )
            }
            IncilogError::AmbiguousId { prefix, matches } => {
                format!(
                    "Incident id '{}' matches {} incidents\n\n\
                    Type more characters of the id to select a single incident.",
                    prefix, matches
                )
            }
            IncilogError::Validation(msg) => {
                format!(
                    "Invalid incident: {}\n\n\
                    Required: --location, --description, --severity, --person\n\
                    Example: incilog log --location \"Warehouse B\" \\\n\
                    \x20   --description \"Slipped on wet floor\" --severity minor --person \"J. Doe\"",
                    msg
                )
            }
            IncilogError::Config(msg) => {
                if msg.contains("severity") {
                    format!(
                        "{}\n\n\
                        Valid severities: minor, moderate, serious, critical, near-miss",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using IncilogError
pub type Result<T> = std::result::Result<T, IncilogError>;
