//! Config management use case

use crate::domain::SeverityFilter;
use crate::error::{IncilogError, Result};
use crate::infrastructure::{Config, FileSystemRepository, LogRepository};
use std::str::FromStr;

pub const CONFIG_KEYS: &str = "confirm_destructive, default_filter, created";

/// Service for managing log configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "confirm_destructive" => Ok(config.confirm_destructive.to_string()),
            "default_filter" => Ok(config.default_filter.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(IncilogError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key, CONFIG_KEYS
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "confirm_destructive" => {
                config.confirm_destructive = parse_bool(value)?;
            }
            "default_filter" => {
                config.default_filter =
                    SeverityFilter::from_str(value).map_err(IncilogError::Config)?;
            }
            "created" => {
                return Err(IncilogError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(IncilogError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: confirm_destructive, default_filter",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(IncilogError::Config(format!(
            "Invalid boolean: '{}'. Use true or false",
            value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::init::init;
    use crate::domain::Severity;
    use tempfile::TempDir;

    fn service() -> (TempDir, ConfigService) {
        let temp = TempDir::new().unwrap();
        let repo = init(temp.path()).unwrap();
        (temp, ConfigService::new(repo))
    }

    #[test]
    fn test_get_defaults() {
        let (_temp, service) = service();
        assert_eq!(service.get("confirm_destructive").unwrap(), "true");
        assert_eq!(service.get("default_filter").unwrap(), "all");
        assert!(!service.get("created").unwrap().is_empty());
    }

    #[test]
    fn test_set_values() {
        let (_temp, service) = service();

        service.set("confirm_destructive", "no").unwrap();
        service.set("default_filter", "Near-Miss").unwrap();

        let config = service.list().unwrap();
        assert!(!config.confirm_destructive);
        assert_eq!(config.default_filter, SeverityFilter::Only(Severity::NearMiss));
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let (_temp, service) = service();
        assert!(service.set("confirm_destructive", "maybe").is_err());
        assert!(service
            .set("default_filter", "huge")
            .unwrap_err()
            .to_string()
            .contains("Invalid severity"));
        assert!(service.set("created", "2020-01-01T00:00:00Z").is_err());
        assert!(service.set("colour", "red").is_err());
    }

    #[test]
    fn test_get_unknown_key() {
        let (_temp, service) = service();
        let err = service.get("colour").unwrap_err();
        assert!(err.to_string().contains("default_filter"));
    }
}
