//! Configuration management

use crate::domain::SeverityFilter;
use crate::error::{IncilogError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_DIR: &str = ".incilog";
const CONFIG_FILE: &str = "config.toml";

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Ask before deleting incidents
    #[serde(default = "default_true")]
    pub confirm_destructive: bool,

    /// Filter used by `list` and `export` when none is given
    #[serde(default)]
    pub default_filter: SeverityFilter,

    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            confirm_destructive: true,
            default_filter: SeverityFilter::All,
            created: Utc::now(),
        }
    }

    /// Load config from .incilog/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                IncilogError::NotIncilogDirectory(path.to_path_buf())
            } else {
                IncilogError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| IncilogError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .incilog/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let config_dir = path.join(CONFIG_DIR);
        let config_path = config_dir.join(CONFIG_FILE);

        if !config_dir.exists() {
            fs::create_dir(&config_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
