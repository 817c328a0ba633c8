//! File system repository

use crate::error::{IncilogError, Result};
use crate::infrastructure::config::CONFIG_DIR;
use crate::infrastructure::{Config, FileStore, IncidentLog};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable pointing at the log root
pub const ROOT_ENV: &str = "INCILOG_ROOT";

/// Abstract repository for incident log operations
pub trait LogRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .incilog/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .incilog/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .incilog directory exists
    fn is_initialized(&self) -> bool;

    /// Create .incilog directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of LogRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the log root.
    /// First checks INCILOG_ROOT, then walks up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_incilog_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(IncilogError::Config(format!(
                    "INCILOG_ROOT is set to '{}' but no .incilog directory found. \
                    Run 'incilog init' in that directory or unset INCILOG_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the log root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_incilog_dir(&current) {
                debug!(root = %current.display(), "found incident log");
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(IncilogError::NotIncilogDirectory(start.to_path_buf()));
                }
            }
        }
    }

    fn has_incilog_dir(path: &Path) -> bool {
        path.join(CONFIG_DIR).is_dir()
    }

    /// Directory holding config and stored documents
    pub fn data_dir(&self) -> PathBuf {
        self.root.join(CONFIG_DIR)
    }

    /// Key-value store backed by the data directory
    pub fn store(&self) -> FileStore {
        FileStore::new(self.data_dir())
    }

    /// Load the incident collection
    pub fn open_log(&self) -> Result<IncidentLog<FileStore>> {
        if !self.is_initialized() {
            return Err(IncilogError::NotIncilogDirectory(self.root.clone()));
        }
        IncidentLog::load(self.store())
    }
}

impl LogRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_incilog_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let data_dir = self.data_dir();

        if data_dir.exists() {
            return Err(IncilogError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&data_dir)?;
        Ok(())
    }
}
