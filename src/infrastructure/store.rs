//! Durable key-value storage

use crate::error::{IncilogError, Result};
use chrono::Utc;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// String-valued key-value store holding whole documents per key
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; removing a missing key is not an error
    fn remove(&mut self, key: &str) -> Result<()>;

    /// Move an unreadable value aside so it is not overwritten by the next
    /// `set`. Returns a description of where it went.
    fn backup(&mut self, key: &str) -> Result<Option<String>>;
}

/// One JSON file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        FileStore { dir }
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    fn validate_key(key: &str) -> Result<()> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if valid {
            Ok(())
        } else {
            Err(IncilogError::Config(format!("Invalid storage key: '{}'", key)))
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Self::validate_key(key)?;
        let path = self.path_for(key);

        match fs::read_to_string(&path) {
            Ok(contents) => {
                debug!(path = %path.display(), bytes = contents.len(), "read key");
                Ok(Some(contents))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(IncilogError::Io(e)),
        }
    }

    /// Writes to a temp file in the same directory, then renames into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so the
    /// destination is removed first. A failed rename removes the temp file.
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        Self::validate_key(key)?;
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }

        let path = self.path_for(key);
        let tmp_path = self
            .dir
            .join(format!("{}.json.incilog-tmp-{}", key, std::process::id()));

        fs::write(&tmp_path, value)?;

        #[cfg(windows)]
        {
            if path.exists() {
                fs::remove_file(&path)?;
            }
        }

        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(IncilogError::Io(e));
        }
        debug!(path = %path.display(), bytes = value.len(), "wrote key");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        Self::validate_key(key)?;
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(IncilogError::Io(e)),
        }
    }

    fn backup(&mut self, key: &str) -> Result<Option<String>> {
        Self::validate_key(key)?;
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }

        let backup_path = self.dir.join(format!(
            "{}.json.corrupt-{}",
            key,
            Utc::now().format("%Y%m%dT%H%M%S%.3f")
        ));
        fs::rename(&path, &backup_path)?;
        Ok(Some(backup_path.display().to_string()))
    }
}

/// In-process store, used by tests and when embedding the log
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys currently stored, including backups
    #[cfg(test)]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn backup(&mut self, key: &str) -> Result<Option<String>> {
        let Some(value) = self.entries.remove(key) else {
            return Ok(None);
        };
        let backup_key = format!("{}.corrupt", key);
        self.entries.insert(backup_key.clone(), value);
        Ok(Some(backup_key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_missing_key() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().to_path_buf());
        assert_eq!(store.get("incidents").unwrap(), None);
    }

    #[test]
    fn test_file_store_set_and_get() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().join("nested"));

        store.set("incidents", "[]").unwrap();
        assert_eq!(store.get("incidents").unwrap().as_deref(), Some("[]"));
        assert!(temp.path().join("nested/incidents.json").exists());

        store.set("incidents", "[1]").unwrap();
        assert_eq!(store.get("incidents").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_file_store_leaves_no_temp_files() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().to_path_buf());
        store.set("incidents", "[]").unwrap();

        let names: Vec<String> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["incidents.json".to_string()]);
    }

    #[test]
    fn test_file_store_failed_write_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().to_path_buf());

        // A non-empty directory where the document belongs cannot be replaced
        fs::create_dir(temp.path().join("incidents.json")).unwrap();
        fs::write(temp.path().join("incidents.json/keep"), "x").unwrap();

        assert!(store.set("incidents", "[]").is_err());

        let leftovers: Vec<String> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .filter(|name| name.contains("incilog-tmp"))
            .collect();
        assert!(leftovers.is_empty(), "temp files left: {:?}", leftovers);
    }

    #[test]
    fn test_file_store_rejects_path_like_keys() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().to_path_buf());
        assert!(store.set("../escape", "x").is_err());
        assert!(store.get("").is_err());
    }

    #[test]
    fn test_file_store_remove() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().to_path_buf());
        store.set("incidents", "[]").unwrap();
        store.remove("incidents").unwrap();
        assert_eq!(store.get("incidents").unwrap(), None);

        // Removing again is fine
        store.remove("incidents").unwrap();
    }

    #[test]
    fn test_file_store_backup_moves_value_aside() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().to_path_buf());
        store.set("incidents", "not json").unwrap();

        let backup = store.backup("incidents").unwrap().unwrap();
        assert!(backup.contains("incidents.json.corrupt-"));
        assert_eq!(store.get("incidents").unwrap(), None);
        assert_eq!(fs::read_to_string(&backup).unwrap(), "not json");

        assert_eq!(store.backup("incidents").unwrap(), None);
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));

        assert_eq!(store.backup("k").unwrap().as_deref(), Some("k.corrupt"));
        assert_eq!(store.get("k").unwrap(), None);
        assert_eq!(store.keys().collect::<Vec<_>>(), vec!["k.corrupt"]);

        store.remove("k.corrupt").unwrap();
        assert_eq!(store.keys().count(), 0);
    }
}
