//! Theme preference persistence
//!
//! The preference is one logical value: the name of the currently selected
//! theme. Absence of a stored value is not an error; callers fall back to
//! their default.

use std::{
    fs,
    path::PathBuf,
    sync::Mutex,
};

use serde::{Deserialize, Serialize};

use crate::error::{StorageError, StorageResult};

/// Persisted theme selection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThemePreference {
    /// Current theme name
    pub current_theme: String,
    /// Last updated timestamp in RFC3339 format
    pub last_updated: Option<String>,
}

/// Store for the single theme preference value
pub trait PreferenceStore: Send + Sync {
    /// Load the persisted preference. `Ok(None)` means nothing was saved yet.
    fn load(&self) -> StorageResult<Option<ThemePreference>>;

    /// Persist the preference, replacing any previous value.
    fn save(&self, preference: &ThemePreference) -> StorageResult<()>;
}

/// File-backed preference store rooted at a themes directory
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    dir: PathBuf,
}

impl FilePreferenceStore {
    /// Create a store rooted at the given directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create a store at the default location, `~/.hueshift/themes`
    pub fn with_default_path() -> StorageResult<Self> {
        let mut dir = dirs::home_dir()
            .ok_or_else(|| StorageError::path_resolution_error("Home directory not found"))?;
        dir.push(".hueshift");
        dir.push("themes");
        Ok(Self { dir })
    }

    /// Get the preference file path
    fn preference_path(&self) -> PathBuf {
        self.dir.join("preference.json")
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> StorageResult<Option<ThemePreference>> {
        let path = self.preference_path();
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)?;
        let preference = serde_json::from_str(&content).map_err(|e| {
            StorageError::parse_error(
                path,
                "json",
                format!("Failed to parse theme preference: {}", e),
            )
        })?;
        Ok(Some(preference))
    }

    fn save(&self, preference: &ThemePreference) -> StorageResult<()> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| StorageError::directory_creation_failed(self.dir.clone(), e))?;
        let path = self.preference_path();
        let content = serde_json::to_string_pretty(preference).map_err(|e| {
            StorageError::parse_error(path.clone(), "json", format!("Serialization failed: {}", e))
        })?;
        fs::write(&path, content)?;
        tracing::debug!(theme = %preference.current_theme, "saved theme preference");
        Ok(())
    }
}

/// In-process preference store for tests and embedders without a home directory
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    preference: Mutex<Option<ThemePreference>>,
}

impl MemoryPreferenceStore {
    /// Create an empty in-process store
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> StorageResult<Option<ThemePreference>> {
        let preference = self
            .preference
            .lock()
            .map_err(|e| StorageError::internal(format!("Lock poisoned: {}", e)))?;
        Ok(preference.clone())
    }

    fn save(&self, preference: &ThemePreference) -> StorageResult<()> {
        let mut slot = self
            .preference
            .lock()
            .map_err(|e| StorageError::internal(format!("Lock poisoned: {}", e)))?;
        *slot = Some(preference.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn preference(name: &str) -> ThemePreference {
        ThemePreference {
            current_theme: name.to_string(),
            last_updated: None,
        }
    }

    #[test]
    fn test_file_store_missing_file_loads_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = FilePreferenceStore::new(temp_dir.path());
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_file_store_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = FilePreferenceStore::new(temp_dir.path());

        store.save(&preference("dracula")).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.current_theme, "dracula");
    }

    #[test]
    fn test_file_store_save_replaces_previous_value() {
        let temp_dir = TempDir::new().unwrap();
        let store = FilePreferenceStore::new(temp_dir.path());

        store.save(&preference("nord")).unwrap();
        store.save(&preference("coffee")).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.current_theme, "coffee");
    }

    #[test]
    fn test_file_store_corrupt_file_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = FilePreferenceStore::new(temp_dir.path());

        std::fs::write(temp_dir.path().join("preference.json"), "not json").unwrap();
        assert!(matches!(
            store.load(),
            Err(StorageError::ParseError { .. })
        ));
    }

    #[test]
    fn test_file_store_creates_directory_on_save() {
        let temp_dir = TempDir::new().unwrap();
        let store = FilePreferenceStore::new(temp_dir.path().join("nested").join("themes"));

        store.save(&preference("light")).unwrap();
        assert_eq!(store.load().unwrap().unwrap().current_theme, "light");
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryPreferenceStore::new();
        assert_eq!(store.load().unwrap(), None);

        store.save(&preference("synthwave")).unwrap();
        assert_eq!(store.load().unwrap().unwrap().current_theme, "synthwave");
    }
}
