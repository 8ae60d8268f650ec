use super::SettingsStore;
use crate::error::{CardError, Result};
use directories::ProjectDirs;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_FILENAME: &str = "settings.json";

/// File-backed settings store: one JSON map per card installation.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Store rooted at the user's data directory for this card.
    pub fn in_default_location() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "inventory-card").ok_or_else(|| {
            CardError::Store("could not resolve a user data directory".to_string())
        })?;
        Ok(Self::new(dirs.data_dir().to_path_buf()))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn settings_path(&self) -> PathBuf {
        self.root.join(SETTINGS_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(CardError::Io)?;
        }
        Ok(())
    }

    fn load_entries(&self) -> Result<HashMap<String, String>> {
        let path = self.settings_path();
        if !path.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(path).map_err(CardError::Io)?;
        let entries: HashMap<String, String> =
            serde_json::from_str(&content).map_err(CardError::Serialization)?;
        Ok(entries)
    }

    fn save_entries(&self, entries: &HashMap<String, String>) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(entries).map_err(CardError::Serialization)?;
        fs::write(self.settings_path(), content).map_err(CardError::Io)?;
        Ok(())
    }
}

impl SettingsStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.load_entries()?;
        Ok(entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.load_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.save_entries(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut entries = self.load_entries()?;
        if entries.remove(key).is_some() {
            self.save_entries(&entries)?;
        }
        Ok(())
    }
}
