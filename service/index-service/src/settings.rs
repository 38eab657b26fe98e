//! Host-facing settings, persisted as a JSON file.

use std::io;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Master toggle; disabled means no scheduler is started.
    pub enabled: bool,
    /// Minutes between scheduled sync runs.
    pub sync_interval_minutes: u64,
    /// Directory, relative to the host root, the helper downloads into.
    pub download_directory: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enabled: true,
            sync_interval_minutes: 10,
            download_directory: String::new(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("io error: {0}")]
    Io(String),
    #[error("invalid settings file: {0}")]
    Invalid(String),
}

impl Settings {
    /// Load settings from `path`. A missing file yields the defaults;
    /// missing fields in an existing file fall back per-field.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        match std::fs::read_to_string(path) {
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| SettingsError::Invalid(e.to_string())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(SettingsError::Io(e.to_string())),
        }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SettingsError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }
        let raw = serde_json::to_string_pretty(self).map_err(|e| SettingsError::Invalid(e.to_string()))?;
        std::fs::write(path, raw).map_err(|e| SettingsError::Io(e.to_string()))
    }

    /// Interval for the scheduler; floored to one minute like the runner's.
    pub fn sync_interval(&self) -> Duration {
        Duration::from_secs(self.sync_interval_minutes.max(1) * 60)
    }
}
