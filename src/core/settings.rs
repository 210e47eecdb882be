//! Project settings.
//!
//! Reads the optional `signpost.toml` next to `key.properties`. Every field
//! has a default, so a missing file behaves like an empty one.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::core::constants::{APP_MODULE_DIR, KEY_PROPERTIES_FILE, SETTINGS_FILE};
use crate::error::{Result, SettingsError};

/// Settings stored in `signpost.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Properties file, relative to the Android project directory.
    pub properties_file: PathBuf,
    /// Directory relative `storeFile` values resolve against, relative to
    /// the Android project directory.
    pub store_base: PathBuf,
    /// Treat a missing properties file as an error instead of falling back
    /// to debug signing.
    pub require_production: bool,
    /// Check that the keystore file exists and is readable.
    pub verify_keystore: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            properties_file: PathBuf::from(KEY_PROPERTIES_FILE),
            store_base: PathBuf::from(APP_MODULE_DIR),
            require_production: false,
            verify_keystore: true,
        }
    }
}

impl Settings {
    /// Path to the settings file inside `project_dir`
    pub fn settings_path(project_dir: &Path) -> PathBuf {
        project_dir.join(SETTINGS_FILE)
    }

    /// Load settings for `project_dir`, or defaults if there is no file.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::ReadFile`, `SettingsError::Parse`, or
    /// `SettingsError::InvalidValue`.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let path = Self::settings_path(project_dir);
        debug!(path = %path.display(), "loading settings");

        if !path.exists() {
            debug!("no settings file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path).map_err(SettingsError::ReadFile)?;
        let settings: Self = toml::from_str(&contents).map_err(SettingsError::Parse)?;
        settings.validate()?;

        Ok(settings)
    }

    /// Validate field contents
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidValue` if `properties_file` is empty.
    pub fn validate(&self) -> Result<()> {
        if self.properties_file.as_os_str().is_empty() {
            return Err(SettingsError::InvalidValue {
                field: "properties_file",
                reason: "must not be empty".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Absolute-or-project-relative properties file path
    pub fn properties_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.properties_file)
    }

    /// Directory relative keystore paths resolve against
    pub fn store_base_dir(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.store_base)
    }
}
