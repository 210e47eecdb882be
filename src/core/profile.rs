//! Signing profile and identity types.

use std::fmt;
#[cfg(unix)]
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants::{KEY_ALIAS, KEY_PASSWORD, REDACTED, STORE_FILE, STORE_PASSWORD};
use crate::core::keystore;
use crate::core::properties::Properties;
use crate::error::{ConfigurationError, Error, Result};

/// Release signing credentials.
///
/// All four fields are non-empty. Passwords are wiped on drop and never
/// shown by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningProfile {
    store_file: PathBuf,
    store_password: Zeroizing<String>,
    key_alias: String,
    key_password: Zeroizing<String>,
}

impl SigningProfile {
    /// Build a profile from explicit values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::EmptyValue` if any field is empty.
    pub fn new(
        store_file: impl Into<PathBuf>,
        store_password: impl Into<String>,
        key_alias: impl Into<String>,
        key_password: impl Into<String>,
    ) -> Result<Self> {
        let profile = Self {
            store_file: store_file.into(),
            store_password: Zeroizing::new(store_password.into()),
            key_alias: key_alias.into(),
            key_password: Zeroizing::new(key_password.into()),
        };

        let fields = [
            (STORE_FILE, profile.store_file.as_os_str().is_empty()),
            (STORE_PASSWORD, profile.store_password.is_empty()),
            (KEY_ALIAS, profile.key_alias.is_empty()),
            (KEY_PASSWORD, profile.key_password.is_empty()),
        ];
        if let Some((key, _)) = fields.iter().find(|(_, empty)| *empty) {
            return Err(ConfigurationError::EmptyValue {
                key: *key,
                path: "<arguments>".to_string(),
            }
            .into());
        }

        Ok(profile)
    }

    /// Extract a profile from parsed properties.
    ///
    /// `storeFile` is resolved against `base`. Values are otherwise taken
    /// verbatim. `origin` names the source in error messages.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::MissingKey` or
    /// `ConfigurationError::EmptyValue` for the first unusable key.
    pub fn from_properties(props: &Properties, base: &Path, origin: &str) -> Result<Self> {
        let store_file = require(props, STORE_FILE, origin)?;
        let store_password = require(props, STORE_PASSWORD, origin)?;
        let key_alias = require(props, KEY_ALIAS, origin)?;
        let key_password = require(props, KEY_PASSWORD, origin)?;

        Ok(Self {
            store_file: keystore::resolve_store_path(base, store_file),
            store_password: Zeroizing::new(store_password.to_string()),
            key_alias: key_alias.to_string(),
            key_password: Zeroizing::new(key_password.to_string()),
        })
    }

    /// Keystore path
    pub fn store_file(&self) -> &Path {
        &self.store_file
    }

    /// Keystore password
    pub fn store_password(&self) -> &str {
        &self.store_password
    }

    /// Key alias
    pub fn key_alias(&self) -> &str {
        &self.key_alias
    }

    /// Key password
    pub fn key_password(&self) -> &str {
        &self.key_password
    }

    /// Render as `key.properties` entries.
    ///
    /// The store file is written as given, so a relative path stays
    /// relative to the app module.
    pub fn to_properties(&self) -> Properties {
        Properties::from_pairs([
            (STORE_PASSWORD, self.store_password.as_str()),
            (KEY_PASSWORD, self.key_password.as_str()),
            (KEY_ALIAS, self.key_alias.as_str()),
            (STORE_FILE, &*self.store_file.to_string_lossy()),
        ])
    }
}

fn require<'a>(props: &'a Properties, key: &'static str, origin: &str) -> Result<&'a str> {
    match props.get(key) {
        None => Err(ConfigurationError::MissingKey {
            key,
            path: origin.to_string(),
        }
        .into()),
        Some("") => Err(ConfigurationError::EmptyValue {
            key,
            path: origin.to_string(),
        }
        .into()),
        Some(value) => Ok(value),
    }
}

impl fmt::Debug for SigningProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningProfile")
            .field("store_file", &self.store_file)
            .field("store_password", &REDACTED)
            .field("key_alias", &self.key_alias)
            .field("key_password", &REDACTED)
            .finish()
    }
}

/// The identity a release build is signed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SigningIdentity {
    /// Credentials from the properties file.
    Production(SigningProfile),
    /// The build tool's debug identity.
    Fallback,
}

impl SigningIdentity {
    /// The production profile, if any
    pub fn profile(&self) -> Option<&SigningProfile> {
        match self {
            SigningIdentity::Production(profile) => Some(profile),
            SigningIdentity::Fallback => None,
        }
    }
}

/// Write a `key.properties` file for `profile`.
///
/// The file is created with mode 0600 on Unix, also when overwriting.
///
/// # Errors
///
/// Returns `Error::AlreadyExists` if the file exists and `force` is false,
/// or an I/O error if the write fails.
pub fn write_key_properties(path: &Path, profile: &SigningProfile, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::AlreadyExists(path.to_path_buf()));
    }

    let content = Zeroizing::new(profile.to_properties().to_string());

    #[cfg(unix)]
    {
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .mode(0o600)
            .open(path)?;
        // An existing file keeps its old mode on open; tighten before writing.
        file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
        file.write_all(content.as_bytes())?;
        file.flush()?;
    }

    #[cfg(not(unix))]
    {
        std::fs::write(path, content.as_bytes())?;
    }

    debug!(path = %path.display(), "wrote key.properties");

    Ok(())
}
