//! Release signing resolution.
//!
//! Decides which identity signs a release build: the production profile from
//! the properties source when it exists, otherwise the build tool's debug
//! identity. A source that exists but is incomplete is a fatal
//! `ConfigurationError`; it never degrades to the fallback.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::constants::APP_MODULE_DIR;
use crate::core::keystore::{self, KeystoreKind};
use crate::core::profile::{SigningIdentity, SigningProfile};
use crate::core::settings::Settings;
use crate::core::source::{FileSource, PropertiesSource};
use crate::error::{ConfigurationError, Result};

/// Outcome of a resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Selected identity
    pub identity: SigningIdentity,
    /// Where the properties came from (or would have)
    pub source: String,
    /// Keystore format, when the keystore was probed
    pub keystore: Option<KeystoreKind>,
}

/// Resolves release signing from a properties source.
#[derive(Debug, Clone)]
pub struct Resolver<S> {
    source: S,
    base_dir: PathBuf,
    verify_keystore: bool,
    require_production: bool,
}

impl<S: PropertiesSource> Resolver<S> {
    /// Create a resolver. Relative `storeFile` values resolve against
    /// `base_dir`. Keystore verification is on, fallback is allowed.
    pub fn new(source: S, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            source,
            base_dir: base_dir.into(),
            verify_keystore: true,
            require_production: false,
        }
    }

    /// Check the keystore file exists and is readable
    pub fn verify_keystore(mut self, verify: bool) -> Self {
        self.verify_keystore = verify;
        self
    }

    /// Fail instead of falling back to the debug identity
    pub fn require_production(mut self, require: bool) -> Self {
        self.require_production = require;
        self
    }

    /// Resolve the release signing identity.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` if the source exists but is malformed,
    /// misses a key, has an empty value, or points at an unusable keystore,
    /// and `ConfigurationError::ProductionRequired` if the source is absent
    /// while production signing is required.
    pub fn resolve(&self) -> Result<Resolution> {
        let origin = self.source.describe();

        let Some(props) = self.source.load()? else {
            if self.require_production {
                return Err(ConfigurationError::ProductionRequired(origin).into());
            }
            info!(source = %origin, "no release properties, using debug signing");
            return Ok(Resolution {
                identity: SigningIdentity::Fallback,
                source: origin,
                keystore: None,
            });
        };

        let profile = SigningProfile::from_properties(&props, &self.base_dir, &origin)?;
        debug!(
            store_file = %profile.store_file().display(),
            key_alias = profile.key_alias(),
            "release profile parsed"
        );

        let keystore = if self.verify_keystore {
            Some(keystore::probe(profile.store_file())?)
        } else {
            None
        };

        info!(source = %origin, "using release signing");

        Ok(Resolution {
            identity: SigningIdentity::Production(profile),
            source: origin,
            keystore,
        })
    }
}

impl Resolver<FileSource> {
    /// Build a resolver for an Android project directory using `settings`.
    pub fn for_project(project_dir: &Path, settings: &Settings) -> Self {
        Resolver::new(
            FileSource::new(settings.properties_path(project_dir)),
            settings.store_base_dir(project_dir),
        )
        .verify_keystore(settings.verify_keystore)
        .require_production(settings.require_production)
    }
}

/// Resolve the release signing identity from a properties file.
///
/// Relative `storeFile` values resolve against the `app` directory next to
/// the properties file, and the keystore must be readable.
///
/// # Errors
///
/// See [`Resolver::resolve`].
pub fn resolve_release_signing(properties_file: &Path) -> Result<SigningIdentity> {
    let base = properties_file
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(APP_MODULE_DIR);

    Resolver::new(FileSource::new(properties_file), base)
        .resolve()
        .map(|resolution| resolution.identity)
}
