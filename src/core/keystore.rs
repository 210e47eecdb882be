//! Keystore location and probing.
//!
//! Resolves the `storeFile` path the way the app module would and checks
//! that the file is there to be opened. Nothing here decrypts a keystore.

use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::core::constants::{ASN1_SEQUENCE, JKS_MAGIC};
use crate::error::ConfigurationError;

/// Container format of a keystore, detected from its first bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeystoreKind {
    Jks,
    Pkcs12,
    Unknown,
}

impl KeystoreKind {
    /// Classify a keystore by its leading bytes.
    pub fn detect(header: &[u8]) -> Self {
        if header.starts_with(&JKS_MAGIC) {
            KeystoreKind::Jks
        } else if header.first() == Some(&ASN1_SEQUENCE) {
            KeystoreKind::Pkcs12
        } else {
            KeystoreKind::Unknown
        }
    }
}

impl fmt::Display for KeystoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeystoreKind::Jks => "JKS",
            KeystoreKind::Pkcs12 => "PKCS12",
            KeystoreKind::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Resolve a raw `storeFile` value against `base`.
///
/// Absolute paths are kept, anything else is joined onto `base`. A leading
/// `~` is not expanded, since Gradle's `file()` treats it as a directory name.
pub fn resolve_store_path(base: &Path, raw: &str) -> PathBuf {
    let path = Path::new(raw);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// The home-relative path a keystore path containing a literal `~`
/// directory was probably meant to name.
///
/// Returns `None` when `path` has no `~` component or there is no home
/// directory.
pub fn unexpanded_home(path: &Path) -> Option<PathBuf> {
    let mut components = path.components();
    components.by_ref().find(|c| c.as_os_str() == "~")?;
    dirs::home_dir().map(|home| home.join(components.as_path()))
}

/// Check that `path` is a readable regular file and sniff its format.
///
/// # Errors
///
/// Returns `ConfigurationError::KeystoreNotFound` if nothing is there, or
/// `ConfigurationError::KeystoreUnreadable` if it cannot be opened or read.
pub fn probe(path: &Path) -> Result<KeystoreKind, ConfigurationError> {
    debug!(path = %path.display(), "probing keystore");

    let metadata = match std::fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigurationError::KeystoreNotFound(path.to_path_buf()));
        }
        Err(source) => {
            return Err(ConfigurationError::KeystoreUnreadable {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    if !metadata.is_file() {
        return Err(ConfigurationError::KeystoreUnreadable {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::Other, "not a regular file"),
        });
    }

    let unreadable = |source| ConfigurationError::KeystoreUnreadable {
        path: path.to_path_buf(),
        source,
    };

    let file = std::fs::File::open(path).map_err(unreadable)?;
    let mut header = Vec::with_capacity(JKS_MAGIC.len());
    file.take(JKS_MAGIC.len() as u64)
        .read_to_end(&mut header)
        .map_err(unreadable)?;

    let kind = KeystoreKind::detect(&header);
    debug!(%kind, "keystore detected");

    Ok(kind)
}
