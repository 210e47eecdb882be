//! Filesystem properties source.

use std::path::PathBuf;

use tracing::debug;

use super::PropertiesSource;
use crate::core::properties::Properties;
use crate::error::{ConfigurationError, PropertiesError, Result};

/// A properties file on disk.
///
/// Missing files load as `None` after a single existence check; the file is
/// only opened when it is there.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PropertiesSource for FileSource {
    fn load(&self) -> Result<Option<Properties>> {
        let exists = self.path.try_exists().map_err(|e| {
            ConfigurationError::MalformedProperties {
                path: self.describe(),
                source: PropertiesError::ReadFile(e),
            }
        })?;
        debug!(path = %self.path.display(), exists, "checking properties file");

        if !exists {
            return Ok(None);
        }

        let props = Properties::load(&self.path).map_err(|source| {
            ConfigurationError::MalformedProperties {
                path: self.describe(),
                source,
            }
        })?;
        debug!(entries = props.len(), "properties loaded");

        Ok(Some(props))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
