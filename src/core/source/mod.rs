//! Properties sources.
//!
//! The resolver never touches the filesystem directly. It asks a
//! `PropertiesSource` for an optional mapping, so resolution can run against
//! a real `key.properties` file or a fixed in-memory mapping.
//!
//! ## Adding a New Source
//!
//! 1. Implement the `PropertiesSource` trait
//! 2. Add the implementation in a new file (e.g., `env.rs`)
//! 3. Re-export from this module

use crate::core::properties::Properties;
use crate::error::Result;

mod fs;
mod memory;

pub use fs::FileSource;
pub use memory::MemorySource;

/// Loader for an optional key/value mapping.
pub trait PropertiesSource {
    /// Load the mapping.
    ///
    /// # Returns
    ///
    /// `None` when the source does not exist. That is not an error: the
    /// caller falls back to the debug identity.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::MalformedProperties` if the source exists
    /// but cannot be read or parsed.
    fn load(&self) -> Result<Option<Properties>>;

    /// Human-readable name used in logs and error messages.
    fn describe(&self) -> String;
}

impl<S: PropertiesSource + ?Sized> PropertiesSource for &S {
    fn load(&self) -> Result<Option<Properties>> {
        (**self).load()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<S: PropertiesSource + ?Sized> PropertiesSource for Box<S> {
    fn load(&self) -> Result<Option<Properties>> {
        (**self).load()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
