//! In-memory properties source.

use super::PropertiesSource;
use crate::core::properties::Properties;
use crate::error::Result;

/// A fixed, optional mapping.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    props: Option<Properties>,
}

impl MemorySource {
    /// A source that does not exist.
    pub fn absent() -> Self {
        Self { props: None }
    }

    /// A source holding `props`.
    pub fn present(props: Properties) -> Self {
        Self { props: Some(props) }
    }
}

impl PropertiesSource for MemorySource {
    fn load(&self) -> Result<Option<Properties>> {
        Ok(self.props.clone())
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}
