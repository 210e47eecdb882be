//! Error types.
//!
//! One enum per concern, wrapped by the top-level [`Error`].

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Properties(#[from] PropertiesError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("file already exists: {} (use --force to overwrite)", .0.display())]
    AlreadyExists(PathBuf),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// The signing configuration exists but cannot be used.
///
/// Always fatal: a release must not be packaged with a partially specified
/// identity.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("{path}: missing required key '{key}'")]
    MissingKey { key: &'static str, path: String },

    #[error("{path}: key '{key}' has an empty value")]
    EmptyValue { key: &'static str, path: String },

    #[error("{path}: {source}")]
    MalformedProperties {
        path: String,
        #[source]
        source: PropertiesError,
    },

    #[error("keystore not found: {}", .0.display())]
    KeystoreNotFound(PathBuf),

    #[error("keystore is not readable: {}: {source}", .path.display())]
    KeystoreUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no release keystore configured: {0} does not exist")]
    ProductionRequired(String),
}

/// Errors from reading or parsing a properties file.
#[derive(Error, Debug)]
pub enum PropertiesError {
    #[error("failed to read properties file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("line {line}: {reason}")]
    InvalidEscape { line: usize, reason: String },
}

/// Errors from `signpost.toml`.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse settings file: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
