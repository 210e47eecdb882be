//! Test support utilities for signpost integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]


#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// `dir` plays the Android project directory (`android/` in a Flutter
/// app). Child processes use `.current_dir()`, so tests can run in
/// parallel.
pub struct Test {
    /// Temporary Android project directory
    pub dir: TempDir,
    /// Temporary home directory
    pub home: TempDir,
}

impl Test {
    /// Create an empty project with an `app` module directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");
        fs::create_dir_all(dir.path().join("app")).expect("failed to create app dir");

        Self { dir, home }
    }

    /// Create a project with a JKS keystore at `app/release.jks` and a
    /// complete `key.properties` pointing at it.
    pub fn with_release_key() -> Self {
        let t = Self::new();
        t.write_keystore("app/release.jks", JKS_HEADER);
        t.write_properties(RELEASE_PROPERTIES);
        t
    }

    /// Path inside the project directory
    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    /// Write `key.properties` with the given contents.
    pub fn write_properties(&self, contents: &str) {
        fs::write(self.path("key.properties"), contents).expect("failed to write key.properties");
    }

    /// Write a keystore file with the given header bytes.
    pub fn write_keystore(&self, rel: &str, bytes: &[u8]) {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create keystore dir");
        }
        fs::write(path, bytes).expect("failed to write keystore");
    }

    /// Write `signpost.toml` with the given contents.
    pub fn write_settings(&self, contents: &str) {
        fs::write(self.path("signpost.toml"), contents).expect("failed to write signpost.toml");
    }

    /// Read a project file as a string.
    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel)).expect("failed to read file")
    }
}
