//! Signpost - Release signing resolver for Flutter and Android projects.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── resolve       # Print the resolved identity
//! │   ├── check         # Validate signing configuration
//! │   ├── write         # Generate key.properties
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── properties    # key.properties parsing and rendering
//!     ├── source/       # Properties sources
//!     │   ├── fs        # File on disk
//!     │   └── memory    # Fixed mapping
//!     ├── profile       # Signing profile and identity
//!     ├── keystore      # Keystore path resolution and probing
//!     ├── settings      # signpost.toml
//!     └── resolver      # Production or debug signing
//! ```
//!
//! # Example
//!
//! ```no_run
//! use signpost::{resolve_release_signing, SigningIdentity};
//! use std::path::Path;
//!
//! match resolve_release_signing(Path::new("android/key.properties"))? {
//!     SigningIdentity::Production(profile) => println!("release key: {}", profile.key_alias()),
//!     SigningIdentity::Fallback => println!("debug signing"),
//! }
//! # Ok::<(), signpost::error::Error>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::keystore::KeystoreKind;
pub use crate::core::profile::{SigningIdentity, SigningProfile};
pub use crate::core::properties::Properties;
pub use crate::core::resolver::{resolve_release_signing, Resolution, Resolver};
pub use crate::core::settings::Settings;
pub use crate::core::source::{FileSource, MemorySource, PropertiesSource};
pub use crate::error::{Error, Result};
