//! Constants used throughout signpost.
//!
//! Centralizes file names and property keys.

/// Properties file holding release credentials, relative to the Android project.
pub const KEY_PROPERTIES_FILE: &str = "key.properties";

/// Optional settings file, relative to the Android project.
pub const SETTINGS_FILE: &str = "signpost.toml";

/// Application module directory. Relative `storeFile` paths resolve here.
pub const APP_MODULE_DIR: &str = "app";

/// Keystore path key.
pub const STORE_FILE: &str = "storeFile";

/// Keystore password key.
pub const STORE_PASSWORD: &str = "storePassword";

/// Key alias key.
pub const KEY_ALIAS: &str = "keyAlias";

/// Key password key.
pub const KEY_PASSWORD: &str = "keyPassword";

/// Environment variable controlling the log filter.
pub const LOG_ENV: &str = "SIGNPOST_LOG";

/// Placeholder printed instead of a password.
pub const REDACTED: &str = "<redacted>";

/// Magic bytes at the start of a Java KeyStore.
pub const JKS_MAGIC: [u8; 4] = [0xFE, 0xED, 0xFE, 0xED];

/// ASN.1 SEQUENCE tag that opens a PKCS#12 container.
pub const ASN1_SEQUENCE: u8 = 0x30;
