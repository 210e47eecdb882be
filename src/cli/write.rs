//! Write command.
//!
//! Generates `key.properties` for a release keystore, prompting for
//! passwords with hidden input when they are not supplied.

use std::io::{self, IsTerminal};
use std::path::Path;

use dialoguer::Password;
use tracing::info;
use zeroize::Zeroizing;

use crate::cli::output;
use crate::core::keystore;
use crate::core::profile::{self, SigningProfile};
use crate::core::settings::Settings;
use crate::error::{Error, Result};

/// Arguments for `signpost write`.
pub struct Args {
    pub store_file: String,
    pub alias: String,
    pub store_password: Option<String>,
    pub key_password: Option<String>,
    pub force: bool,
}

/// Write `key.properties` into `project`.
pub fn execute(project: &Path, args: Args) -> Result<()> {
    if !project.is_dir() {
        return Err(Error::Other(format!(
            "project directory not found: {}",
            project.display()
        )));
    }

    let settings = Settings::load(project)?;
    let interactive = io::stdin().is_terminal();

    let store_password = match args.store_password {
        Some(password) => Zeroizing::new(password),
        None if interactive => Zeroizing::new(
            Password::new()
                .with_prompt("Keystore password")
                .interact()?,
        ),
        None => {
            return Err(Error::Other(
                "keystore password required: pass --store-password or set SIGNPOST_STORE_PASSWORD"
                    .to_string(),
            ));
        }
    };

    let key_password = match args.key_password {
        Some(password) => Zeroizing::new(password),
        None if interactive => {
            let entered = Zeroizing::new(
                Password::new()
                    .with_prompt("Key password (empty: same as keystore)")
                    .allow_empty_password(true)
                    .interact()?,
            );
            if entered.is_empty() {
                store_password.clone()
            } else {
                entered
            }
        }
        None => store_password.clone(),
    };

    let profile = SigningProfile::new(
        args.store_file.as_str(),
        store_password.as_str(),
        args.alias.as_str(),
        key_password.as_str(),
    )?;

    let keystore_path =
        keystore::resolve_store_path(&settings.store_base_dir(project), &args.store_file);
    if let Err(e) = keystore::probe(&keystore_path) {
        output::warn(&e.to_string());
    }

    let path = settings.properties_path(project);
    info!(path = %path.display(), "writing key.properties");
    profile::write_key_properties(&path, &profile, args.force)?;

    output::success(&format!("wrote {}", output::path(path.display())));
    output::hint("keep this file out of version control");

    Ok(())
}
