//! Resolve command.
//!
//! Prints the identity a release build would be signed with.

use std::path::Path;

use serde_json::{json, Value};
use tracing::info;

use crate::cli::output;
use crate::core::constants::REDACTED;
use crate::core::profile::SigningIdentity;
use crate::core::resolver::{Resolution, Resolver};
use crate::core::settings::Settings;
use crate::error::Result;

/// Resolve signing for `project` and print it.
pub fn execute(project: &Path, json: bool, reveal: bool, strict: bool) -> Result<()> {
    let settings = Settings::load(project)?;
    let resolution = resolve(project, &settings, strict)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&to_json(&resolution, reveal))?);
    } else {
        print(&resolution, reveal);
    }

    Ok(())
}

/// Run the resolver for `project`.
///
/// `strict` forces `require_production` on top of the settings file.
pub fn resolve(project: &Path, settings: &Settings, strict: bool) -> Result<Resolution> {
    let require_production = settings.require_production || strict;
    info!(project = %project.display(), require_production, "resolving release signing");

    Resolver::for_project(project, settings)
        .require_production(require_production)
        .resolve()
}

fn secret(value: &str, reveal: bool) -> &str {
    if reveal {
        value
    } else {
        REDACTED
    }
}

/// JSON view of a resolution. Passwords are redacted unless `reveal`.
pub fn to_json(resolution: &Resolution, reveal: bool) -> Value {
    match &resolution.identity {
        SigningIdentity::Production(profile) => json!({
            "identity": "production",
            "source": resolution.source,
            "storeFile": profile.store_file().display().to_string(),
            "storePassword": secret(profile.store_password(), reveal),
            "keyAlias": profile.key_alias(),
            "keyPassword": secret(profile.key_password(), reveal),
            "keystore": resolution.keystore,
        }),
        SigningIdentity::Fallback => json!({
            "identity": "fallback",
            "source": resolution.source,
        }),
    }
}

fn print(resolution: &Resolution, reveal: bool) {
    match &resolution.identity {
        SigningIdentity::Production(profile) => {
            output::success("release signing");
            output::kv("source", output::path(&resolution.source));
            output::kv("storeFile", output::path(profile.store_file().display()));
            output::kv("storePassword", secret(profile.store_password(), reveal));
            output::kv("keyAlias", profile.key_alias());
            output::kv("keyPassword", secret(profile.key_password(), reveal));
            if let Some(kind) = resolution.keystore {
                output::kv("keystore", kind);
            }
        }
        SigningIdentity::Fallback => {
            output::warn("debug signing");
            output::kv("source", format!("{} (not found)", output::path(&resolution.source)));
        }
    }
}
