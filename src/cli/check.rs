//! Check command - validate release signing configuration.
//!
//! Any `ConfigurationError` fails the command. Hygiene problems with the
//! properties file itself are reported as warnings.

use std::path::Path;

use glob::{MatchOptions, Pattern};
use tracing::debug;

use crate::cli::{output, resolve};
use crate::core::constants::KEY_PROPERTIES_FILE;
use crate::core::profile::SigningIdentity;
use crate::core::settings::Settings;
use crate::error::Result;

/// Validate signing for `project`.
pub fn execute(project: &Path, strict: bool) -> Result<()> {
    let settings = Settings::load(project)?;
    let resolution = resolve::resolve(project, &settings, strict)?;

    match &resolution.identity {
        SigningIdentity::Production(profile) => {
            let keystore = resolution
                .keystore
                .map(|kind| format!(", {} keystore", kind))
                .unwrap_or_default();
            output::success(&format!(
                "release signing with key {}{}",
                profile.key_alias(),
                keystore
            ));

            let properties = settings.properties_path(project);
            for warning in hygiene_warnings(project, &properties)? {
                output::warn(&warning);
            }
        }
        SigningIdentity::Fallback => {
            output::warn(&format!(
                "{} not found, release builds use debug signing",
                output::path(&resolution.source)
            ));
        }
    }

    Ok(())
}

/// Problems with how the properties file is stored.
///
/// Checks that it is listed in the project's `.gitignore` and, on Unix,
/// that it is not readable by group or others.
pub fn hygiene_warnings(project: &Path, properties: &Path) -> Result<Vec<String>> {
    let mut warnings = Vec::new();

    let gitignore = project.join(".gitignore");
    let file_name = properties
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| KEY_PROPERTIES_FILE.to_string());
    let relative = properties
        .strip_prefix(project)
        .unwrap_or(properties)
        .to_string_lossy()
        .replace('\\', "/");
    let ignored = if gitignore.exists() {
        is_ignored(&std::fs::read_to_string(&gitignore)?, &relative, &file_name)
    } else {
        false
    };
    debug!(ignored, "gitignore check");
    if !ignored {
        warnings.push(format!("{} is not listed in .gitignore", file_name));
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let mode = std::fs::metadata(properties)?.permissions().mode() & 0o777;
        if mode & 0o077 != 0 {
            warnings.push(format!(
                "{} has permissions {:o}, expected 600",
                file_name, mode
            ));
        }
    }

    Ok(warnings)
}

/// Whether `.gitignore` contents exclude the file at `relative`.
///
/// Supports `*` style patterns, a leading `/` or `**/`, and `!` negation.
/// Directory patterns are not followed.
fn is_ignored(gitignore: &str, relative: &str, file_name: &str) -> bool {
    let options = MatchOptions {
        require_literal_separator: true,
        ..MatchOptions::new()
    };

    let mut ignored = false;
    for line in gitignore.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') || line.ends_with('/') {
            continue;
        }

        let (negated, line) = match line.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, line),
        };
        let (anchored, body) = match line.strip_prefix('/') {
            Some(rest) => (true, rest),
            None => (false, line.strip_prefix("**/").unwrap_or(line)),
        };

        let Ok(pattern) = Pattern::new(body) else {
            continue;
        };
        let matched = if !anchored && !body.contains('/') {
            pattern.matches_with(file_name, options)
        } else {
            pattern.matches_with(relative, options)
        };
        if matched {
            ignored = !negated;
        }
    }

    ignored
}
