//! Signpost - Release signing resolver for Flutter and Android projects.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use signpost::cli::output;
use signpost::cli::{execute, Cli};
use signpost::core::constants::LOG_ENV;
use signpost::core::keystore;
use signpost::error::{ConfigurationError, Error};

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("signpost=debug")
        } else {
            EnvFilter::new("signpost=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli.command, cli.project) {
        output::error(&e.to_string());
        if let Some(hint) = hint(&e) {
            output::hint(&hint);
        }
        std::process::exit(1);
    }
}

fn hint(e: &Error) -> Option<String> {
    match e {
        Error::Configuration(ConfigurationError::MissingKey { .. })
        | Error::Configuration(ConfigurationError::EmptyValue { .. }) => Some(
            "key.properties needs storeFile, storePassword, keyAlias and keyPassword".to_string(),
        ),
        Error::Configuration(ConfigurationError::KeystoreNotFound(path)) => {
            match keystore::unexpanded_home(path) {
                Some(meant) => Some(format!(
                    "Gradle does not expand ~ in storeFile, use the absolute path {}",
                    meant.display()
                )),
                None => {
                    Some("relative storeFile paths resolve from the app module directory".to_string())
                }
            }
        }
        Error::Configuration(ConfigurationError::ProductionRequired(_)) => {
            Some("run: signpost write --store-file <PATH> --alias <ALIAS>".to_string())
        }
        _ => None,
    }
}
