//! Command-line interface.

pub mod check;
pub mod completions;
pub mod output;
pub mod resolve;
pub mod write;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Signpost - Release signing resolver for Flutter and Android projects.
#[derive(Parser)]
#[command(
    name = "signpost",
    about = "Decide and verify which identity signs a release build",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Android project directory (the one holding key.properties)
    #[arg(
        short,
        long,
        global = true,
        env = "SIGNPOST_PROJECT",
        default_value = "."
    )]
    pub project: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the identity a release build would be signed with
    Resolve {
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Include passwords in the output
        #[arg(long)]
        reveal: bool,
        /// Fail if key.properties is missing instead of using debug signing
        #[arg(long)]
        strict: bool,
    },

    /// Validate the release signing configuration
    Check {
        /// Fail if key.properties is missing instead of using debug signing
        #[arg(long)]
        strict: bool,
    },

    /// Write key.properties for a release keystore
    Write {
        /// Keystore path (relative paths resolve from the app module)
        #[arg(long)]
        store_file: String,
        /// Key alias inside the keystore
        #[arg(long)]
        alias: String,
        /// Keystore password
        #[arg(long, env = "SIGNPOST_STORE_PASSWORD", hide_env_values = true)]
        store_password: Option<String>,
        /// Key password (defaults to the keystore password)
        #[arg(long, env = "SIGNPOST_KEY_PASSWORD", hide_env_values = true)]
        key_password: Option<String>,
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command, project: PathBuf) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Resolve {
            json,
            reveal,
            strict,
        } => resolve::execute(&project, json, reveal, strict),
        Check { strict } => check::execute(&project, strict),
        Write {
            store_file,
            alias,
            store_password,
            key_password,
            force,
        } => write::execute(
            &project,
            write::Args {
                store_file,
                alias,
                store_password,
                key_password,
                force,
            },
        ),
        Completions { shell } => completions::execute(shell),
    }
}
