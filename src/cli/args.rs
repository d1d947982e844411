//! CLI argument definitions and `LaunchProfile` construction.
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use super::{resolve_config_path, resolve_lock_path, LaunchProfile};

/// Parsed command intent from CLI.
#[derive(Debug, Clone)]
pub enum ParsedCommand {
    Launch(LaunchProfile),
    Cli(CliCommand, LaunchProfile),
}

/// Top-level optional CLI commands.
#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// Print the derived bot command line as JSON without building or launching.
    #[command(about = "Print the derived bot command line as JSON")]
    PrintArgs(PrintArgsArgs),
}

/// Arguments for `print-args`.
#[derive(Debug, Clone, Args)]
pub struct PrintArgsArgs {
    /// Show the API token instead of `<redacted>`.
    #[arg(long, default_value_t = false)]
    pub reveal_token: bool,
}

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Build (if needed) and launch the voice-to-text bot",
    long_about = None
)]
pub struct LaunchProfileArgs {
    /// Path to the configuration file (overrides BOT_LAUNCHER_CONFIG).
    #[arg(long = "config", global = true)]
    pub config_override: Option<PathBuf>,
    /// Lock file guarding against concurrent launchers.
    #[arg(long = "lock-file")]
    pub lock_file_override: Option<PathBuf>,
    /// Optional CLI command mode.
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

impl LaunchProfileArgs {
    /// Build a `LaunchProfile` from CLI args and environment variables.
    pub fn build(&self) -> Result<LaunchProfile> {
        let (config_path, config_source) = resolve_config_path(self.config_override.clone())?;
        let lock_path = resolve_lock_path(self.lock_file_override.clone())?;

        Ok(LaunchProfile {
            config_path,
            config_source,
            lock_path,
        })
    }

    /// Parse CLI args into either launch mode or utility command mode.
    pub fn into_command(self) -> Result<ParsedCommand> {
        let profile = self.build()?;
        match self.command {
            Some(command) => Ok(ParsedCommand::Cli(command, profile)),
            None => Ok(ParsedCommand::Launch(profile)),
        }
    }
}
