//! CLI entrypoint module structure.
use anyhow::Result;
use serde_json::json;

use crate::{
    launcher::{config::LauncherConfig, derive_launch_args},
    lib::telemetry::redact_launch_args,
};

pub mod args;
pub mod profile;

pub use args::{CliCommand, LaunchProfileArgs, ParsedCommand, PrintArgsArgs};
pub use profile::{resolve_config_path, resolve_lock_path, ConfigSource, LaunchProfile};

/// Execute CLI command mode and return a user-facing result payload.
pub fn execute_cli_command(command: CliCommand, profile: &LaunchProfile) -> Result<String> {
    match command {
        CliCommand::PrintArgs(args) => {
            let config = LauncherConfig::load_from_path(profile.config_path.clone())?;
            print_args_payload(&config, args.reveal_token)
        }
    }
}

/// Derive the bot command line and format it as a JSON payload.
fn print_args_payload(config: &LauncherConfig, reveal_token: bool) -> Result<String> {
    let launch_args = derive_launch_args(&config.bot, &config.source_path)?;
    let args = if reveal_token {
        launch_args
    } else {
        redact_launch_args(&launch_args)
    };

    let payload = json!({
        "config_path": config.source_path.to_string_lossy(),
        "artifact_path": config.build.artifact_path.to_string_lossy(),
        "args": args,
    });

    Ok(serde_json::to_string_pretty(&payload)?)
}
