//! Entry point for the bot launcher.
use std::process::ExitCode;

use anyhow::Error;
use bot_launcher::{
    cli::{execute_cli_command, CliCommand, LaunchProfile, LaunchProfileArgs, ParsedCommand},
    launcher::{
        config::{telemetry::log_config_source, LauncherConfig},
        run_launcher, RuntimeExit,
    },
    lib::telemetry,
};
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(code) => code,
        Err(exit) => exit.report(),
    }
}

async fn bootstrap() -> Result<ExitCode, RuntimeExit> {
    telemetry::init_tracing().map_err(RuntimeExit::from_error)?;
    let args = LaunchProfileArgs::parse();
    let command = args.into_command().map_err(RuntimeExit::from_error)?;

    match command {
        ParsedCommand::Launch(profile) => launch(profile).await,
        ParsedCommand::Cli(command, profile) => handle_cli_command(command, &profile),
    }
}

async fn launch(profile: LaunchProfile) -> Result<ExitCode, RuntimeExit> {
    log_config_source(&profile.config_path, profile.config_source);
    let config = LauncherConfig::load_from_path(profile.config_path.clone())
        .map_err(|err| RuntimeExit::from_error(Error::new(err)))?;
    run_launcher(&profile, config).await
}

fn handle_cli_command(
    command: CliCommand,
    profile: &LaunchProfile,
) -> Result<ExitCode, RuntimeExit> {
    let message = execute_cli_command(command, profile).map_err(RuntimeExit::from_error)?;
    println!("{message}");
    Ok(ExitCode::SUCCESS)
}
