use std::process::ExitCode;

use anyhow::Error;
use tracing::info;

use crate::{
    cli::LaunchProfile,
    launcher::{
        args::derive_launch_args,
        build::{ensure_artifact, BuildOutcome},
        config::LauncherConfig,
        process::{exit_code_for, launch},
    },
    lib::{
        lock::LaunchLock,
        telemetry::{emit_launch, LaunchTelemetry},
    },
};

/// Bundles a launcher error message with the exit code reported for it.
#[derive(Debug)]
pub struct RuntimeExit {
    message: String,
    exit_code: ExitCode,
}

impl RuntimeExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:?}"),
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

/// Launcher progress, logged on every transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchStage {
    ConfigLoaded,
    ArgsBuilt,
    BuildSkipped,
    BuildRan,
    ProcessLaunched,
    Terminal,
}

impl LaunchStage {
    pub const fn as_str(&self) -> &'static str {
        match self {
            LaunchStage::ConfigLoaded => "config_loaded",
            LaunchStage::ArgsBuilt => "args_built",
            LaunchStage::BuildSkipped => "build_skipped",
            LaunchStage::BuildRan => "build_ran",
            LaunchStage::ProcessLaunched => "process_launched",
            LaunchStage::Terminal => "terminal",
        }
    }
}

impl From<BuildOutcome> for LaunchStage {
    fn from(outcome: BuildOutcome) -> Self {
        match outcome {
            BuildOutcome::Skipped => LaunchStage::BuildSkipped,
            BuildOutcome::Built => LaunchStage::BuildRan,
        }
    }
}

fn enter(stage: LaunchStage) {
    info!(target: "bot_launcher::runtime", stage = stage.as_str(), "Launcher stage");
}

/// Derive arguments, pass the build gate and run the bot to completion.
///
/// Returns the child's exit code. Every failure before the child starts is fatal.
pub async fn run_launcher(
    profile: &LaunchProfile,
    config: LauncherConfig,
) -> Result<ExitCode, RuntimeExit> {
    enter(LaunchStage::ConfigLoaded);

    let args = derive_launch_args(&config.bot, &config.source_path)
        .map_err(RuntimeExit::from_error)?;
    enter(LaunchStage::ArgsBuilt);

    let lock = LaunchLock::acquire(&profile.lock_path).map_err(RuntimeExit::from_error)?;

    let outcome = ensure_artifact(&config.build)
        .await
        .map_err(RuntimeExit::from_error)?;
    enter(outcome.into());

    emit_launch(&LaunchTelemetry {
        artifact_path: config.build.artifact_path.to_string_lossy().as_ref(),
        config_path: config.source_path.to_string_lossy().as_ref(),
        lock_path: lock.lock_path().to_string_lossy().as_ref(),
        build: outcome.as_str(),
        launch_args: &args,
    });
    enter(LaunchStage::ProcessLaunched);

    let status = launch(&config.build.artifact_path, &args)
        .await
        .map_err(RuntimeExit::from_error)?;
    enter(LaunchStage::Terminal);

    drop(lock);
    Ok(exit_code_for(status))
}
