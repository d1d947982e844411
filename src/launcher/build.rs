//! Build gate: compile the bot only when its executable is missing.
use tracing::{debug, error, info};

use crate::{
    launcher::config::BuildSection,
    lib::{
        errors::LaunchError,
        paths,
        telemetry::BuildSpan,
        toolchain::{build_toolchain_command, ToolchainBuildRequest},
    },
};

/// What the gate did before launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOutcome {
    /// The artifact already existed; no toolchain was run.
    Skipped,
    /// The toolchain ran and exited with status 0.
    Built,
}

impl BuildOutcome {
    pub const fn as_str(&self) -> &'static str {
        match self {
            BuildOutcome::Skipped => "skipped",
            BuildOutcome::Built => "built",
        }
    }
}

/// Run the toolchain if `build.artifact_path` does not exist.
///
/// An existing artifact is never rebuilt, however old it is.
pub async fn ensure_artifact(build: &BuildSection) -> Result<BuildOutcome, LaunchError> {
    if paths::artifact_present(&build.artifact_path) {
        debug!(
            target: "bot_launcher::build",
            artifact = %build.artifact_path.display(),
            "Artifact present; skipping build"
        );
        return Ok(BuildOutcome::Skipped);
    }

    info!(
        target: "bot_launcher::build",
        artifact = %build.artifact_path.display(),
        toolchain = %build.toolchain.display(),
        target_pattern = %build.target,
        "Compiling Go bot"
    );

    let span = BuildSpan::start(&build.toolchain, &build.artifact_path);
    let mut command = build_toolchain_command(ToolchainBuildRequest {
        toolchain: &build.toolchain,
        output_dir: &build.output_dir,
        ldflags: &build.ldflags,
        target: &build.target,
    });

    let status = match command.status().await {
        Ok(status) => status,
        Err(source) => {
            span.finish("spawn_failed", None);
            return Err(LaunchError::BuildSpawn {
                toolchain: build.toolchain.clone(),
                source,
            });
        }
    };

    if !status.success() {
        span.finish("failed", status.code());
        error!(
            target: "bot_launcher::build",
            exit_code = status.code(),
            "Go build failed"
        );
        return Err(LaunchError::BuildFailed {
            toolchain: build.toolchain.clone(),
            exit_code: status.code(),
        });
    }

    span.finish("succeeded", status.code());
    Ok(BuildOutcome::Built)
}
