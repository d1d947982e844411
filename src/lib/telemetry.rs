//! Telemetry initialization and build/launch span helpers.

use std::{path::Path, time::Instant};

use anyhow::Result;
use tracing::{info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};

/// Flag prefix whose value is replaced before launch arguments are logged.
const TOKEN_FLAG_PREFIX: &str = "-token=";
const REDACTED: &str = "<redacted>";

/// Initialize `tracing` and format developer logs.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper to record start and finish of a toolchain build.
pub struct BuildSpan {
    span: Span,
    started_at: Instant,
}

impl BuildSpan {
    /// Start a build span.
    pub fn start(toolchain: &Path, artifact: &Path) -> Self {
        let span = info_span!(
            target: "bot_launcher::build",
            "toolchain_build",
            toolchain = %toolchain.display(),
            artifact = %artifact.display()
        );
        Self {
            span,
            started_at: Instant::now(),
        }
    }

    /// Close the span while recording status and completion info.
    pub fn finish(self, status: &'static str, exit_code: Option<i32>) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        info!(
            target: "bot_launcher::build",
            status = status,
            exit_code = exit_code,
            elapsed_ms = elapsed_ms,
            "Completed toolchain build"
        );
    }
}

/// Fields logged when the child is launched.
#[derive(Debug)]
pub struct LaunchTelemetry<'a> {
    pub artifact_path: &'a str,
    pub config_path: &'a str,
    pub lock_path: &'a str,
    pub build: &'static str,
    pub launch_args: &'a [String],
}

/// Emit the launch event to `tracing` with the token value hidden.
pub fn emit_launch(telemetry: &LaunchTelemetry<'_>) {
    let launch_args = redact_launch_args(telemetry.launch_args);
    info!(
        target: "bot_launcher::runtime",
        artifact_path = telemetry.artifact_path,
        config_path = telemetry.config_path,
        lock_path = telemetry.lock_path,
        build = telemetry.build,
        launch_args = ?launch_args,
        "Launching bot"
    );
}

/// Replace the `-token=` value so the API token never reaches the logs.
pub fn redact_launch_args(args: &[String]) -> Vec<String> {
    args.iter()
        .map(|arg| {
            if arg.starts_with(TOKEN_FLAG_PREFIX) {
                format!("{TOKEN_FLAG_PREFIX}{REDACTED}")
            } else {
                arg.clone()
            }
        })
        .collect()
}
