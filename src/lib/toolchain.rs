//! Shared helpers for building toolchain (`go build`) commands.

use std::{path::Path, process::Stdio};

use tokio::process::Command;

pub struct ToolchainBuildRequest<'a> {
    pub toolchain: &'a Path,
    pub output_dir: &'a str,
    pub ldflags: &'a str,
    pub target: &'a str,
}

/// Build `<toolchain> build -o <output_dir> -ldflags=<ldflags> <target>`.
///
/// Output streams are inherited so compiler diagnostics reach the caller's terminal.
pub fn build_toolchain_command(request: ToolchainBuildRequest<'_>) -> Command {
    let mut command = Command::new(request.toolchain);
    command.kill_on_drop(true);
    command
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    command.arg("build");
    command.arg("-o").arg(request.output_dir);
    command.arg(format!("-ldflags={}", request.ldflags));
    command.arg(request.target);

    command
}
