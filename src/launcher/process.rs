//! Start the bot and wait for it.
use std::{
    path::Path,
    process::{ExitCode, ExitStatus, Stdio},
};

use tokio::process::Command;
use tracing::info;

use crate::lib::errors::LaunchError;

/// Spawn `artifact` with `args`, inheriting stdio, and block until it exits.
pub async fn launch(artifact: &Path, args: &[String]) -> Result<ExitStatus, LaunchError> {
    let status = Command::new(artifact)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
        .map_err(|source| LaunchError::ProcessStart {
            path: artifact.to_path_buf(),
            source,
        })?;

    info!(
        target: "bot_launcher::process",
        artifact = %artifact.display(),
        exit_code = status.code(),
        success = status.success(),
        "Bot process exited"
    );
    Ok(status)
}

/// Map the child's status onto the launcher's own exit code.
///
/// Once the child has started, the launcher's status is the child's status.
/// Launcher failures, including a failed build, always exit 1 and print their
/// cause on stderr before any child exists; a child that exits 1 itself is only
/// distinguishable by that missing diagnostic and by the `Bot process exited` log event.
pub fn exit_code_for(status: ExitStatus) -> ExitCode {
    ExitCode::from(exit_code_value(status))
}

/// Codes outside `0..=255` become 1; a Unix signal `n` becomes `128 + n`.
fn exit_code_value(status: ExitStatus) -> u8 {
    if let Some(code) = status.code() {
        return u8::try_from(code).unwrap_or(1);
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return u8::try_from(128 + signal).unwrap_or(1);
        }
    }

    1
}

#[cfg(all(test, unix))]
mod tests {
    use std::os::unix::process::ExitStatusExt;

    use super::*;

    #[tokio::test]
    async fn missing_executable_is_a_start_error() {
        let error = launch(Path::new("/nonexistent/bin/src"), &[])
            .await
            .expect_err("executable does not exist");
        match error {
            LaunchError::ProcessStart { path, .. } => {
                assert_eq!(path, Path::new("/nonexistent/bin/src"))
            }
            other => panic!("Unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn child_status_is_returned() {
        let status = launch(Path::new("false"), &["-debug".to_string()])
            .await
            .expect("`false` starts");
        assert_eq!(status.code(), Some(1));
    }

    #[test]
    fn exit_codes_are_forwarded() {
        assert_eq!(exit_code_value(ExitStatus::from_raw(0)), 0);
        assert_eq!(exit_code_value(ExitStatus::from_raw(7 << 8)), 7);
    }

    #[test]
    fn signals_map_above_128() {
        // SIGTERM
        assert_eq!(exit_code_value(ExitStatus::from_raw(15)), 143);
    }
}
