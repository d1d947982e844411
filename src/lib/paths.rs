//! Shared helpers reused across modules (e.g., path resolution).

use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

/// Join relative paths onto the current directory; absolute paths pass through.
pub fn absolutize(path: PathBuf) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path);
    }

    let cwd = env::current_dir().context("failed to obtain current directory")?;
    Ok(cwd.join(path))
}

/// Returns true if anything exists at `path`. Age and contents are not inspected.
pub fn artifact_present(path: &Path) -> bool {
    path.exists()
}
