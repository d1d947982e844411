//! Single-instance locking for the launcher.
//!
//! Two launchers racing on the same checkout would both try to build the bot
//! and bind the same listen port. An exclusive `fs2` lock on a lock file is
//! held for the launcher's lifetime and released when the guard drops.

use std::{
    fs::{self, File, OpenOptions},
    io,
    path::{Path, PathBuf},
};

use chrono::Utc;
use fs2::FileExt;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::lib::errors::LockError;

/// Default lock file, resolved against the current directory.
pub const DEFAULT_LOCK_FILE: &str = ".bot-launcher.lock";

/// Guard holding the exclusive launcher lock.
pub struct LaunchLock {
    _file: File,
    lock_path: PathBuf,
    sidecar_path: Option<PathBuf>,
}

#[derive(Serialize)]
struct LockSidecar {
    pid: u32,
    timestamp: String,
}

impl LaunchLock {
    /// Try to take the lock without blocking.
    pub fn acquire(lock_path: &Path) -> Result<Self, LockError> {
        if let Some(parent) = lock_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| LockError::Create {
                    path: lock_path.to_path_buf(),
                    source,
                })?;
            }
        }

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(lock_path)
            .map_err(|source| LockError::Create {
                path: lock_path.to_path_buf(),
                source,
            })?;

        match file.try_lock_exclusive() {
            Ok(()) => {}
            Err(err) if is_contended(&err) => {
                return Err(LockError::Locked {
                    path: lock_path.to_path_buf(),
                })
            }
            Err(source) => {
                return Err(LockError::Acquire {
                    path: lock_path.to_path_buf(),
                    source,
                })
            }
        }

        info!(
            target: "bot_launcher::lock",
            path = %lock_path.display(),
            "Acquired launcher lock"
        );

        Ok(Self {
            _file: file,
            lock_path: lock_path.to_path_buf(),
            sidecar_path: write_sidecar(lock_path),
        })
    }

    pub fn lock_path(&self) -> &Path {
        &self.lock_path
    }
}

impl Drop for LaunchLock {
    fn drop(&mut self) {
        debug!(
            target: "bot_launcher::lock",
            path = %self.lock_path.display(),
            "Releasing launcher lock"
        );
        if let Some(path) = &self.sidecar_path {
            if let Err(err) = fs::remove_file(path) {
                debug!(
                    target: "bot_launcher::lock",
                    path = %path.display(),
                    error = %err,
                    "Failed to remove lock sidecar"
                );
            }
        }
        // flock is released when `_file` closes.
    }
}

impl std::fmt::Debug for LaunchLock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LaunchLock")
            .field("lock_path", &self.lock_path)
            .finish()
    }
}

fn is_contended(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::WouldBlock
        || err.raw_os_error() == fs2::lock_contended_error().raw_os_error()
}

/// Sidecar path: `<lock>.json` next to the lock file.
fn sidecar_path_for(lock_path: &Path) -> PathBuf {
    let ext = lock_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("lock");
    lock_path.with_extension(format!("{ext}.json"))
}

fn write_sidecar(lock_path: &Path) -> Option<PathBuf> {
    let sidecar = LockSidecar {
        pid: std::process::id(),
        timestamp: Utc::now().to_rfc3339(),
    };
    let sidecar_path = sidecar_path_for(lock_path);
    match serde_json::to_vec_pretty(&sidecar)
        .map_err(io::Error::other)
        .and_then(|payload| fs::write(&sidecar_path, payload))
    {
        Ok(()) => Some(sidecar_path),
        Err(err) => {
            warn!(
                target: "bot_launcher::lock",
                path = %sidecar_path.display(),
                error = %err,
                "Failed to write lock sidecar"
            );
            None
        }
    }
}
