use std::{io, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

/// Errors that can occur while loading configuration or resolving required keys.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize the document into a struct.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Required key is missing.
    #[error("Configuration file {path} is missing `{field}`")]
    MissingField { path: PathBuf, field: &'static str },
}

impl ConfigError {
    /// Wrap an error from collecting the file source.
    ///
    /// Syntax errors (`FileParse`) are parse failures; anything else means the
    /// file could not be found or read.
    pub fn from_source_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        match source {
            ConfigLoaderError::FileParse { .. } => Self::Parse { path, source },
            source => Self::FileRead { path, source },
        }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// Failures of the build gate and process launch stages.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Build toolchain `{toolchain}` could not be started: {source}")]
    BuildSpawn {
        toolchain: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Build failed: `{toolchain}` exited with status {exit_code:?}")]
    BuildFailed {
        toolchain: PathBuf,
        exit_code: Option<i32>,
    },
    #[error("Failed to start {path}: {source}")]
    ProcessStart {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Errors from the single-instance lock.
#[derive(Debug, Error)]
pub enum LockError {
    #[error("Another launcher holds the lock {path}")]
    Locked { path: PathBuf },
    #[error("Failed to create lock file {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to acquire lock {path}: {source}")]
    Acquire {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
