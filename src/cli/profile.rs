//! LaunchProfile and config/lock path resolution.
use std::{env, path::PathBuf};

use anyhow::Result;

use crate::{
    launcher::config::{CONFIG_ENV_KEY, DEFAULT_CONFIG_PATH},
    lib::{lock::DEFAULT_LOCK_FILE, paths::absolutize},
};

/// Where the configuration path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Cli,
    Env,
    Default,
}

/// Resolved launch profile.
#[derive(Debug, Clone)]
pub struct LaunchProfile {
    pub config_path: PathBuf,
    pub config_source: ConfigSource,
    pub lock_path: PathBuf,
}

/// Resolve config path in the order: CLI override → env var → default.
pub fn resolve_config_path(override_path: Option<PathBuf>) -> Result<(PathBuf, ConfigSource)> {
    let (path, source) = select_config_path(override_path, env::var_os(CONFIG_ENV_KEY));
    Ok((absolutize(path)?, source))
}

/// Resolve the lock file: CLI override → `.bot-launcher.lock` in the current directory.
pub fn resolve_lock_path(override_path: Option<PathBuf>) -> Result<PathBuf> {
    absolutize(override_path.unwrap_or_else(|| PathBuf::from(DEFAULT_LOCK_FILE)))
}

fn select_config_path(
    override_path: Option<PathBuf>,
    env_value: Option<std::ffi::OsString>,
) -> (PathBuf, ConfigSource) {
    if let Some(path) = override_path {
        return (path, ConfigSource::Cli);
    }

    match env_value {
        Some(value) if !value.is_empty() => (PathBuf::from(value), ConfigSource::Env),
        _ => (PathBuf::from(DEFAULT_CONFIG_PATH), ConfigSource::Default),
    }
}
