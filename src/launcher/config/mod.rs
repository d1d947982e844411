//! Load the launcher configuration document.
use std::path::PathBuf;

use serde::Deserialize;
use tracing::{error, info};

use crate::lib::errors::ConfigError;

pub mod bot;
pub mod build;
pub mod telemetry;

pub use bot::{
    BotConfig, DEFAULT_CACHE_SIZE, DEFAULT_LISTEN_PORT, DEFAULT_LOG_FILE, DEFAULT_LOG_LEVEL,
};
pub use build::{
    parse_build_section, BuildSection, RawBuildSection, DEFAULT_ARTIFACT_PATH,
    DEFAULT_BUILD_TARGET, DEFAULT_LDFLAGS, DEFAULT_OUTPUT_DIR, DEFAULT_TOOLCHAIN,
};

pub const CONFIG_ENV_KEY: &str = "BOT_LAUNCHER_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config.yml";

/// Top-level configuration container.
#[derive(Debug, Clone)]
pub struct LauncherConfig {
    pub bot: BotConfig,
    pub build: BuildSection,
    pub source_path: PathBuf,
}

/// The `build` table; every other top-level key belongs to `BotConfig`.
#[derive(Debug, Deserialize)]
struct RawBuildDocument {
    build: Option<RawBuildSection>,
}

impl LauncherConfig {
    /// Load configuration from a specific path. The format follows the file extension.
    ///
    /// Keys are matched case-sensitively and scalar values are coerced the way
    /// `config::Value` does (`123` reads as the string `"123"`, `"9000"` as a port).
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        info!(
            target: "bot_launcher::config",
            path = %path.display(),
            "Starting configuration load"
        );

        // `Config::builder()` lowercases keys while merging sources, so the
        // file source is collected directly.
        let source = config::File::from(path.clone());
        let table = config::Source::collect(&source).map_err(|err| {
            let error = ConfigError::from_source_error(path.clone(), err);
            error!(
                target: "bot_launcher::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;
        let document = config::Value::new(None, table);

        let (bot, raw_build) = deserialize_document(document).map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "bot_launcher::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        let config = Self {
            bot,
            build: parse_build_section(raw_build.build),
            source_path: path,
        };

        telemetry::log_loaded(&config);
        Ok(config)
    }
}

fn deserialize_document(
    document: config::Value,
) -> Result<(BotConfig, RawBuildDocument), config::ConfigError> {
    let bot = document.clone().try_deserialize::<BotConfig>()?;
    let build = document.try_deserialize::<RawBuildDocument>()?;
    Ok((bot, build))
}
