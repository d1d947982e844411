use tracing::{debug, info};

use crate::cli::ConfigSource;

use super::{LauncherConfig, CONFIG_ENV_KEY, DEFAULT_CONFIG_PATH};

pub fn log_config_source(path: &std::path::Path, source: ConfigSource) {
    match source {
        ConfigSource::Cli => info!(
            target: "bot_launcher::config",
            path = %path.display(),
            "Loading configuration given by --config"
        ),
        ConfigSource::Env => info!(
            target: "bot_launcher::config",
            path = %path.display(),
            "Loading configuration using BOT_LAUNCHER_CONFIG environment variable"
        ),
        ConfigSource::Default => debug!(
            target: "bot_launcher::config",
            path = %path.display(),
            env = CONFIG_ENV_KEY,
            default = DEFAULT_CONFIG_PATH,
            "BOT_LAUNCHER_CONFIG not set; using default config.yml"
        ),
    }
}

pub fn log_loaded(config: &LauncherConfig) {
    info!(
        target: "bot_launcher::config",
        path = %config.source_path.display(),
        listen_port = config.bot.listen_port(),
        cache_size = config.bot.cache_size(),
        log_level = config.bot.log_level(),
        debug = config.bot.debug(),
        model_instance_urls = config.bot.model_instance_urls.as_ref().map_or(0, Vec::len),
        artifact_path = %config.build.artifact_path.display(),
        toolchain = %config.build.toolchain.display(),
        "Configuration file loaded successfully"
    );
}
