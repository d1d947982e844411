use serde::Deserialize;

pub const DEFAULT_LISTEN_PORT: u16 = 8080;
pub const DEFAULT_CACHE_SIZE: u64 = 10_000;
pub const DEFAULT_LOG_FILE: &str = "logs/bot.log";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Bot settings as declared in the document.
///
/// Every key stays optional here; required keys are enforced when the
/// argument list is derived.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct BotConfig {
    pub api_token: Option<String>,
    pub host_url: Option<String>,
    pub listen_port: Option<u16>,
    pub cache_size: Option<u64>,
    pub log_file: Option<String>,
    pub log_level: Option<String>,
    pub model_instance_urls: Option<Vec<String>>,
    pub debug: Option<bool>,
}

impl BotConfig {
    pub fn listen_port(&self) -> u16 {
        self.listen_port.unwrap_or(DEFAULT_LISTEN_PORT)
    }

    pub fn cache_size(&self) -> u64 {
        self.cache_size.unwrap_or(DEFAULT_CACHE_SIZE)
    }

    pub fn log_file(&self) -> &str {
        self.log_file.as_deref().unwrap_or(DEFAULT_LOG_FILE)
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn debug(&self) -> bool {
        self.debug.unwrap_or(false)
    }
}
