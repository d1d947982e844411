//! Derive the bot's command line from the configuration.
//!
//! Flags use the single-dash `-name=value` form the bot's flag parser expects,
//! in a fixed order. `-debug` is presence-only and comes last.
use std::path::Path;

use tracing::warn;

use crate::{launcher::config::BotConfig, lib::errors::ConfigError};

/// Characters that break the bot's `[a,b]` list parser. They are passed through unescaped.
const LIST_DELIMITERS: [char; 3] = [',', '[', ']'];

/// Build the ordered argument list for the bot process.
///
/// `path` is only used to name the document in `MissingField` errors.
pub fn derive_launch_args(bot: &BotConfig, path: &Path) -> Result<Vec<String>, ConfigError> {
    let token = required(bot.api_token.as_deref(), "api_token", path)?;
    let host_url = required(bot.host_url.as_deref(), "host_url", path)?;
    let instance_urls = required(
        bot.model_instance_urls.as_deref(),
        "model_instance_urls",
        path,
    )?;

    let mut args = vec![
        format!("-token={token}"),
        format!("-host-url={host_url}"),
        format!("-listen-port={}", bot.listen_port()),
        format!("-cache-size={}", bot.cache_size()),
        format!("-log-file={}", bot.log_file()),
        format!("-log-level={}", bot.log_level()),
        format!("-model-instance-url={}", encode_instance_urls(instance_urls)),
    ];

    if bot.debug() {
        args.push("-debug".to_string());
    }

    Ok(args)
}

/// `["a", "b"]` becomes `[a,b]`; an empty list becomes `[]`.
pub fn encode_instance_urls(urls: &[String]) -> String {
    for url in urls.iter().filter(|url| url.contains(LIST_DELIMITERS)) {
        warn!(
            target: "bot_launcher::args",
            url = %url,
            "Model instance URL contains a list delimiter and will be split by the bot"
        );
    }
    format!("[{}]", urls.join(","))
}

fn required<'a, T: ?Sized>(
    value: Option<&'a T>,
    field: &'static str,
    path: &Path,
) -> Result<&'a T, ConfigError> {
    value.ok_or_else(|| ConfigError::MissingField {
        path: path.to_path_buf(),
        field,
    })
}
