//! Environment variable config source

use crate::domain::config::AppConfig;

pub const ENV_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_MAX_UPLOAD_MB: &str = "MAX_UPLOAD_MB";
pub const ENV_MODEL: &str = "TRANSCRIBE_MODEL";
pub const ENV_API_BASE_URL: &str = "OPENAI_BASE_URL";
pub const ENV_ALLOWED_EXTENSIONS: &str = "ALLOWED_AUDIO_EXTENSIONS";
pub const ENV_BIND_ADDRESS: &str = "BIND_ADDRESS";

/// Read configuration from the process environment
pub fn env_config() -> AppConfig {
    config_from_lookup(|key| std::env::var(key).ok())
}

/// Build a config from any variable lookup. Empty values count as unset.
pub fn config_from_lookup<F>(lookup: F) -> AppConfig
where
    F: Fn(&str) -> Option<String>,
{
    let var = |key: &str| {
        lookup(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let max_upload_mb = var(ENV_MAX_UPLOAD_MB).and_then(|raw| match raw.parse::<f64>() {
        Ok(mb) => Some(mb),
        Err(_) => {
            tracing::warn!(value = %raw, "Ignoring unparsable {}", ENV_MAX_UPLOAD_MB);
            None
        }
    });

    let allowed_extensions = var(ENV_ALLOWED_EXTENSIONS).map(|raw| {
        raw.split(',')
            .map(str::trim)
            .filter(|ext| !ext.is_empty())
            .map(str::to_string)
            .collect::<Vec<_>>()
    });

    AppConfig {
        api_key: var(ENV_API_KEY),
        max_upload_mb,
        model: var(ENV_MODEL),
        api_base_url: var(ENV_API_BASE_URL),
        allowed_extensions,
        bind_address: var(ENV_BIND_ADDRESS),
    }
}
