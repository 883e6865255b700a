//! Configuration sources

mod env;
mod toml_store;

pub use env::{
    config_from_lookup, env_config, ENV_ALLOWED_EXTENSIONS, ENV_API_BASE_URL, ENV_API_KEY,
    ENV_BIND_ADDRESS, ENV_MAX_UPLOAD_MB, ENV_MODEL,
};
pub use toml_store::TomlConfigStore;
