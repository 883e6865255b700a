//! Configuration domain module

mod app_config;
mod handler_config;

pub use app_config::{AppConfig, DEFAULT_API_BASE_URL, DEFAULT_BIND_ADDRESS, DEFAULT_MODEL};
pub use handler_config::{ApiKey, HandlerConfig};
