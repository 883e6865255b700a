//! Application configuration value object

use serde::{Deserialize, Serialize};

use super::handler_config::{ApiKey, HandlerConfig};
use crate::domain::error::ConfigError;
use crate::domain::upload::UploadLimit;

/// Default transcription model
pub const DEFAULT_MODEL: &str = "whisper-1";

/// Default transcription API base URL
pub const DEFAULT_API_BASE_URL: &str = "https://api.openai.com/v1";

/// Default address for the local HTTP host
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8787";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub max_upload_mb: Option<f64>,
    pub model: Option<String>,
    pub api_base_url: Option<String>,
    pub allowed_extensions: Option<Vec<String>>,
    pub bind_address: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            api_key: None,
            max_upload_mb: None,
            model: Some(DEFAULT_MODEL.to_string()),
            api_base_url: Some(DEFAULT_API_BASE_URL.to_string()),
            allowed_extensions: None,
            bind_address: Some(DEFAULT_BIND_ADDRESS.to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            api_key: other.api_key.or(self.api_key),
            max_upload_mb: other.max_upload_mb.or(self.max_upload_mb),
            model: other.model.or(self.model),
            api_base_url: other.api_base_url.or(self.api_base_url),
            allowed_extensions: other.allowed_extensions.or(self.allowed_extensions),
            bind_address: other.bind_address.or(self.bind_address),
        }
    }

    /// Semantic checks that serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url) = &self.api_base_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::ValidationError {
                    key: "api_base_url".to_string(),
                    message: format!("expected an http(s) URL, got \"{}\"", url),
                });
            }
        }
        if let Some(model) = &self.model {
            if model.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    key: "model".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Get model, or the default if not set
    pub fn model_or_default(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    /// Get API base URL, or the default if not set
    pub fn api_base_url_or_default(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL)
    }

    /// Get bind address, or the default if not set
    pub fn bind_address_or_default(&self) -> &str {
        self.bind_address.as_deref().unwrap_or(DEFAULT_BIND_ADDRESS)
    }

    /// Resolve the settings the request handler needs
    pub fn to_handler_config(&self) -> HandlerConfig {
        HandlerConfig {
            api_key: self
                .api_key
                .as_deref()
                .filter(|k| !k.trim().is_empty())
                .map(ApiKey::new),
            upload_limit: UploadLimit::resolve(self.max_upload_mb),
            allowed_extensions: self
                .allowed_extensions
                .clone()
                .filter(|list| !list.is_empty()),
        }
    }
}
