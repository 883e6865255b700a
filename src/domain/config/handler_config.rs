//! Resolved configuration passed to every invocation

use std::fmt;

use crate::domain::upload::UploadLimit;

/// Credential for the transcription API. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into().trim().to_string())
    }

    /// The secret itself, for building the authorization header
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Process-wide settings, read once and never mutated
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HandlerConfig {
    /// Missing credential fails every request with 500
    pub api_key: Option<ApiKey>,
    pub upload_limit: UploadLimit,
    /// When set, only files with one of these extensions are forwarded
    pub allowed_extensions: Option<Vec<String>>,
}

impl HandlerConfig {
    /// Config with a credential and default limits
    pub fn with_api_key(key: impl Into<String>) -> Self {
        Self {
            api_key: Some(ApiKey::new(key)),
            ..Default::default()
        }
    }

    /// Replace the upload limit
    pub fn upload_limit_mb(mut self, megabytes: f64) -> Self {
        self.upload_limit = UploadLimit::from_megabytes(megabytes);
        self
    }

    /// Restrict accepted file extensions
    pub fn allow_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_extensions = Some(extensions.into_iter().map(Into::into).collect());
        self
    }
}
