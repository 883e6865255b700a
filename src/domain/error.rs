//! Domain error types

use thiserror::Error;

use super::upload::UploadLimit;

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },
}

/// Reasons an inbound request is turned away before a transcript is produced.
///
/// Every variant maps to exactly one HTTP status via [`RequestError::status`];
/// the `Display` text is what the caller sees in the `error` field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    #[error("Method not allowed.")]
    MethodNotAllowed,

    #[error("Missing OPENAI_API_KEY environment variable.")]
    MissingCredential,

    #[error("Missing Content-Type header.")]
    MissingContentType,

    #[error("Unsupported Content-Type. Expected multipart/form-data.")]
    UnsupportedContentType,

    #[error("Audio file exceeds the {limit} limit.")]
    PayloadTooLarge { limit: UploadLimit },

    #[error("Missing request body.")]
    MissingBody,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Failed to parse multipart data: {0}")]
    Malformed(String),

    #[error("No audio file provided.")]
    NoAudioFile,

    #[error("Unsupported file type. Please upload an audio file.")]
    UnsupportedFileType,
}

impl RequestError {
    /// HTTP status code reported for this error
    pub const fn status(&self) -> u16 {
        match self {
            Self::MethodNotAllowed => 405,
            Self::MissingCredential => 500,
            Self::PayloadTooLarge { .. } => 413,
            Self::MissingContentType
            | Self::UnsupportedContentType
            | Self::MissingBody
            | Self::InvalidBody(_)
            | Self::Malformed(_)
            | Self::NoAudioFile
            | Self::UnsupportedFileType => 400,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_are_bad_requests() {
        assert_eq!(RequestError::MissingContentType.status(), 400);
        assert_eq!(RequestError::NoAudioFile.status(), 400);
        assert_eq!(RequestError::Malformed("x".into()).status(), 400);
    }

    #[test]
    fn method_and_credential_statuses() {
        assert_eq!(RequestError::MethodNotAllowed.status(), 405);
        assert_eq!(RequestError::MissingCredential.status(), 500);
    }

    #[test]
    fn too_large_names_the_limit() {
        let err = RequestError::PayloadTooLarge {
            limit: UploadLimit::from_megabytes(10.0),
        };
        assert_eq!(err.status(), 413);
        assert_eq!(err.to_string(), "Audio file exceeds the 10 MB limit.");
    }
}
