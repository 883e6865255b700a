//! Transcription port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::config::ApiKey;
use crate::domain::upload::ParsedUpload;

/// Transport-level transcription failures.
/// An upstream HTTP error status is not one of these; see [`TranscriptionReply::Failure`].
#[derive(Debug, Clone, Error)]
pub enum TranscriptionError {
    #[error("Invalid audio file part: {0}")]
    InvalidFilePart(String),

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to read API response: {0}")]
    ReadFailed(String),
}

/// Outcome of one exchange with the transcription API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptionReply {
    /// 2xx from upstream
    Success {
        text: String,
        request_id: Option<String>,
    },
    /// Any other status, passed through with the best message available
    Failure {
        status: u16,
        message: String,
        request_id: Option<String>,
    },
}

/// Port for audio transcription
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Send the upload to the transcription service.
    ///
    /// # Arguments
    /// * `api_key` - Bearer credential for the service
    /// * `upload` - The audio file and its optional hints
    ///
    /// # Returns
    /// The upstream reply, or an error if no reply could be obtained
    async fn transcribe(
        &self,
        api_key: &ApiKey,
        upload: &ParsedUpload,
    ) -> Result<TranscriptionReply, TranscriptionError>;
}
