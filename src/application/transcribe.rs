//! Transcribe upload use case
//!
//! One invocation walks Validate → Parse → Forward → Translate → Respond
//! with an early exit at each stage. Exactly one upstream attempt is made.

use thiserror::Error;

use crate::domain::config::HandlerConfig;
use crate::domain::error::RequestError;
use crate::domain::invocation::{InboundRequest, OutboundResponse};
use crate::domain::upload::ParsedUpload;

use super::ports::{Transcriber, TranscriptionError, TranscriptionReply, UploadDecoder};

/// Errors from the transcribe use case
#[derive(Debug, Error)]
pub enum TranscribeError {
    #[error(transparent)]
    Rejected(#[from] RequestError),

    #[error(transparent)]
    Transcription(#[from] TranscriptionError),
}

impl TranscribeError {
    /// Response reported to the caller for this error
    pub fn to_response(&self) -> OutboundResponse {
        match self {
            Self::Rejected(e) => OutboundResponse::rejected(e),
            // Transport faults land on the catch-all boundary
            Self::Transcription(e) => OutboundResponse::failure(400, e.to_string(), None),
        }
    }
}

/// Request handler: validates, decodes, forwards and translates one upload
pub struct TranscribeUploadUseCase<D, T>
where
    D: UploadDecoder,
    T: Transcriber,
{
    decoder: D,
    transcriber: T,
}

impl<D, T> TranscribeUploadUseCase<D, T>
where
    D: UploadDecoder,
    T: Transcriber,
{
    /// Create a new use case instance
    pub fn new(decoder: D, transcriber: T) -> Self {
        Self {
            decoder,
            transcriber,
        }
    }

    /// Handle one invocation. Never fails: every error becomes a JSON response.
    #[tracing::instrument(skip_all, fields(method = %request.method))]
    pub async fn handle(&self, request: InboundRequest, config: &HandlerConfig) -> OutboundResponse {
        match self.execute(request, config).await {
            Ok(response) => response,
            Err(e) => {
                let response = e.to_response();
                if response.status >= 500 {
                    tracing::error!(status = response.status, error = %e, "Request failed");
                } else {
                    tracing::warn!(status = response.status, error = %e, "Request rejected");
                }
                response
            }
        }
    }

    /// Execute the workflow, surfacing errors to `handle`
    pub async fn execute(
        &self,
        request: InboundRequest,
        config: &HandlerConfig,
    ) -> Result<OutboundResponse, TranscribeError> {
        if !request.is_post() {
            return Err(RequestError::MethodNotAllowed.into());
        }

        let api_key = config
            .api_key
            .as_ref()
            .ok_or(RequestError::MissingCredential)?;

        let content_type = request
            .headers
            .content_type()
            .ok_or(RequestError::MissingContentType)?;
        if !is_multipart(content_type) {
            return Err(RequestError::UnsupportedContentType.into());
        }

        let limit = config.upload_limit;
        if let Some(declared) = request.headers.content_length() {
            if limit.is_exceeded_by(declared) {
                tracing::debug!(declared, limit = %limit, "Content-Length over limit");
                return Err(RequestError::PayloadTooLarge { limit }.into());
            }
        }

        let body = request.decode_body()?;
        let upload = self.decoder.decode(content_type, body, limit).await?;
        check_extension(&upload, config)?;

        tracing::info!(
            filename = upload.file.filename(),
            mime_type = upload.file.mime_type(),
            size = %upload.file.human_readable_size(),
            language = upload.fields.language(),
            "Forwarding audio upload"
        );

        let reply = self.transcriber.transcribe(api_key, &upload).await?;
        Ok(translate(reply))
    }
}

fn is_multipart(content_type: &str) -> bool {
    content_type
        .trim_start()
        .get(..10)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("multipart/"))
}

fn check_extension(upload: &ParsedUpload, config: &HandlerConfig) -> Result<(), RequestError> {
    match &config.allowed_extensions {
        Some(allowed) if !upload.file.has_extension_in(allowed) => {
            Err(RequestError::UnsupportedFileType)
        }
        _ => Ok(()),
    }
}

fn translate(reply: TranscriptionReply) -> OutboundResponse {
    match reply {
        TranscriptionReply::Success { text, request_id } => {
            tracing::info!(request_id = request_id.as_deref(), chars = text.len(), "Transcription complete");
            OutboundResponse::transcript(text, request_id)
        }
        TranscriptionReply::Failure {
            status,
            message,
            request_id,
        } => {
            tracing::warn!(status, request_id = request_id.as_deref(), "Upstream rejected transcription");
            OutboundResponse::failure(status, message, request_id)
        }
    }
}
