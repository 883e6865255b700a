//! OpenAI-compatible transcription adapter

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::application::ports::{Transcriber, TranscriptionError, TranscriptionReply};
use crate::domain::config::{ApiKey, DEFAULT_API_BASE_URL, DEFAULT_MODEL};
use crate::domain::upload::ParsedUpload;

/// Headers that may carry the upstream correlation id, in lookup order
const REQUEST_ID_HEADERS: [&str; 2] = ["x-request-id", "openai-request-id"];

/// Message used when upstream fails without saying why
const FALLBACK_ERROR: &str = "Transcription failed.";

// Response types for the transcription API. Every field is optional so that
// partial or unexpected bodies still deserialize.

#[derive(Debug, Default, Deserialize)]
struct TranscriptionResponse {
    text: Option<String>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: Option<String>,
}

/// OpenAI `/audio/transcriptions` transcriber
pub struct OpenAiTranscriber {
    base_url: String,
    model: String,
    client: reqwest::Client,
}

impl OpenAiTranscriber {
    /// Create a transcriber for the public API with the default model
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_BASE_URL, DEFAULT_MODEL)
    }

    /// Create a transcriber against another OpenAI-compatible endpoint
    pub fn with_base_url(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            model: model.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Model sent with every request
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Build the API URL
    fn api_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        if base.ends_with("/audio/transcriptions") {
            base.to_string()
        } else {
            format!("{}/audio/transcriptions", base)
        }
    }

    /// Build the multipart form
    fn build_form(&self, upload: &ParsedUpload) -> Result<Form, TranscriptionError> {
        let file = Part::bytes(upload.file.data().to_vec())
            .file_name(upload.file.filename().to_string())
            .mime_str(upload.file.mime_type())
            .map_err(|e| TranscriptionError::InvalidFilePart(e.to_string()))?;

        let mut form = Form::new()
            .part("file", file)
            .text("model", self.model.clone());

        if let Some(language) = upload.fields.language() {
            form = form.text("language", language.to_string());
        }
        if let Some(prompt) = upload.fields.prompt() {
            form = form.text("prompt", prompt.to_string());
        }

        Ok(form)
    }

    /// First correlation id header present on the response
    fn request_id(headers: &HeaderMap) -> Option<String> {
        REQUEST_ID_HEADERS
            .iter()
            .filter_map(|name| headers.get(*name))
            .filter_map(|value| value.to_str().ok())
            .map(str::trim)
            .find(|value| !value.is_empty())
            .map(str::to_string)
    }

    /// Parse a body leniently: anything that is not our JSON shape is "no content"
    fn parse_body(body: &str) -> TranscriptionResponse {
        if body.trim().is_empty() {
            return TranscriptionResponse::default();
        }
        serde_json::from_str(body).unwrap_or_default()
    }

    /// Error message by priority: structured message, raw body, fallback
    fn error_message(parsed: &TranscriptionResponse, body: &str) -> String {
        parsed
            .error
            .as_ref()
            .and_then(|e| e.message.as_deref())
            .filter(|m| !m.trim().is_empty())
            .or_else(|| Some(body).filter(|b| !b.trim().is_empty()))
            .unwrap_or(FALLBACK_ERROR)
            .to_string()
    }
}

impl Default for OpenAiTranscriber {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transcriber for OpenAiTranscriber {
    async fn transcribe(
        &self,
        api_key: &ApiKey,
        upload: &ParsedUpload,
    ) -> Result<TranscriptionReply, TranscriptionError> {
        let url = self.api_url();
        let form = self.build_form(upload)?;

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key.expose())
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscriptionError::RequestFailed(e.to_string()))?;

        let status = response.status();
        let request_id = Self::request_id(response.headers());

        let body = response
            .text()
            .await
            .map_err(|e| TranscriptionError::ReadFailed(e.to_string()))?;
        let parsed = Self::parse_body(&body);

        tracing::debug!(
            status = status.as_u16(),
            request_id = request_id.as_deref(),
            body_len = body.len(),
            "Transcription API responded"
        );

        if !status.is_success() {
            return Ok(TranscriptionReply::Failure {
                status: status.as_u16(),
                message: Self::error_message(&parsed, &body),
                request_id,
            });
        }

        Ok(TranscriptionReply::Success {
            text: parsed.text.unwrap_or_default(),
            request_id,
        })
    }
}
