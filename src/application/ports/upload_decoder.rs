//! Upload decoding port interface

use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::error::RequestError;
use crate::domain::upload::{ParsedUpload, UploadLimit};

/// Port for turning a multipart request body into a [`ParsedUpload`]
#[async_trait]
pub trait UploadDecoder: Send + Sync {
    /// Decode the body.
    ///
    /// # Arguments
    /// * `content_type` - The request's `Content-Type`, carrying the boundary
    /// * `body` - The raw (already base64-decoded) body
    /// * `limit` - Maximum size of the captured audio file
    ///
    /// # Errors
    /// `PayloadTooLarge` as soon as the file passes `limit`, `NoAudioFile`
    /// when no file bytes were captured, `Malformed` for framing errors.
    async fn decode(
        &self,
        content_type: &str,
        body: Bytes,
        limit: UploadLimit,
    ) -> Result<ParsedUpload, RequestError>;
}
