//! Streaming multipart decoder adapter built on multer

use std::convert::Infallible;

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::stream;

use crate::application::ports::UploadDecoder;
use crate::domain::error::RequestError;
use crate::domain::upload::{AudioFile, ParsedUpload, UploadFields, UploadLimit};

/// Size of the slices the body is fed to the decoder in
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Decodes `multipart/form-data` bodies chunk by chunk.
///
/// The first part that carries a filename is the audio file. Its bytes are
/// counted as they arrive and decoding stops as soon as the limit is passed.
/// Any later file parts are drained and dropped.
pub struct MulterUploadDecoder {
    chunk_size: usize,
}

impl MulterUploadDecoder {
    /// Create a decoder with the default chunk size
    pub fn new() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Create a decoder feeding chunks of `chunk_size` bytes (minimum 1)
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
        }
    }

    /// Split the body into zero-copy slices
    fn chunks(&self, body: Bytes) -> Vec<Bytes> {
        let mut chunks = Vec::with_capacity(body.len() / self.chunk_size + 1);
        let mut offset = 0;
        while offset < body.len() {
            let end = (offset + self.chunk_size).min(body.len());
            chunks.push(body.slice(offset..end));
            offset = end;
        }
        chunks
    }
}

impl Default for MulterUploadDecoder {
    fn default() -> Self {
        Self::new()
    }
}

fn malformed(e: multer::Error) -> RequestError {
    RequestError::Malformed(e.to_string())
}

/// Read a part to its end without keeping it. Returns the bytes skipped.
async fn drain(field: &mut multer::Field<'_>) -> Result<usize, RequestError> {
    let mut skipped = 0;
    while let Some(chunk) = field.chunk().await.map_err(malformed)? {
        skipped += chunk.len();
    }
    Ok(skipped)
}

/// Audio file being captured
struct FileCapture {
    filename: Option<String>,
    mime_type: Option<String>,
    data: Vec<u8>,
}

#[async_trait]
impl UploadDecoder for MulterUploadDecoder {
    async fn decode(
        &self,
        content_type: &str,
        body: Bytes,
        limit: UploadLimit,
    ) -> Result<ParsedUpload, RequestError> {
        let boundary = multer::parse_boundary(content_type).map_err(malformed)?;
        let body_stream = stream::iter(self.chunks(body).into_iter().map(Ok::<_, Infallible>));
        let mut multipart = multer::Multipart::new(body_stream, boundary);

        let mut capture: Option<FileCapture> = None;
        let mut fields = UploadFields::default();
        let mut discarded_files = 0usize;

        while let Some(mut field) = multipart.next_field().await.map_err(malformed)? {
            let name = field.name().unwrap_or_default().to_string();

            if field.file_name().is_none() {
                match name.as_str() {
                    "language" => fields.language = Some(field.text().await.map_err(malformed)?),
                    "prompt" => fields.prompt = Some(field.text().await.map_err(malformed)?),
                    _ => {
                        let skipped = drain(&mut field).await?;
                        tracing::trace!(field = %name, skipped, "Ignoring form field");
                    }
                }
                continue;
            }

            if capture.is_some() {
                // Only the first file counts
                discarded_files += 1;
                drain(&mut field).await?;
                continue;
            }

            let mut file = FileCapture {
                filename: field.file_name().map(str::to_string),
                mime_type: field.content_type().map(|m| m.to_string()),
                data: Vec::new(),
            };

            while let Some(chunk) = field.chunk().await.map_err(malformed)? {
                let total = (file.data.len() + chunk.len()) as u64;
                if limit.is_exceeded_by(total) {
                    tracing::warn!(
                        field = %name,
                        received = total,
                        limit = %limit,
                        "Audio file over limit, aborting decode"
                    );
                    return Err(RequestError::PayloadTooLarge { limit });
                }
                file.data.extend_from_slice(&chunk);
            }

            capture = Some(file);
        }

        if discarded_files > 0 {
            tracing::debug!(discarded_files, "Extra file parts dropped");
        }

        match capture {
            Some(file) if !file.data.is_empty() => Ok(ParsedUpload {
                file: AudioFile::new(file.filename, file.mime_type, file.data),
                fields,
            }),
            _ => Err(RequestError::NoAudioFile),
        }
    }
}
