//! Uploaded audio value objects

/// Filename used when the file part carries none
pub const DEFAULT_FILENAME: &str = "audio";

/// MIME type used when the file part declares none
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Value object representing the audio file captured from an upload.
/// Contains raw bytes plus the filename and MIME type the client declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioFile {
    filename: String,
    mime_type: String,
    data: Vec<u8>,
}

impl AudioFile {
    /// Create an AudioFile, defaulting a missing or blank filename and MIME type
    pub fn new(filename: Option<String>, mime_type: Option<String>, data: Vec<u8>) -> Self {
        Self {
            filename: filename
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_FILENAME.to_string()),
            mime_type: mime_type
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_MIME_TYPE.to_string()),
            data,
        }
    }

    /// Filename as sent by the client
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Declared MIME type
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Raw audio bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get the size in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Lowercased extension of the filename, if it has one
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.filename.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }

    /// Whether the extension appears in `allowed` (compared case-insensitively,
    /// leading dots ignored)
    pub fn has_extension_in(&self, allowed: &[String]) -> bool {
        let Some(ext) = self.extension() else {
            return false;
        };
        allowed
            .iter()
            .any(|a| a.trim().trim_start_matches('.').eq_ignore_ascii_case(&ext))
    }

    /// Get human-readable size
    pub fn human_readable_size(&self) -> String {
        let bytes = self.size_bytes();
        if bytes < 1024 {
            format!("{} B", bytes)
        } else if bytes < 1024 * 1024 {
            format!("{:.1} KB", bytes as f64 / 1024.0)
        } else {
            format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
        }
    }
}

/// Optional scalar form fields sent alongside the audio file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadFields {
    pub language: Option<String>,
    pub prompt: Option<String>,
}

impl UploadFields {
    /// Language hint, only when it has non-whitespace content
    pub fn language(&self) -> Option<&str> {
        non_blank(self.language.as_deref())
    }

    /// Prompt hint, only when it has non-whitespace content
    pub fn prompt(&self) -> Option<&str> {
        non_blank(self.prompt.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// Result of decoding a multipart upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUpload {
    pub file: AudioFile,
    pub fields: UploadFields,
}
