//! Upload domain module

mod audio_file;
mod limit;

pub use audio_file::{AudioFile, ParsedUpload, UploadFields, DEFAULT_FILENAME, DEFAULT_MIME_TYPE};
pub use limit::{UploadLimit, BYTES_PER_MB, DEFAULT_UPLOAD_LIMIT_MB};
