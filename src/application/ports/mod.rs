//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod transcriber;
pub mod upload_decoder;

// Re-export common types
pub use config::ConfigStore;
pub use transcriber::{Transcriber, TranscriptionError, TranscriptionReply};
pub use upload_decoder::UploadDecoder;
