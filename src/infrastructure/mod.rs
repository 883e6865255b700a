//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems like the transcription API,
//! the multipart decoder, config sources and the HTTP host.

pub mod config;
pub mod http;
pub mod multipart;
pub mod transcription;

// Re-export adapters
pub use config::{env_config, TomlConfigStore};
pub use http::{AppState, HttpServer};
pub use multipart::MulterUploadDecoder;
pub use transcription::OpenAiTranscriber;
