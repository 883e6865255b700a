//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod invocation;
pub mod upload;

// Re-export common types
pub use config::{ApiKey, AppConfig, HandlerConfig};
pub use error::*;
pub use invocation::{InboundRequest, OutboundResponse, RequestHeaders, ResponseBody};
pub use upload::{AudioFile, ParsedUpload, UploadFields, UploadLimit};
