//! HTTP host adapter
//!
//! # Data Flow
//! ```text
//! HTTP request
//!     → server.rs (axum route, body read with a size cap)
//!     → InboundRequest (headers copied, body base64-encoded)
//!     → TranscribeUploadUseCase::handle
//!     → OutboundResponse → HTTP response
//! ```

pub mod server;

pub use server::{router, to_http, AppState, HttpServer, RelayUseCase, TRANSCRIBE_PATHS};
