//! scribe-relay - audio upload relay for speech-to-text APIs
//!
//! This crate provides a serverless-style request handler that accepts a
//! `multipart/form-data` audio upload, forwards the file to an
//! OpenAI-compatible transcription endpoint and answers with JSON.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Inbound request, parsed upload, outbound response, config, errors
//! - **Application**: The transcribe-upload use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (multer, OpenAI, TOML/env config, axum host)
//! - **CLI**: Argument parsing, logging setup and the server runner

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
