//! Transcription service adapters

mod openai;

pub use openai::OpenAiTranscriber;
