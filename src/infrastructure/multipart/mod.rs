//! Multipart decoding adapters

mod multer_decoder;

pub use multer_decoder::{MulterUploadDecoder, DEFAULT_CHUNK_SIZE};
