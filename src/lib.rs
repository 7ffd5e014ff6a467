// Public API exports
pub mod boundary;
pub mod chunker;
pub mod classifier;
pub mod envelope;
pub mod error;
pub mod hasher;
pub mod policy;
pub mod text;

mod patterns;

// Re-export main types for convenience
pub use boundary::{SearchDirection, find_boundary, sentence_boundary};
pub use chunker::{Chunk, Chunker, Metadata, SHORT_INPUT_THRESHOLD, chunk_content};
pub use classifier::{ContentType, classify};
pub use envelope::{ChunkFailure, ChunkRequest, ChunkResponse, ChunkSuccess, respond};
pub use error::ChunkError;
pub use hasher::content_hash;
pub use policy::{ChunkConfig, PolicyTable};
