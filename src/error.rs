use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChunkError {
    #[error("Invalid JSON input: {0}")]
    InvalidJson(String),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("No content provided")]
    MissingContent,

    #[error("Content is empty or whitespace-only")]
    EmptyContent,

    #[error("Invalid chunk policy: {reason}")]
    InvalidPolicy { reason: String },

    #[error("Chunking failed: {0}")]
    ProcessingFailed(String),
}
