mod splitter;


pub use splitter::{Chunk, Metadata, split_text};

use crate::classifier::ContentType;
use crate::error::ChunkError;
use crate::policy::{ChunkConfig, PolicyTable};

/// Inputs shorter than this (in characters) are emitted as a single chunk
pub const SHORT_INPUT_THRESHOLD: usize = 500;

/// Configured chunking engine.
///
/// Immutable once built; share it freely between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunker {
    policies: PolicyTable,
    short_input_threshold: usize,
}

impl Chunker {
    /// Engine with the built-in policy table
    pub const fn new() -> Self {
        Self {
            policies: PolicyTable::new(),
            short_input_threshold: SHORT_INPUT_THRESHOLD,
        }
    }

    /// Replace the policy for one content type
    pub fn with_policy(
        mut self,
        content_type: ContentType,
        config: ChunkConfig,
    ) -> Result<Self, ChunkError> {
        self.policies = self.policies.with(content_type, config)?;
        Ok(self)
    }

    /// Set the length below which input bypasses the sliding window
    pub fn short_input_threshold(mut self, threshold: usize) -> Self {
        self.short_input_threshold = threshold;
        self
    }

    pub fn policy(&self, content_type: ContentType) -> ChunkConfig {
        self.policies.get(content_type)
    }

    /// Chunk `text` as `content_type`, copying `metadata` onto every chunk
    pub fn chunk(&self, text: &str, content_type: ContentType, metadata: &Metadata) -> Vec<Chunk> {
        split_text(
            text,
            content_type,
            self.policy(content_type),
            self.short_input_threshold,
            metadata,
        )
    }
}

impl Default for Chunker {
    fn default() -> Self {
        Self::new()
    }
}

/// Chunk with the built-in policies
pub fn chunk_content(text: &str, content_type: ContentType, metadata: &Metadata) -> Vec<Chunk> {
    Chunker::new().chunk(text, content_type, metadata)
}
