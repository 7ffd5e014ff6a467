use crate::boundary;
use crate::classifier::ContentType;
use crate::hasher::content_hash;
use crate::policy::ChunkConfig;
use crate::text::IndexedText;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Caller-supplied key/value bag copied onto every chunk
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// A segment of the input ready for embedding/indexing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    /// Trimmed text of this chunk
    pub text: String,
    /// 0-based position in the output
    pub index: usize,
    /// Number of chunks produced for the input
    pub total: usize,
    pub content_type: ContentType,
    pub metadata: Metadata,
    /// SHA256 of `text`
    pub hash: String,
    /// Length of `text` in characters
    pub char_count: usize,
    /// Start of the untrimmed span in the original text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_pos: Option<usize>,
    /// End (exclusive) of the untrimmed span in the original text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_pos: Option<usize>,
}

impl Chunk {
    fn new(text: &str, index: usize, content_type: ContentType, metadata: &Metadata) -> Self {
        Self {
            text: text.to_string(),
            index,
            total: 0,
            content_type,
            metadata: metadata.clone(),
            hash: content_hash(text),
            char_count: text.chars().count(),
            start_pos: None,
            end_pos: None,
        }
    }

    fn with_span(mut self, start: usize, end: usize) -> Self {
        self.start_pos = Some(start);
        self.end_pos = Some(end);
        self
    }
}

/// Split `text` into overlapping chunks bounded by `config`.
///
/// Inputs shorter than `short_input_threshold` characters become a single
/// chunk without positions. Longer inputs go through a sliding window whose
/// cut points are moved to structural boundaries. Whitespace-only spans are
/// dropped, so an all-whitespace input yields no chunks.
pub fn split_text(
    text: &str,
    content_type: ContentType,
    config: ChunkConfig,
    short_input_threshold: usize,
    metadata: &Metadata,
) -> Vec<Chunk> {
    let indexed = IndexedText::new(text);

    let mut chunks = if indexed.len() < short_input_threshold {
        split_short(text, content_type, metadata)
    } else {
        split_window(&indexed, content_type, config, metadata)
    };

    // Total is only known once the pass is over
    let total = chunks.len();
    for chunk in &mut chunks {
        chunk.total = total;
    }

    debug!(
        target: "chunker",
        %content_type,
        chars = indexed.len(),
        chunks = total,
        "split complete"
    );

    chunks
}

fn split_short(text: &str, content_type: ContentType, metadata: &Metadata) -> Vec<Chunk> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return vec![];
    }

    vec![Chunk::new(trimmed, 0, content_type, metadata)]
}

fn split_window(
    text: &IndexedText<'_>,
    content_type: ContentType,
    config: ChunkConfig,
    metadata: &Metadata,
) -> Vec<Chunk> {
    let len = text.len();
    let mut chunks = Vec::new();
    let mut start = 0;

    while start < len {
        let candidate = (start + config.max_size).min(len);
        let end = if candidate < len {
            // A boundary at or before the chunk start would leave it empty
            let located = boundary::locate(text, candidate, content_type);
            if located > start {
                located
            } else {
                candidate
            }
        } else {
            candidate
        };

        let span = text.slice(start, end).trim();
        if !span.is_empty() {
            let chunk =
                Chunk::new(span, chunks.len(), content_type, metadata).with_span(start, end);
            if chunk.char_count < config.min_chunk_size {
                debug!(
                    target: "chunker",
                    index = chunk.index,
                    char_count = chunk.char_count,
                    min = config.min_chunk_size,
                    "chunk below advisory minimum"
                );
            }
            chunks.push(chunk);
        }

        if end >= len {
            break;
        }

        // Always move forward, even when overlap would reach back past start
        start = (start + 1).max(end.saturating_sub(config.overlap));
    }

    chunks
}
