use crate::classifier::ContentType;
use crate::error::ChunkError;
use serde::{Deserialize, Serialize};

/// Advisory lower bound shared by every built-in policy
pub const DEFAULT_MIN_CHUNK_SIZE: usize = 100;

/// Size policy for one content type, all lengths in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkConfig {
    /// Maximum chunk length
    pub max_size: usize,
    /// Trailing context repeated at the head of the next chunk
    pub overlap: usize,
    /// Advisory minimum, not enforced by the assembler
    pub min_chunk_size: usize,
}

impl ChunkConfig {
    pub const CODE: ChunkConfig = ChunkConfig::new(1500, 200);
    pub const MARKDOWN: ChunkConfig = ChunkConfig::new(2000, 300);
    pub const TRANSCRIPT: ChunkConfig = ChunkConfig::new(3000, 500);
    pub const TEXT: ChunkConfig = ChunkConfig::new(2000, 300);

    pub const fn new(max_size: usize, overlap: usize) -> Self {
        Self {
            max_size,
            overlap,
            min_chunk_size: DEFAULT_MIN_CHUNK_SIZE,
        }
    }

    /// Built-in policy for a content type
    pub const fn for_type(content_type: ContentType) -> Self {
        match content_type {
            ContentType::Code => Self::CODE,
            ContentType::Markdown => Self::MARKDOWN,
            ContentType::Transcript => Self::TRANSCRIPT,
            ContentType::Text => Self::TEXT,
        }
    }

    /// Built-in policy by type name, unknown names get the default policy
    pub fn for_name(name: &str) -> Self {
        ContentType::from_name(name)
            .map(Self::for_type)
            .unwrap_or(Self::TEXT)
    }

    /// Reject policies the assembler cannot make progress with
    pub fn validate(&self) -> Result<(), ChunkError> {
        if self.max_size == 0 {
            return Err(ChunkError::InvalidPolicy {
                reason: "max_size must be greater than zero".to_string(),
            });
        }
        if self.overlap >= self.max_size {
            return Err(ChunkError::InvalidPolicy {
                reason: format!(
                    "overlap ({}) must be smaller than max_size ({})",
                    self.overlap, self.max_size
                ),
            });
        }
        Ok(())
    }
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self::TEXT
    }
}

/// Immutable per-type policy lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyTable {
    code: ChunkConfig,
    markdown: ChunkConfig,
    transcript: ChunkConfig,
    text: ChunkConfig,
}

impl PolicyTable {
    pub const fn new() -> Self {
        Self {
            code: ChunkConfig::CODE,
            markdown: ChunkConfig::MARKDOWN,
            transcript: ChunkConfig::TRANSCRIPT,
            text: ChunkConfig::TEXT,
        }
    }

    pub fn get(&self, content_type: ContentType) -> ChunkConfig {
        match content_type {
            ContentType::Code => self.code,
            ContentType::Markdown => self.markdown,
            ContentType::Transcript => self.transcript,
            ContentType::Text => self.text,
        }
    }

    /// Copy of this table with one entry replaced
    pub fn with(
        mut self,
        content_type: ContentType,
        config: ChunkConfig,
    ) -> Result<Self, ChunkError> {
        config.validate()?;
        match content_type {
            ContentType::Code => self.code = config,
            ContentType::Markdown => self.markdown = config,
            ContentType::Transcript => self.transcript = config,
            ContentType::Text => self.text = config,
        }
        Ok(self)
    }
}

impl Default for PolicyTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_policies() {
        assert_eq!(ChunkConfig::for_type(ContentType::Code), ChunkConfig::new(1500, 200));
        assert_eq!(ChunkConfig::for_type(ContentType::Markdown), ChunkConfig::new(2000, 300));
        assert_eq!(ChunkConfig::for_type(ContentType::Transcript), ChunkConfig::new(3000, 500));
        assert_eq!(ChunkConfig::for_type(ContentType::Text), ChunkConfig::new(2000, 300));

        for content_type in ContentType::ALL {
            assert_eq!(ChunkConfig::for_type(content_type).min_chunk_size, 100);
        }
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(ChunkConfig::for_name("CODE"), ChunkConfig::CODE);
        assert_eq!(ChunkConfig::for_name("transcription"), ChunkConfig::TRANSCRIPT);
        assert_eq!(ChunkConfig::for_name("default"), ChunkConfig::TEXT);
    }

    #[test]
    fn test_unknown_name_falls_back_to_default() {
        assert_eq!(ChunkConfig::for_name("spreadsheet"), ChunkConfig::TEXT);
        assert_eq!(ChunkConfig::for_name(""), ChunkConfig::default());
    }

    #[test]
    fn test_builtin_policies_are_valid() {
        for content_type in ContentType::ALL {
            assert!(ChunkConfig::for_type(content_type).validate().is_ok());
        }
    }

    #[test]
    fn test_validate_rejects_bad_policies() {
        assert!(ChunkConfig::new(0, 0).validate().is_err());
        assert!(ChunkConfig::new(100, 100).validate().is_err());
        assert!(ChunkConfig::new(100, 150).validate().is_err());
    }

    #[test]
    fn test_table_override() {
        let table = PolicyTable::new()
            .with(ContentType::Code, ChunkConfig::new(800, 100))
            .unwrap();

        assert_eq!(table.get(ContentType::Code).max_size, 800);
        assert_eq!(table.get(ContentType::Text), ChunkConfig::TEXT);
        // Source table untouched
        assert_eq!(PolicyTable::default().get(ContentType::Code), ChunkConfig::CODE);
    }

    #[test]
    fn test_table_override_rejected() {
        let err = PolicyTable::new()
            .with(ContentType::Text, ChunkConfig::new(50, 60))
            .unwrap_err();
        assert!(err.to_string().contains("overlap (60)"));
    }
}
