use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Semantic category of an input, drives both sizing and boundary search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// Source code
    Code,
    /// Markdown document
    Markdown,
    /// Speech transcript with timestamps or speaker turns
    #[serde(alias = "transcription")]
    Transcript,
    /// Generic prose, also the default
    #[default]
    Text,
}

impl ContentType {
    pub const ALL: [ContentType; 4] = [
        ContentType::Code,
        ContentType::Markdown,
        ContentType::Transcript,
        ContentType::Text,
    ];

    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Code => "code",
            ContentType::Markdown => "markdown",
            ContentType::Transcript => "transcript",
            ContentType::Text => "text",
        }
    }

    /// Case-insensitive lookup of a declared type name.
    ///
    /// Accepts the aliases `transcription` and `default`. Surrounding
    /// whitespace is not stripped.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "code" => Some(ContentType::Code),
            "markdown" => Some(ContentType::Markdown),
            "transcript" | "transcription" => Some(ContentType::Transcript),
            "text" | "default" => Some(ContentType::Text),
            _ => None,
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown content type: {0}")]
pub struct UnknownContentType(pub String);

impl FromStr for ContentType {
    type Err = UnknownContentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownContentType(s.to_string()))
    }
}
