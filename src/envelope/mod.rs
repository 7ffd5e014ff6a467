
use crate::chunker::{Chunk, Chunker, Metadata};
use crate::classifier::{ContentType, classify};
use crate::error::ChunkError;
use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::Value;
use tracing::{debug, warn};

/// Input document handed to the engine
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChunkRequest {
    /// Text to chunk, required
    pub content: Option<String>,
    /// Declared type hint
    pub content_type: Option<String>,
    /// Opaque key/value bag copied onto every chunk
    pub metadata: Option<Metadata>,
}

impl ChunkRequest {
    /// Parse a request document, separating syntax errors from shape errors
    pub fn from_json(input: &str) -> Result<Self, ChunkError> {
        let value: Value =
            serde_json::from_str(input).map_err(|e| ChunkError::InvalidJson(e.to_string()))?;

        if !value.is_object() {
            return Err(ChunkError::MalformedInput(format!(
                "expected a JSON object, found {}",
                json_kind(&value)
            )));
        }

        serde_json::from_value(value).map_err(|e| ChunkError::MalformedInput(e.to_string()))
    }

    /// Fill in a type hint when the document did not declare one
    pub fn or_content_type(mut self, hint: Option<&str>) -> Self {
        if self.content_type.is_none() {
            self.content_type = hint.map(str::to_string);
        }
        self
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Successful result with aggregate counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkSuccess {
    #[serde(deserialize_with = "expect_true")]
    success: bool,
    pub content_type: ContentType,
    pub chunk_count: usize,
    /// Length of the original content in characters
    pub total_chars: usize,
    pub chunks: Vec<Chunk>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkFailure {
    #[serde(deserialize_with = "expect_false")]
    success: bool,
    pub error: String,
    /// Always empty
    pub chunks: Vec<Chunk>,
}

// The flag is fixed by the variant, a mismatched document is rejected
fn expect_true<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    expect_flag(deserializer, true)
}

fn expect_false<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    expect_flag(deserializer, false)
}

fn expect_flag<'de, D>(deserializer: D, expected: bool) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let flag = bool::deserialize(deserializer)?;
    if flag != expected {
        return Err(de::Error::custom(format!("expected success to be {}", expected)));
    }
    Ok(flag)
}

/// Exactly one of the two shapes is produced per invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChunkResponse {
    Success(ChunkSuccess),
    Failure(ChunkFailure),
}

impl ChunkResponse {
    pub fn success(content_type: ContentType, total_chars: usize, chunks: Vec<Chunk>) -> Self {
        ChunkResponse::Success(ChunkSuccess {
            success: true,
            content_type,
            chunk_count: chunks.len(),
            total_chars,
            chunks,
        })
    }

    pub fn failure(error: &ChunkError) -> Self {
        ChunkResponse::Failure(ChunkFailure {
            success: false,
            error: error.to_string(),
            chunks: Vec::new(),
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ChunkResponse::Success(_))
    }

    pub fn chunks(&self) -> &[Chunk] {
        match self {
            ChunkResponse::Success(success) => &success.chunks,
            ChunkResponse::Failure(failure) => &failure.chunks,
        }
    }

    /// Serialize for stdout
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

impl From<ChunkError> for ChunkResponse {
    fn from(error: ChunkError) -> Self {
        ChunkResponse::failure(&error)
    }
}

/// Classify and chunk a parsed request
pub fn process(request: ChunkRequest, chunker: &Chunker) -> Result<ChunkResponse, ChunkError> {
    let content = request.content.ok_or(ChunkError::MissingContent)?;
    if content.trim().is_empty() {
        return Err(ChunkError::EmptyContent);
    }

    let content_type = classify(&content, request.content_type.as_deref());
    let metadata = request.metadata.unwrap_or_default();
    let chunks = chunker.chunk(&content, content_type, &metadata);

    debug!(
        target: "chunker",
        %content_type,
        chunk_count = chunks.len(),
        "request processed"
    );

    Ok(ChunkResponse::success(
        content_type,
        content.chars().count(),
        chunks,
    ))
}

/// Turn a raw request document into a response envelope.
///
/// Never fails: every error becomes the failure envelope. `type_hint` is used
/// only when the document declares no `content_type`.
pub fn respond(input: &str, chunker: &Chunker, type_hint: Option<&str>) -> ChunkResponse {
    ChunkRequest::from_json(input)
        .map(|request| request.or_content_type(type_hint))
        .and_then(|request| process(request, chunker))
        .unwrap_or_else(|e| {
            warn!(target: "chunker", error = %e, "request failed");
            ChunkResponse::from(e)
        })
}
