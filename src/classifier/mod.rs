mod types;

#[cfg(test)]
mod tests;

pub use types::{ContentType, UnknownContentType};

use crate::patterns::{NamedPattern, compile};
use std::sync::OnceLock;
use tracing::debug;

/// Detection heuristics in priority order.
///
/// Code is checked first: docstrings and comments in source files would
/// otherwise trip the markdown and transcript checks.
const HEURISTICS: [(ContentType, &str, &str); 3] = [
    (
        ContentType::Code,
        "code-keyword",
        r"(?m)^(def|class|function|import|export)\s+",
    ),
    (ContentType::Markdown, "markdown-heading", r"(?m)^#{1,6}\s+"),
    (
        ContentType::Transcript,
        "transcript-marker",
        r"\[[0-9]{2}:[0-9]{2}:[0-9]{2}\]|Speaker [0-9]+:",
    ),
];

fn heuristics() -> &'static [(ContentType, NamedPattern)] {
    static TABLE: OnceLock<Vec<(ContentType, NamedPattern)>> = OnceLock::new();
    TABLE.get_or_init(|| {
        HEURISTICS
            .iter()
            .filter_map(|&(content_type, name, pattern)| {
                compile(name, pattern).map(|compiled| (content_type, compiled))
            })
            .collect()
    })
}

/// Decide the content type of `text`.
///
/// A recognised `declared` type always wins. Otherwise the structural
/// heuristics run in order and the first hit decides, falling back to
/// [`ContentType::Text`].
pub fn classify(text: &str, declared: Option<&str>) -> ContentType {
    if let Some(content_type) = declared.and_then(ContentType::from_name) {
        debug!(target: "chunker", %content_type, "using declared content type");
        return content_type;
    }

    heuristics()
        .iter()
        .find(|(_, pattern)| pattern.regex.is_match(text))
        .map(|(content_type, pattern)| {
            debug!(target: "chunker", %content_type, heuristic = pattern.name, "detected content type");
            *content_type
        })
        .unwrap_or_default()
}
