// Structural markers for each content type. Every pattern is line-anchored;
// matches at the start of a search window are re-checked against the real
// text so a window edge never counts as a line start.

use crate::patterns::{NamedPattern, compile_table};
use std::sync::OnceLock;

/// Window searched before a cut for code and markdown markers
pub const CODE_WINDOW: usize = 300;
pub const MARKDOWN_WINDOW: usize = 300;
/// Speaker turns run long, so transcripts look further back
pub const TRANSCRIPT_WINDOW: usize = 400;
/// Window for the generic sentence and newline search
pub const SENTENCE_WINDOW: usize = 200;

/// Sentence terminators, each followed by the whitespace that ends it
pub const SENTENCE_ENDERS: [&str; 6] = [". ", "! ", "? ", ".\n", "!\n", "?\n"];

const CODE_BOUNDARIES: [(&str, &str); 7] = [
    ("python-def", r"(?m)^def\s+\w+"),
    ("class", r"(?m)^class\s+\w+"),
    ("js-function", r"(?m)^function\s+\w+"),
    ("es-export", r"(?m)^export\s+(?:const|function|class)\s+\w+"),
    (
        "visibility-type",
        r"(?m)^(?:public|private|protected)\s+(?:class|interface|enum)\b",
    ),
    ("comment-separator", r"(?m)^//\s*=+"),
    ("doc-comment", r"(?m)^/\*\*"),
];

const MARKDOWN_HEADINGS: [(&str, &str); 1] = [("heading", r"(?m)^#{1,6}[ \t]+\S")];

const TRANSCRIPT_MARKERS: [(&str, &str); 4] = [
    ("bracket-timestamp", r"(?m)^\[[0-9]{2}:[0-9]{2}:[0-9]{2}\]"),
    ("timestamp", r"(?m)^[0-9]{2}:[0-9]{2}:[0-9]{2}"),
    ("speaker-name", r"(?m)^[A-Z][a-z]+:"),
    ("speaker-number", r"(?m)^Speaker [0-9]+:"),
];

pub fn code_boundaries() -> &'static [NamedPattern] {
    static TABLE: OnceLock<Vec<NamedPattern>> = OnceLock::new();
    TABLE.get_or_init(|| compile_table(&CODE_BOUNDARIES))
}

pub fn markdown_headings() -> &'static [NamedPattern] {
    static TABLE: OnceLock<Vec<NamedPattern>> = OnceLock::new();
    TABLE.get_or_init(|| compile_table(&MARKDOWN_HEADINGS))
}

pub fn transcript_markers() -> &'static [NamedPattern] {
    static TABLE: OnceLock<Vec<NamedPattern>> = OnceLock::new();
    TABLE.get_or_init(|| compile_table(&TRANSCRIPT_MARKERS))
}
