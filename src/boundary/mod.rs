mod patterns;
mod strategies;


pub use patterns::{
    CODE_WINDOW, MARKDOWN_WINDOW, SENTENCE_ENDERS, SENTENCE_WINDOW, TRANSCRIPT_WINDOW,
};
pub use strategies::{LineBreak, MarkerBoundary, ParagraphBreak, SentenceEnd};

use crate::classifier::ContentType;
use crate::text::IndexedText;
use tracing::trace;

/// One rung of the boundary fallback ladder
pub trait BoundaryStrategy: Send + Sync {
    /// Short label used in logs
    fn name(&self) -> &'static str;

    /// Find a cut point at or before `target` (character offset).
    ///
    /// Returns `None` when this strategy has nothing to offer, letting the
    /// next rung try.
    fn locate(&self, text: &IndexedText<'_>, target: usize) -> Option<usize>;
}

/// Direction of a sentence boundary search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDirection {
    /// Look at the text before the position, used for chunk ends
    Backward,
    /// Look at the text after the position, used for chunk starts
    Forward,
}

static CODE_DECLARATION: MarkerBoundary = MarkerBoundary {
    name: "code-declaration",
    window: CODE_WINDOW,
    patterns: patterns::code_boundaries,
};

static MARKDOWN_HEADING: MarkerBoundary = MarkerBoundary {
    name: "markdown-heading",
    window: MARKDOWN_WINDOW,
    patterns: patterns::markdown_headings,
};

static TRANSCRIPT_TURN: MarkerBoundary = MarkerBoundary {
    name: "transcript-turn",
    window: TRANSCRIPT_WINDOW,
    patterns: patterns::transcript_markers,
};

static PARAGRAPH: ParagraphBreak = ParagraphBreak { window: CODE_WINDOW };
static SENTENCE: SentenceEnd = SentenceEnd {
    window: SENTENCE_WINDOW,
};
static NEWLINE: LineBreak = LineBreak {
    window: SENTENCE_WINDOW,
};

static CODE_LADDER: [&dyn BoundaryStrategy; 4] =
    [&CODE_DECLARATION, &PARAGRAPH, &SENTENCE, &NEWLINE];
static MARKDOWN_LADDER: [&dyn BoundaryStrategy; 3] = [&MARKDOWN_HEADING, &SENTENCE, &NEWLINE];
static TRANSCRIPT_LADDER: [&dyn BoundaryStrategy; 3] = [&TRANSCRIPT_TURN, &SENTENCE, &NEWLINE];
static TEXT_LADDER: [&dyn BoundaryStrategy; 2] = [&SENTENCE, &NEWLINE];

/// Strategies tried, in order, for a content type
pub fn ladder(content_type: ContentType) -> &'static [&'static dyn BoundaryStrategy] {
    match content_type {
        ContentType::Code => &CODE_LADDER,
        ContentType::Markdown => &MARKDOWN_LADDER,
        ContentType::Transcript => &TRANSCRIPT_LADDER,
        ContentType::Text => &TEXT_LADDER,
    }
}

/// Move a candidate cut to the nearest structurally safe point.
///
/// Never returns more than `text.len()`. When no rung matches, the raw
/// target comes back unchanged and the cut may land mid-token.
pub fn locate(text: &IndexedText<'_>, target: usize, content_type: ContentType) -> usize {
    let target = target.min(text.len());

    for strategy in ladder(content_type) {
        if let Some(offset) = strategy.locate(text, target) {
            trace!(target: "chunker", strategy = strategy.name(), candidate = target, offset, "boundary found");
            return offset;
        }
    }

    trace!(target: "chunker", candidate = target, "no boundary, hard cut");
    target
}

/// [`locate`] over a plain string, offsets in characters
pub fn find_boundary(text: &str, target: usize, content_type: ContentType) -> usize {
    locate(&IndexedText::new(text), target, content_type)
}

/// Nearest sentence end from `position`, falling back to a newline, then to
/// `position` itself.
pub fn sentence_boundary(text: &str, position: usize, direction: SearchDirection) -> usize {
    let text = IndexedText::new(text);
    let position = position.min(text.len());

    let found = match direction {
        SearchDirection::Backward => strategies::sentence_end_before(&text, position, SENTENCE_WINDOW)
            .or_else(|| strategies::line_break_before(&text, position, SENTENCE_WINDOW)),
        SearchDirection::Forward => strategies::sentence_end_after(&text, position, SENTENCE_WINDOW)
            .or_else(|| strategies::line_break_after(&text, position, SENTENCE_WINDOW)),
    };

    found.unwrap_or(position)
}
