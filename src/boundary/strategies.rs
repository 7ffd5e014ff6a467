use super::BoundaryStrategy;
use super::patterns::SENTENCE_ENDERS;
use crate::patterns::NamedPattern;
use crate::text::IndexedText;
use tracing::trace;

/// Cut right before the last line-anchored structural marker in the window
pub struct MarkerBoundary {
    pub name: &'static str,
    pub window: usize,
    pub patterns: fn() -> &'static [NamedPattern],
}

impl BoundaryStrategy for MarkerBoundary {
    fn name(&self) -> &'static str {
        self.name
    }

    fn locate(&self, text: &IndexedText<'_>, target: usize) -> Option<usize> {
        let window_start = target.saturating_sub(self.window);
        let base = text.byte_offset(window_start);
        let haystack = text.slice(window_start, target);

        // Latest match across every pattern family wins
        let (byte, pattern) = (self.patterns)()
            .iter()
            .filter_map(|pattern| {
                pattern
                    .regex
                    .find_iter(haystack)
                    .map(|m| base + m.start())
                    .filter(|&byte| text.is_line_start(byte))
                    .last()
                    .map(|byte| (byte, pattern.name))
            })
            .max_by_key(|&(byte, _)| byte)?;

        trace!(target: "chunker", strategy = self.name, pattern, "marker boundary");
        Some(text.char_pos(byte))
    }
}

/// Cut after the last blank-line paragraph break in the window
pub struct ParagraphBreak {
    pub window: usize,
}

impl BoundaryStrategy for ParagraphBreak {
    fn name(&self) -> &'static str {
        "paragraph-break"
    }

    fn locate(&self, text: &IndexedText<'_>, target: usize) -> Option<usize> {
        let window_start = target.saturating_sub(self.window);
        let found = text.slice(window_start, target).rfind("\n\n")?;
        Some(text.char_pos(text.byte_offset(window_start) + found + 2))
    }
}

/// Cut after the last sentence terminator in the window
pub struct SentenceEnd {
    pub window: usize,
}

impl BoundaryStrategy for SentenceEnd {
    fn name(&self) -> &'static str {
        "sentence-end"
    }

    fn locate(&self, text: &IndexedText<'_>, target: usize) -> Option<usize> {
        sentence_end_before(text, target, self.window)
    }
}

/// Cut after the last newline in the window
pub struct LineBreak {
    pub window: usize,
}

impl BoundaryStrategy for LineBreak {
    fn name(&self) -> &'static str {
        "line-break"
    }

    fn locate(&self, text: &IndexedText<'_>, target: usize) -> Option<usize> {
        line_break_before(text, target, self.window)
    }
}

pub(super) fn sentence_end_before(
    text: &IndexedText<'_>,
    target: usize,
    window: usize,
) -> Option<usize> {
    let window_start = target.saturating_sub(window);
    let haystack = text.slice(window_start, target);

    let found = SENTENCE_ENDERS
        .iter()
        .filter_map(|ender| haystack.rfind(ender).map(|pos| pos + ender.len()))
        .max()?;
    Some(text.char_pos(text.byte_offset(window_start) + found))
}

pub(super) fn sentence_end_after(
    text: &IndexedText<'_>,
    position: usize,
    window: usize,
) -> Option<usize> {
    let haystack = text.slice(position, position + window);

    let found = SENTENCE_ENDERS
        .iter()
        .filter_map(|ender| haystack.find(ender).map(|pos| pos + ender.len()))
        .min()?;
    Some(text.char_pos(text.byte_offset(position) + found))
}

pub(super) fn line_break_before(
    text: &IndexedText<'_>,
    target: usize,
    window: usize,
) -> Option<usize> {
    let window_start = target.saturating_sub(window);
    let found = text.slice(window_start, target).rfind('\n')?;
    Some(text.char_pos(text.byte_offset(window_start) + found + 1))
}

pub(super) fn line_break_after(
    text: &IndexedText<'_>,
    position: usize,
    window: usize,
) -> Option<usize> {
    let found = text.slice(position, position + window).find('\n')?;
    Some(text.char_pos(text.byte_offset(position) + found + 1))
}
