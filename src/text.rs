/// Character-indexed view over a borrowed string.
///
/// Every position handed out or accepted here is a character offset, so
/// slicing can never land inside a multi-byte sequence.
#[derive(Debug)]
pub struct IndexedText<'a> {
    text: &'a str,
    /// Byte offset of every character, plus a trailing `text.len()`
    offsets: Vec<usize>,
}

impl<'a> IndexedText<'a> {
    pub fn new(text: &'a str) -> Self {
        let offsets = text
            .char_indices()
            .map(|(byte, _)| byte)
            .chain(std::iter::once(text.len()))
            .collect();

        Self { text, offsets }
    }

    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Byte offset of a character position (clamped to the end)
    pub fn byte_offset(&self, pos: usize) -> usize {
        self.offsets[pos.min(self.len())]
    }

    /// Character position of a byte offset that sits on a char boundary
    pub fn char_pos(&self, byte: usize) -> usize {
        self.offsets.partition_point(|&b| b < byte)
    }

    /// Substring between two character positions
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        let end = end.min(self.len());
        let start = start.min(end);
        &self.text[self.byte_offset(start)..self.byte_offset(end)]
    }

    /// True when `byte` begins a line: start of text or right after `\n`
    pub fn is_line_start(&self, byte: usize) -> bool {
        byte == 0 || self.text.as_bytes().get(byte - 1) == Some(&b'\n')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_offsets() {
        let text = IndexedText::new("hello\nworld");
        assert_eq!(text.len(), 11);
        assert_eq!(text.slice(6, 11), "world");
        assert_eq!(text.byte_offset(6), 6);
        assert_eq!(text.char_pos(6), 6);
        assert!(text.is_line_start(6));
        assert!(!text.is_line_start(7));
    }

    #[test]
    fn test_multibyte_offsets() {
        let text = IndexedText::new("héllo 世界!");
        assert_eq!(text.len(), 9);
        assert_eq!(text.slice(6, 8), "世界");
        assert_eq!(text.char_pos(text.byte_offset(7)), 7);
    }

    #[test]
    fn test_slice_clamps() {
        let text = IndexedText::new("abc");
        assert_eq!(text.slice(1, 100), "bc");
        assert_eq!(text.slice(5, 2), "");
        assert!(IndexedText::new("").is_empty());
    }
}
