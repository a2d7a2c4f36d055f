//! Source positions.
//!
//! The scanner works on a `Vec<char>`, so every `TextPos` is a character
//! offset into the source. Lines are 1-based, columns are 1-based and
//! counted in characters from the start of the line.

use std::fmt;
use std::ops::Range;

/// A character offset into source text.
pub type TextPos = u32;

/// A span in source text, defined by a start offset and a length.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct TextSpan {
    pub start: TextPos,
    pub length: TextPos,
}

impl TextSpan {
    #[inline]
    pub fn new(start: TextPos, length: TextPos) -> Self {
        Self { start, length }
    }

    #[inline]
    pub fn from_bounds(start: TextPos, end: TextPos) -> Self {
        debug_assert!(end >= start);
        Self {
            start,
            length: end.saturating_sub(start),
        }
    }

    #[inline]
    pub fn end(&self) -> TextPos {
        self.start + self.length
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    #[inline]
    pub fn contains(&self, pos: TextPos) -> bool {
        pos >= self.start && pos < self.end()
    }

    #[inline]
    pub fn to_range(&self) -> Range<usize> {
        self.start as usize..self.end() as usize
    }
}

impl fmt::Debug for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end())
    }
}

/// A 1-based line/column pair.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct LineColumn {
    pub line: u32,
    pub column: u32,
}

impl LineColumn {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for LineColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Convert a character offset into a byte offset of `text`.
///
/// Offsets past the end clamp to `text.len()`. Renderers that index the
/// UTF-8 source (such as miette) need byte offsets.
pub fn char_to_byte_offset(text: &str, offset: TextPos) -> usize {
    text.char_indices()
        .nth(offset as usize)
        .map(|(byte, _)| byte)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_span() {
        let span = TextSpan::new(5, 10);
        assert_eq!(span.end(), 15);
        assert!(span.contains(5));
        assert!(span.contains(14));
        assert!(!span.contains(15));
        assert_eq!(span.to_range(), 5..15);
    }

    #[test]
    fn test_text_span_from_bounds() {
        let span = TextSpan::from_bounds(3, 3);
        assert!(span.is_empty());
        assert_eq!(format!("{:?}", TextSpan::from_bounds(2, 7)), "2..7");
    }

    #[test]
    fn test_char_to_byte_offset() {
        let text = "é = 1;";
        assert_eq!(char_to_byte_offset(text, 0), 0);
        assert_eq!(char_to_byte_offset(text, 1), 2);
        assert_eq!(char_to_byte_offset(text, 100), text.len());
    }

    #[test]
    fn test_line_column_display() {
        assert_eq!(LineColumn::new(3, 14).to_string(), "3:14");
    }
}
