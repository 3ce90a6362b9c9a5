//! Source spans attached to declarations and diagnostics.

use std::fmt;

/// A position in source text, measured as a byte offset from the start.
pub type TextPos = u32;

/// A span in source text, defined by a start position and a length.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct TextSpan {
    /// The byte offset where this span starts.
    pub start: TextPos,
    /// The length of this span in bytes.
    pub length: TextPos,
}

impl TextSpan {
    #[inline]
    pub fn new(start: TextPos, length: TextPos) -> Self {
        Self { start, length }
    }

    /// The end position of this span (exclusive).
    #[inline]
    pub fn end(&self) -> TextPos {
        self.start + self.length
    }
}

impl fmt::Debug for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..{})", self.start, self.end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_end() {
        let span = TextSpan::new(4, 5);
        assert_eq!(span.end(), 9);
        assert_eq!(format!("{:?}", span), "[4..9)");
        assert_eq!(TextSpan::default(), TextSpan::new(0, 0));
    }
}
