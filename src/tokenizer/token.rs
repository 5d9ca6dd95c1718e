use core::fmt::{Debug, Display};
use std::ops::Range;

/// A comparison unit of a tokenized text together with its position in that
/// text.
///
/// Positions are character (Unicode scalar value) indices, not byte indices.
/// Tokens compare equal when their texts are equal, regardless of where they
/// are located, which is what the alignment needs.
#[derive(Clone, Copy)]
pub struct Token<'a> {
    text: &'a str,
    start: usize,
    end: usize,
}

impl<'a> Token<'a> {
    /// Creates a token starting at character index `start`.
    #[must_use]
    pub fn new(text: &'a str, start: usize) -> Self {
        Self {
            text,
            start,
            end: start + text.chars().count(),
        }
    }

    #[must_use]
    pub fn text(&self) -> &'a str { self.text }

    #[must_use]
    pub fn start(&self) -> usize { self.start }

    #[must_use]
    pub fn end(&self) -> usize { self.end }

    #[must_use]
    pub fn range(&self) -> Range<usize> { self.start..self.end }

    /// Number of characters in the token.
    #[must_use]
    pub fn len(&self) -> usize { self.end - self.start }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.start == self.end }

    /// Number of line feeds within the token.
    pub(crate) fn line_feed_count(&self) -> usize {
        self.text.bytes().filter(|byte| *byte == b'\n').count()
    }
}

impl PartialEq for Token<'_> {
    fn eq(&self, other: &Self) -> bool { self.text == other.text }
}

impl Eq for Token<'_> {}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "'{}'@{}..{}",
            self.text.replace('\r', "\\r").replace('\n', "\\n"),
            self.start,
            self.end
        )
    }
}

impl Debug for Token<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result { write!(f, "{self}") }
}
