//! Classified spans of input text.

use crate::TokenKind;

/// A classified span of input text.
///
/// `offset` counts code points, not bytes, from the start of the input.
/// `text` borrows from the input, so the concatenation of every token's
/// text reproduces the input exactly.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token<'src> {
    pub offset: usize,
    pub kind: TokenKind,
    pub text: &'src str,
}

impl<'src> Token<'src> {
    #[inline]
    pub const fn new(offset: usize, kind: TokenKind, text: &'src str) -> Self {
        Token { offset, kind, text }
    }

    /// Length of the token in code points.
    #[inline]
    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    /// Code-point offset one past the last code point of this token.
    #[inline]
    pub fn end(&self) -> usize {
        self.offset + self.len_chars()
    }

    /// Same span, different classification.
    #[inline]
    #[must_use]
    pub const fn with_kind(self, kind: TokenKind) -> Self {
        Token {
            offset: self.offset,
            kind,
            text: self.text,
        }
    }
}
