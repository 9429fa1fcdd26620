//! Per-token reclassification passes that need no state.
//!
//! Both run before scope tracking, so the scope annotator sees scoping
//! keywords as [`TokenKind::Builtin`] and Unicode brackets as
//! [`TokenKind::Group`].

use bitflags::bitflags;
use mma_lexer_core::{Token, TokenKind};

use crate::tables::single_char;
use crate::SymbolTables;

bitflags! {
    /// Which annotation passes a lexer applies, in the fixed order
    /// builtins, Unicode, lexical scope.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct Passes: u8 {
        /// Symbols naming System builtins become `Builtin`.
        const BUILTINS = 1 << 0;
        /// Unknown code points are looked up in the Unicode tables.
        const UNICODE = 1 << 1;
        /// Bound variables of scoping constructs become `LocalScope`.
        const LEXICAL_SCOPE = 1 << 2;
    }
}

impl Default for Passes {
    fn default() -> Self {
        Passes::all()
    }
}

/// Rewrite a `Symbol` naming a builtin to `Builtin`.
pub fn builtins<'src>(tables: &SymbolTables, token: Token<'src>) -> Token<'src> {
    if token.kind == TokenKind::Symbol && tables.is_builtin(token.text) {
        token.with_kind(TokenKind::Builtin)
    } else {
        token
    }
}

/// Rewrite an `Unknown` code point the Unicode tables recognize.
pub fn unicode<'src>(tables: &SymbolTables, token: Token<'src>) -> Token<'src> {
    if token.kind != TokenKind::Unknown {
        return token;
    }
    match single_char(token.text).and_then(|ch| tables.classify_unicode(ch)) {
        Some(kind) => token.with_kind(kind),
        None => token,
    }
}
