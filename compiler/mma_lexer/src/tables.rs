//! Classification tables injected into the grammar and the annotator.
//!
//! [`SymbolTables::standard`] copies the static data from [`crate::symbols`]
//! into owned sets. Nothing here is global: two lexers built from different
//! tables never see each other's additions.

use mma_lexer_core::TokenKind;
use rustc_hash::FxHashSet;

use crate::symbols;

/// Owned lookup tables for one lexer.
#[derive(Clone, Debug)]
pub struct SymbolTables {
    builtins: FxHashSet<String>,
    scoping_keywords: FxHashSet<String>,
    unicode_builtins: FxHashSet<char>,
    unicode_groupings: FxHashSet<char>,
    unicode_operators: FxHashSet<char>,
    unicode_symbols: FxHashSet<char>,
    /// Root grouping words, in insertion order.
    groupings: Vec<String>,
    /// Root operator words, in insertion order.
    operators: Vec<String>,
}

impl SymbolTables {
    /// Tables with no entries at all.
    ///
    /// A grammar built from these still partitions its input; everything
    /// that is not a number, string, comment, pattern, slot, symbol or
    /// whitespace comes out as [`TokenKind::Unknown`].
    pub fn empty() -> Self {
        SymbolTables {
            builtins: FxHashSet::default(),
            scoping_keywords: FxHashSet::default(),
            unicode_builtins: FxHashSet::default(),
            unicode_groupings: FxHashSet::default(),
            unicode_operators: FxHashSet::default(),
            unicode_symbols: FxHashSet::default(),
            groupings: Vec::new(),
            operators: Vec::new(),
        }
    }

    /// The shipped tables.
    pub fn standard() -> Self {
        let mut tables = Self::empty();
        tables
            .builtins
            .extend(symbols::SYSTEM_SYMBOLS.iter().map(|s| (*s).to_owned()));
        tables
            .scoping_keywords
            .extend(symbols::SCOPING_KEYWORDS.iter().map(|s| (*s).to_owned()));
        tables
            .unicode_builtins
            .extend(symbols::UNICODE_SYSTEM_SYMBOLS.iter().copied());
        tables
            .unicode_groupings
            .extend(symbols::UNICODE_GROUPINGS.iter().copied());
        tables
            .unicode_operators
            .extend(symbols::UNICODE_OPERATORS.iter().copied());
        tables
            .unicode_symbols
            .extend(symbols::UNICODE_SYSTEM_UNDEFINED_SYMBOLS.iter().copied());
        for word in symbols::GROUPINGS {
            tables.push_grouping(word);
        }
        for word in symbols::OPERATORS {
            tables.push_operator(word);
        }
        tables
    }

    /// Treat `name` as a builtin symbol.
    #[must_use]
    pub fn with_builtin(mut self, name: impl Into<String>) -> Self {
        self.builtins.insert(name.into());
        self
    }

    /// Treat `name` as a scope-introducing keyword.
    ///
    /// Keywords are only recognized on builtin tokens, so the name is also
    /// registered as a builtin.
    #[must_use]
    pub fn with_scoping_keyword(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.builtins.insert(name.clone());
        self.scoping_keywords.insert(name);
        self
    }

    /// Recognize `word` as an operator in the root rule-set.
    #[must_use]
    pub fn with_operator(mut self, word: impl Into<String>) -> Self {
        self.push_operator(&word.into());
        self
    }

    /// Recognize `word` as grouping punctuation in the root rule-set.
    #[must_use]
    pub fn with_grouping(mut self, word: impl Into<String>) -> Self {
        self.push_grouping(&word.into());
        self
    }

    fn push_operator(&mut self, word: &str) {
        if !word.is_empty() && !self.operators.iter().any(|w| w == word) {
            self.operators.push(word.to_owned());
        }
    }

    fn push_grouping(&mut self, word: &str) {
        if !word.is_empty() && !self.groupings.iter().any(|w| w == word) {
            self.groupings.push(word.to_owned());
        }
    }

    /// Whether `text` names a builtin: a System-context name, or a single
    /// code point from the Unicode builtin set (`π`, `∞`, ...).
    pub fn is_builtin(&self, text: &str) -> bool {
        self.builtins.contains(text)
            || single_char(text).is_some_and(|ch| self.unicode_builtins.contains(&ch))
    }

    pub fn is_scoping_keyword(&self, text: &str) -> bool {
        self.scoping_keywords.contains(text)
    }

    /// Kind for a code point the grammar could not classify.
    ///
    /// Checked in priority order: builtin, grouping, operator, known symbol.
    pub fn classify_unicode(&self, ch: char) -> Option<TokenKind> {
        if self.unicode_builtins.contains(&ch) {
            Some(TokenKind::Builtin)
        } else if self.unicode_groupings.contains(&ch) {
            Some(TokenKind::Group)
        } else if self.unicode_operators.contains(&ch) {
            Some(TokenKind::Operator)
        } else if self.unicode_symbols.contains(&ch) {
            Some(TokenKind::Symbol)
        } else {
            None
        }
    }

    pub fn groupings(&self) -> &[String] {
        &self.groupings
    }

    pub fn operators(&self) -> &[String] {
        &self.operators
    }
}

impl Default for SymbolTables {
    fn default() -> Self {
        Self::standard()
    }
}

/// The only code point of `text`, if it has exactly one.
pub(crate) fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

#[cfg(test)]
mod tests;
