//! Syntax-highlighting lexer for Mathematica / Wolfram Language source.
//!
//! # Architecture
//!
//! ```text
//! text ─> Tokenizer (mma_lexer_core, rule table from `grammar`)
//!      ─> builtins  (Symbol → Builtin)
//!      ─> unicode   (Unknown → Builtin / Group / Operator / Symbol)
//!      ─> scope     (bound variables → LocalScope)
//!      ─> Token { offset, kind, text }
//! ```
//!
//! Every stage emits exactly one token per token it receives, so the final
//! stream still partitions the input. Lexing never fails; only compiling the
//! rule table can, and that happens once in [`MathematicaLexer::new`].
//!
//! # Example
//!
//! ```
//! use mma_lexer::{MathematicaLexer, TokenKind};
//!
//! let lexer = MathematicaLexer::standard().unwrap();
//! let locals: Vec<_> = lexer
//!     .tokens("Module[{x = 1}, x + y]")
//!     .filter(|t| t.kind == TokenKind::LocalScope)
//!     .map(|t| t.text)
//!     .collect();
//! assert_eq!(locals, ["x", "x"]);
//! ```

pub mod annotate;
mod config;
pub mod grammar;
pub mod metadata;
pub mod patterns;
mod scope;
pub mod symbols;
mod tables;

pub use annotate::Passes;
pub use config::LexerConfig;
pub use mma_lexer_core::{Grammar, GrammarError, Token, TokenKind, Tokenizer, UnknownTokenKind};
pub use scope::{Counters, ScopeAnnotator, ScopeFrame, ScopeResolution, ScopeState};
pub use tables::SymbolTables;

use tracing::debug;

/// A compiled lexer: rule table plus annotation settings.
///
/// Immutable after construction, so one lexer can serve many inputs,
/// including from several threads at once.
#[derive(Clone, Debug)]
pub struct MathematicaLexer {
    grammar: Grammar,
    config: LexerConfig,
}

impl MathematicaLexer {
    /// Compile the rule table for `config`.
    pub fn new(config: LexerConfig) -> Result<Self, GrammarError> {
        let grammar = grammar::build(&config.tables)?;
        debug!(
            passes = ?config.passes,
            resolution = ?config.resolution,
            "lexer ready"
        );
        Ok(MathematicaLexer { grammar, config })
    }

    /// A lexer with the standard tables and every pass enabled.
    pub fn standard() -> Result<Self, GrammarError> {
        Self::new(LexerConfig::default())
    }

    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Lazily lex `text`. Scope state starts empty for every call.
    pub fn tokens<'a, 'src>(&'a self, text: &'src str) -> Tokens<'a, 'src> {
        Tokens {
            inner: self.grammar.tokenize(text),
            tables: &self.config.tables,
            passes: self.config.passes,
            scope: ScopeAnnotator::new(&self.config.tables, self.config.resolution),
        }
    }

    /// Lex `text` to completion.
    #[tracing::instrument(level = "debug", skip_all, fields(len = text.len()))]
    pub fn lex<'src>(&self, text: &'src str) -> Vec<Token<'src>> {
        let tokens: Vec<_> = self.tokens(text).collect();
        debug!(tokens = tokens.len(), "lexed");
        tokens
    }

    /// Tokenize `text` without any annotation pass.
    #[tracing::instrument(level = "debug", skip_all, fields(len = text.len()))]
    pub fn raw_tokens<'src>(&self, text: &'src str) -> Vec<Token<'src>> {
        self.grammar.tokenize_all(text)
    }
}

/// Token stream produced by [`MathematicaLexer::tokens`].
#[derive(Debug)]
pub struct Tokens<'a, 'src> {
    inner: Tokenizer<'a, 'src>,
    tables: &'a SymbolTables,
    passes: Passes,
    scope: ScopeAnnotator<'a, 'src>,
}

impl Tokens<'_, '_> {
    /// Number of scoping constructs open at the current position.
    pub fn scope_depth(&self) -> usize {
        self.scope.depth()
    }

    /// Number of rule-sets on the tokenizer's stack.
    pub fn rule_set_depth(&self) -> usize {
        self.inner.depth()
    }
}

impl<'src> Iterator for Tokens<'_, 'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        let mut token = self.inner.next()?;
        if self.passes.contains(Passes::BUILTINS) {
            token = annotate::builtins(self.tables, token);
        }
        if self.passes.contains(Passes::UNICODE) {
            token = annotate::unicode(self.tables, token);
        }
        if self.passes.contains(Passes::LEXICAL_SCOPE) {
            token = self.scope.annotate(token);
        }
        Some(token)
    }
}

impl std::iter::FusedIterator for Tokens<'_, '_> {}

/// Lex `text` with a freshly compiled standard lexer.
///
/// Compiles the rule table on every call; keep a [`MathematicaLexer`]
/// around when lexing more than one input.
pub fn lex(text: &str) -> Result<Vec<Token<'_>>, GrammarError> {
    Ok(MathematicaLexer::standard()?.lex(text))
}
