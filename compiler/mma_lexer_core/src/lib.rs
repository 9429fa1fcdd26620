//! Rule-set driven pattern tokenizer.
//!
//! This crate knows nothing about any particular language. It provides the
//! token model and an engine that turns an ordered, stateful table of regex
//! rules into a token stream:
//!
//! ```text
//! text ──> Tokenizer (active rule-set, push/pop stack) ──> Token { offset, kind, text }
//! ```
//!
//! Rule tables are assembled with [`GrammarBuilder`] and compiled once into a
//! [`Grammar`]; tokenizing borrows the grammar and never fails.
//!
//! # Example
//!
//! ```
//! use mma_lexer_core::{GrammarBuilder, RuleSpec, TokenKind};
//!
//! let mut builder = GrammarBuilder::new();
//! builder
//!     .rule_set("root")
//!     .rule(RuleSpec::emit(r"[0-9]+", TokenKind::Number))
//!     .rule(RuleSpec::emit(r"\s+", TokenKind::Whitespace));
//! let grammar = builder.build("root").unwrap();
//!
//! let kinds: Vec<_> = grammar.tokenize("1 2").map(|t| t.kind).collect();
//! assert_eq!(kinds, [TokenKind::Number, TokenKind::Whitespace, TokenKind::Number]);
//! ```

mod error;
mod kind;
mod rule;
mod token;
mod tokenizer;

pub use error::GrammarError;
pub use kind::{TokenKind, UnknownTokenKind};
pub use rule::{Action, Grammar, GrammarBuilder, RuleSetBuilder, RuleSetId, RuleSpec, Transition};
pub use token::Token;
pub use tokenizer::Tokenizer;
