//! The rule table for the target language.
//!
//! Four rule-sets, tried first-rule-wins:
//!
//! ```text
//! root     (* ──push──> comment      " ──push──> string
//!          numbers (included) · pattern · slot · grouping · message
//!          operator · symbol · whitespace
//! comment  text · (* ──push──> comment · *) ──pop──> · stray * ( )
//! string   text · escapes · " ──pop──>
//! numbers  base · scientific · real · integer
//! ```
//!
//! Word lists come from [`SymbolTables`] and are ordered longest-first, so a
//! multi-character operator always wins over its prefixes.

use mma_lexer_core::{Grammar, GrammarBuilder, GrammarError, RuleSpec, TokenKind};

use crate::{patterns, SymbolTables};

pub const ROOT: &str = "root";
pub const COMMENT: &str = "comment";
pub const STRING: &str = "string";
pub const NUMBERS: &str = "numbers";

/// Compile the rule table for `tables`.
pub fn build(tables: &SymbolTables) -> Result<Grammar, GrammarError> {
    let mut builder = GrammarBuilder::new();

    let root = builder.rule_set(ROOT);
    root.rule(RuleSpec::emit(r"\(\*", TokenKind::Comment).push(COMMENT))
        .rule(RuleSpec::emit("\"", TokenKind::String).push(STRING))
        .include(NUMBERS)
        .rule(RuleSpec::emit(patterns::pattern(), TokenKind::Pattern))
        .rule(RuleSpec::emit(patterns::slot(), TokenKind::Slot));
    if let Some(groupings) = alternation(tables.groupings()) {
        root.rule(RuleSpec::emit(groupings, TokenKind::Group));
    }
    root.rule(RuleSpec::groups(
        patterns::message(),
        [TokenKind::Operator, TokenKind::Whitespace, TokenKind::Message],
    ));
    if let Some(operators) = alternation(tables.operators()) {
        root.rule(RuleSpec::emit(operators, TokenKind::Operator));
    }
    root.rule(RuleSpec::emit(patterns::symbol(), TokenKind::Symbol))
        .rule(RuleSpec::emit(r"\s+", TokenKind::Whitespace));

    builder
        .rule_set(COMMENT)
        .rule(RuleSpec::emit(r"[^*()]+", TokenKind::Comment))
        .rule(RuleSpec::emit(r"\(\*", TokenKind::Comment).push(COMMENT))
        .rule(RuleSpec::emit(r"\*\)", TokenKind::Comment).pop())
        .rule(RuleSpec::emit(r"[*()]", TokenKind::Comment));

    builder
        .rule_set(STRING)
        .rule(RuleSpec::emit(r#"[^"\\]+"#, TokenKind::String))
        .rule(RuleSpec::emit(r#"\\["\\nr]"#, TokenKind::String))
        .rule(RuleSpec::emit(r"\\", TokenKind::String))
        .rule(RuleSpec::emit("\"", TokenKind::String).pop());

    builder
        .rule_set(NUMBERS)
        .rule(RuleSpec::emit(patterns::base(), TokenKind::Number))
        .rule(RuleSpec::emit(patterns::scientific(), TokenKind::Number))
        .rule(RuleSpec::emit(patterns::real(), TokenKind::Number))
        .rule(RuleSpec::emit(patterns::integer(), TokenKind::Number));

    builder.build(ROOT)
}

/// Escaped alternation of `words`, longest first; `None` when empty.
fn alternation(words: &[String]) -> Option<String> {
    if words.is_empty() {
        return None;
    }
    let mut sorted: Vec<&str> = words.iter().map(String::as_str).collect();
    sorted.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
    let escaped: Vec<String> = sorted.into_iter().map(regex::escape).collect();
    Some(escaped.join("|"))
}
