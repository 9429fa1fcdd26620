//! Token classification.
//!
//! Every span of input text is tagged with exactly one [`TokenKind`]. The
//! pattern tokenizer produces all kinds except [`TokenKind::Builtin`] and
//! [`TokenKind::LocalScope`], which only appear after annotation.

use std::fmt;
use std::str::FromStr;

/// Classification of a lexical token.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum TokenKind {
    /// A symbol from the `System` context (`Sin`, `Block`, `π`).
    Builtin,
    /// Text inside `(* ... *)`, delimiters included.
    Comment,
    /// Brackets, braces, parentheses, association delimiters and commas.
    Group,
    /// A symbol bound by an enclosing `Block`, `With` or `Module`.
    LocalScope,
    /// The tag of a message name (`ivar` in `General::ivar`).
    Message,
    /// Integer, real, base-N and scientific literals.
    Number,
    Operator,
    /// `x_`, `_Integer`, `x__List` and friends.
    Pattern,
    /// `#`, `##2`, `#name`, `#"name"`.
    Slot,
    /// String contents and their quotes.
    String,
    /// Any other symbol.
    Symbol,
    /// Input the grammar could not classify.
    Unknown,
    Whitespace,
}

impl TokenKind {
    /// All kinds, in declaration order.
    pub const ALL: [TokenKind; 13] = [
        TokenKind::Builtin,
        TokenKind::Comment,
        TokenKind::Group,
        TokenKind::LocalScope,
        TokenKind::Message,
        TokenKind::Number,
        TokenKind::Operator,
        TokenKind::Pattern,
        TokenKind::Slot,
        TokenKind::String,
        TokenKind::Symbol,
        TokenKind::Unknown,
        TokenKind::Whitespace,
    ];

    /// Stable lowercase identifier, suitable for CLI output and config keys.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Builtin => "builtin",
            TokenKind::Comment => "comment",
            TokenKind::Group => "group",
            TokenKind::LocalScope => "local_scope",
            TokenKind::Message => "message",
            TokenKind::Number => "number",
            TokenKind::Operator => "operator",
            TokenKind::Pattern => "pattern",
            TokenKind::Slot => "slot",
            TokenKind::String => "string",
            TokenKind::Symbol => "symbol",
            TokenKind::Unknown => "unknown",
            TokenKind::Whitespace => "whitespace",
        }
    }

    /// Conventional dotted highlighting scope for this kind.
    ///
    /// These are the scope names highlight themes key their styles on, so a
    /// renderer can map tokens to colors without knowing this crate's enum.
    pub const fn standard_scope(self) -> &'static str {
        match self {
            TokenKind::Builtin => "Name.Builtin",
            TokenKind::Comment => "Comment",
            TokenKind::Group => "Punctuation",
            TokenKind::LocalScope => "Name.Variable.Class",
            TokenKind::Message => "Name.Exception",
            TokenKind::Number => "Number",
            TokenKind::Operator => "Operator",
            TokenKind::Pattern => "Name.Tag",
            TokenKind::Slot => "Name.Function",
            TokenKind::String => "String",
            TokenKind::Symbol => "Name.Variable",
            TokenKind::Unknown => "Error",
            TokenKind::Whitespace => "Text.Whitespace",
        }
    }

    /// Whether this kind names a symbol (the kinds scope tracking rewrites).
    #[inline]
    pub const fn is_symbol_like(self) -> bool {
        matches!(self, TokenKind::Symbol | TokenKind::Builtin)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unrecognized token kind name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown token kind '{0}'")]
pub struct UnknownTokenKind(pub String);

impl FromStr for TokenKind {
    type Err = UnknownTokenKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownTokenKind(s.to_owned()))
    }
}
