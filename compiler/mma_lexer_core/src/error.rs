//! Grammar construction errors.
//!
//! Tokenizing itself never fails: unmatched input becomes
//! [`TokenKind::Unknown`](crate::TokenKind::Unknown). Only turning a rule
//! table into a [`Grammar`](crate::Grammar) can go wrong.

/// Error building a [`Grammar`](crate::Grammar) from rule-set specifications.
#[derive(Clone, Debug, thiserror::Error)]
pub enum GrammarError {
    /// A rule's regex failed to compile.
    #[error("rule {index} in rule-set '{rule_set}' has an invalid pattern")]
    InvalidPattern {
        rule_set: String,
        index: usize,
        #[source]
        source: regex::Error,
    },

    /// A rule's regex accepts the empty string, which would stall the scanner.
    #[error("rule {index} in rule-set '{rule_set}' can match the empty string")]
    EmptyPattern { rule_set: String, index: usize },

    /// A push transition or include names a rule-set that was never defined.
    #[error("rule-set '{referenced_from}' refers to undefined rule-set '{name}'")]
    UnknownRuleSet {
        referenced_from: String,
        name: String,
    },

    /// The requested starting rule-set does not exist.
    #[error("root rule-set '{0}' is not defined")]
    MissingRoot(String),

    /// A rule-set includes itself, directly or through other includes.
    #[error("rule-set '{0}' includes itself")]
    IncludeCycle(String),
}
