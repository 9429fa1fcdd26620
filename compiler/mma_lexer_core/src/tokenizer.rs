//! Rule-stack tokenizer.
//!
//! Walks the input left to right. At each position the active rule-set's
//! rules are tried in order and the first non-empty match wins; its tokens
//! are queued and its transition applied to the rule-set stack. When nothing
//! matches, exactly one code point is emitted as [`TokenKind::Unknown`] and
//! scanning resumes after it.
//!
//! The output always partitions the input: offsets start at 0, are
//! contiguous, and the token texts concatenate back to the input.

use std::collections::VecDeque;

use regex::Captures;
use smallvec::{smallvec, SmallVec};
use tracing::trace;

use crate::rule::{Action, Step};
use crate::{Grammar, RuleSetId, Token, TokenKind};

/// Lazy token stream over one input.
///
/// Created by [`Grammar::tokenize`]. State is private to one pass; a new
/// input always starts in the grammar's root rule-set.
#[derive(Debug)]
pub struct Tokenizer<'g, 'src> {
    grammar: &'g Grammar,
    text: &'src str,
    /// Byte position of the next unscanned character.
    pos: usize,
    /// Code-point position of the next unscanned character.
    offset: usize,
    /// Active rule-set is the last element; never empty.
    stack: SmallVec<[RuleSetId; 8]>,
    /// Tokens produced by the last match but not yet yielded.
    pending: VecDeque<Token<'src>>,
}

impl<'g, 'src> Tokenizer<'g, 'src> {
    pub(crate) fn new(grammar: &'g Grammar, text: &'src str) -> Self {
        Tokenizer {
            grammar,
            text,
            pos: 0,
            offset: 0,
            stack: smallvec![grammar.root()],
            pending: VecDeque::new(),
        }
    }

    /// Number of rule-sets on the stack (1 when only the root is active).
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Name of the rule-set the next scan will use.
    pub fn active_rule_set(&self) -> &'g str {
        self.grammar.name_of(self.active())
    }

    fn active(&self) -> RuleSetId {
        // The root is never popped, so the stack is never empty.
        self.stack[self.stack.len() - 1]
    }

    /// Scan one match (or one unknown code point) into `pending`.
    fn scan(&mut self) {
        let grammar = self.grammar;
        let text = self.text;
        let rest: &'src str = &text[self.pos..];

        for rule in &grammar.rule_set(self.active()).rules {
            match &rule.action {
                Action::Emit(kind) => {
                    let Some(m) = rule.regex.find(rest) else {
                        continue;
                    };
                    if m.end() == 0 {
                        continue;
                    }
                    self.push_token(*kind, &rest[..m.end()]);
                }
                Action::Groups(kinds) => {
                    let Some(caps) = rule.regex.captures(rest) else {
                        continue;
                    };
                    let end = caps.get(0).map_or(0, |m| m.end());
                    if end == 0 {
                        continue;
                    }
                    self.push_groups(rest, &caps, kinds, end);
                }
            }
            self.apply(rule.step);
            return;
        }

        let width = rest.chars().next().map_or(rest.len(), char::len_utf8);
        self.push_token(TokenKind::Unknown, &rest[..width]);
    }

    fn push_groups(&mut self, rest: &'src str, caps: &Captures<'_>, kinds: &[TokenKind], end: usize) {
        let mut cursor = 0;
        for (i, kind) in kinds.iter().enumerate() {
            let Some(group) = caps.get(i + 1) else {
                continue;
            };
            // Nested or empty groups add nothing new.
            if group.start() < cursor || group.is_empty() {
                continue;
            }
            if group.start() > cursor {
                self.push_token(TokenKind::Unknown, &rest[cursor..group.start()]);
            }
            self.push_token(*kind, &rest[group.start()..group.end()]);
            cursor = group.end();
        }
        if cursor < end {
            self.push_token(TokenKind::Unknown, &rest[cursor..end]);
        }
    }

    fn push_token(&mut self, kind: TokenKind, text: &'src str) {
        self.pending.push_back(Token::new(self.offset, kind, text));
        self.pos += text.len();
        self.offset += text.chars().count();
    }

    fn apply(&mut self, step: Step) {
        match step {
            Step::Stay => {}
            Step::Push(id) => {
                trace!(
                    from = self.active_rule_set(),
                    to = self.grammar.name_of(id),
                    offset = self.offset,
                    "push rule-set"
                );
                self.stack.push(id);
            }
            Step::Pop => {
                if self.stack.len() > 1 {
                    self.stack.pop();
                    trace!(
                        to = self.active_rule_set(),
                        offset = self.offset,
                        "pop rule-set"
                    );
                }
            }
        }
    }
}

impl<'src> Iterator for Tokenizer<'_, 'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        if self.pending.is_empty() {
            if self.pos >= self.text.len() {
                return None;
            }
            self.scan();
        }
        self.pending.pop_front()
    }
}

impl std::iter::FusedIterator for Tokenizer<'_, '_> {}
