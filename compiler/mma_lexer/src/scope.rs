//! Lexical scope tracking for `Block`, `Module` and `With`.
//!
//! A single-pass transducer over the classified token stream. It rewrites
//! the variables a scoping construct declares, and their uses in its body,
//! to [`TokenKind::LocalScope`]:
//!
//! ```text
//! Module[ {x = 1, y = {2, 3}} , x + y ]
//!       │ └── declaration ──┘   └ body ┘
//!       └ frame pushed                  └ frame popped
//! ```
//!
//! Each open construct owns a [`ScopeFrame`] on a stack. Inside the
//! declaration region a symbol is a new binding unless it appears in a
//! right-hand side (after `=` or `:=`). A comma ends a right-hand side only
//! when every grouping counter is back where it was when the region opened,
//! so commas inside list, association or call values do not.
//!
//! The annotator never looks ahead and emits exactly one token per input
//! token; only `kind` ever changes.

use mma_lexer_core::{Token, TokenKind};
use rustc_hash::FxHashSet;
use tracing::trace;

use crate::SymbolTables;

/// Openers tracked by `Counters::other_group`: `<|` `⟦` `〈` `〚`.
///
/// `⟨` is a grouping token but is not counted.
const OTHER_OPENERS: &[&str] = &["<|", "\u{27E6}", "\u{3008}", "\u{301A}"];
/// Closers tracked by `Counters::other_group`: `|>` `⟧` `〉` `〛`.
const OTHER_CLOSERS: &[&str] = &["|>", "\u{27E7}", "\u{3009}", "\u{301B}"];

/// How a body reference finds its binding.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ScopeResolution {
    /// Only the innermost open frame is consulted.
    ///
    /// `x` in `Block[{x}, Module[{y}, x]]` stays a plain symbol.
    #[default]
    Innermost,
    /// Walk outward through frames whose declaration region is closed,
    /// stopping at the first that declares the name.
    Enclosing,
}

/// Grouping counters of one frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// Unmatched `[` in this frame, its own included.
    pub bracket: usize,
    /// Unmatched `{` in the declaration region.
    pub brace: usize,
    /// Association and other-bracket openers minus closers.
    ///
    /// Unguarded: a stray closer drives it negative.
    pub other_group: isize,
}

/// One open scoping construct.
#[derive(Clone, Debug)]
pub struct ScopeFrame<'src> {
    depth: usize,
    counters: Counters,
    /// Counters at the instant the declaration `{` was seen. `None` until
    /// the declaration region opens.
    snapshot: Option<Counters>,
    declared: FxHashSet<&'src str>,
    in_right_hand_side: bool,
}

impl<'src> ScopeFrame<'src> {
    fn new(depth: usize) -> Self {
        ScopeFrame {
            depth,
            counters: Counters::default(),
            snapshot: None,
            declared: FxHashSet::default(),
            in_right_hand_side: false,
        }
    }

    /// Zero-based position on the frame stack.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn counters(&self) -> Counters {
        self.counters
    }

    pub fn snapshot(&self) -> Option<Counters> {
        self.snapshot
    }

    pub fn declares(&self, name: &str) -> bool {
        self.declared.contains(name)
    }

    /// Declared names, in no particular order.
    pub fn declared(&self) -> impl Iterator<Item = &'src str> + '_ {
        self.declared.iter().copied()
    }

    pub fn in_right_hand_side(&self) -> bool {
        self.in_right_hand_side
    }

    /// Inside the `{...}` that declares this frame's variables.
    pub fn in_declaration(&self) -> bool {
        self.counters.brace > 0
    }
}

/// Everything the annotator remembers between tokens.
#[derive(Clone, Debug, Default)]
pub struct ScopeState<'src> {
    frames: Vec<ScopeFrame<'src>>,
    keyword_pending: bool,
}

impl<'src> ScopeState<'src> {
    pub fn frames(&self) -> &[ScopeFrame<'src>] {
        &self.frames
    }

    /// A scoping keyword was seen and no `[` has opened its frame yet.
    pub fn keyword_pending(&self) -> bool {
        self.keyword_pending
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty() && !self.keyword_pending
    }
}

/// Rewrites bound variables of scoping constructs to `LocalScope`.
#[derive(Clone, Debug)]
pub struct ScopeAnnotator<'t, 'src> {
    tables: &'t SymbolTables,
    resolution: ScopeResolution,
    state: ScopeState<'src>,
}

impl<'t, 'src> ScopeAnnotator<'t, 'src> {
    pub fn new(tables: &'t SymbolTables, resolution: ScopeResolution) -> Self {
        ScopeAnnotator {
            tables,
            resolution,
            state: ScopeState::default(),
        }
    }

    /// Number of open frames.
    pub fn depth(&self) -> usize {
        self.state.frames.len()
    }

    pub fn state(&self) -> &ScopeState<'src> {
        &self.state
    }

    /// Forget every open frame and any pending keyword.
    pub fn reset(&mut self) {
        trace!(frames = self.state.frames.len(), "scope state reset");
        self.state = ScopeState::default();
    }

    /// Classify one token, updating the scope state.
    pub fn annotate(&mut self, token: Token<'src>) -> Token<'src> {
        if token.kind == TokenKind::Whitespace {
            return token;
        }
        let is_group = token.kind == TokenKind::Group;
        let text = token.text;

        if let Some(frame) = self.state.frames.last_mut() {
            if is_group && OTHER_OPENERS.contains(&text) {
                frame.counters.other_group += 1;
                return token;
            }
            if is_group && OTHER_CLOSERS.contains(&text) {
                frame.counters.other_group -= 1;
                return token;
            }
            if is_group && text == "}" {
                if frame.counters.brace > 0 {
                    frame.counters.brace -= 1;
                    if frame.counters.brace == 0 {
                        frame.in_right_hand_side = false;
                    }
                }
                return token;
            }
            if is_group && text == "]" {
                if frame.counters.bracket > 0 {
                    frame.counters.bracket -= 1;
                    if frame.counters.bracket == 0 {
                        self.pop_frame(token.offset);
                    }
                }
                return token;
            }
        }

        if token.kind == TokenKind::Builtin && self.tables.is_scoping_keyword(text) {
            self.state.keyword_pending = true;
            return token;
        }

        if is_group && text == "[" {
            if self.state.keyword_pending {
                self.push_frame(token.offset);
            }
            if let Some(frame) = self.state.frames.last_mut() {
                frame.counters.bracket += 1;
            }
            return token;
        }

        let Some(frame) = self.state.frames.last_mut() else {
            self.state.keyword_pending = false;
            return token;
        };

        if is_group && text == "{" {
            if frame.snapshot.is_none() {
                frame.counters.brace = 1;
                frame.snapshot = Some(frame.counters);
            } else if frame.counters.brace > 0 {
                frame.counters.brace += 1;
            }
            return token;
        }

        if frame.in_declaration() {
            if token.kind.is_symbol_like() {
                if frame.in_right_hand_side {
                    return token;
                }
                if frame.declared.insert(text) {
                    trace!(name = text, frame = frame.depth, "declared local");
                }
                return token.with_kind(TokenKind::LocalScope);
            }
            if token.kind == TokenKind::Operator && (text == "=" || text == ":=") {
                frame.in_right_hand_side = true;
            } else if is_group && text == "," && Some(frame.counters) == frame.snapshot {
                frame.in_right_hand_side = false;
            }
            return token;
        }

        if token.kind.is_symbol_like() {
            if self.resolves(text) {
                return token.with_kind(TokenKind::LocalScope);
            }
            return token;
        }

        self.state.keyword_pending = false;
        token
    }

    /// Whether a body reference to `name` is bound by an open frame.
    fn resolves(&self, name: &str) -> bool {
        match self.resolution {
            ScopeResolution::Innermost => self
                .state
                .frames
                .last()
                .is_some_and(|frame| frame.declares(name)),
            ScopeResolution::Enclosing => {
                for frame in self.state.frames.iter().rev() {
                    if frame.in_declaration() {
                        return false;
                    }
                    if frame.declares(name) {
                        return true;
                    }
                }
                false
            }
        }
    }

    fn push_frame(&mut self, offset: usize) {
        let depth = self.state.frames.len();
        self.state.keyword_pending = false;
        self.state.frames.push(ScopeFrame::new(depth));
        trace!(depth, offset, "scope frame pushed");
    }

    fn pop_frame(&mut self, offset: usize) {
        if let Some(frame) = self.state.frames.pop() {
            trace!(depth = frame.depth, offset, "scope frame popped");
        }
        if self.state.frames.is_empty() {
            self.reset();
        }
    }
}
