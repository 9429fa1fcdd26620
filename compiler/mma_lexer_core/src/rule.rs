//! Rule tables and their compiled form.
//!
//! A grammar is a set of named rule-sets. Each rule-set is an ordered list of
//! rules; within the active rule-set the first rule whose regex matches at the
//! current position wins, so rule order encodes priority.
//!
//! ```text
//! GrammarBuilder ── rule_set("root") ── rule(RuleSpec) / include("numbers")
//!        │
//!        └── build("root") ──> Grammar { rule-sets with anchored regexes }
//! ```
//!
//! Includes are spliced in at build time, so the compiled grammar is flat:
//! every rule-set owns the complete, ordered list of rules it tries.

use regex::Regex;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{GrammarError, Tokenizer, TokenKind};

/// What happens to the rule-set stack after a rule matches.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Transition {
    /// Stay in the current rule-set.
    #[default]
    None,
    /// Make the named rule-set active, remembering the current one.
    Push(String),
    /// Return to the rule-set that was active before the most recent push.
    Pop,
}

/// How a match is turned into tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// The whole match becomes one token of this kind.
    Emit(TokenKind),
    /// Capture group `i + 1` becomes a token of the `i`-th kind.
    ///
    /// Empty groups produce no token. Any part of the match that no group
    /// covers is emitted as [`TokenKind::Unknown`].
    Groups(Vec<TokenKind>),
}

/// An uncompiled rule: pattern, action and transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleSpec {
    pattern: String,
    action: Action,
    transition: Transition,
}

impl RuleSpec {
    /// Emit the whole match as a single `kind` token.
    pub fn emit(pattern: impl Into<String>, kind: TokenKind) -> Self {
        RuleSpec {
            pattern: pattern.into(),
            action: Action::Emit(kind),
            transition: Transition::None,
        }
    }

    /// Emit one token per capture group.
    pub fn groups(pattern: impl Into<String>, kinds: impl Into<Vec<TokenKind>>) -> Self {
        RuleSpec {
            pattern: pattern.into(),
            action: Action::Groups(kinds.into()),
            transition: Transition::None,
        }
    }

    /// Push `target` after matching.
    #[must_use]
    pub fn push(mut self, target: impl Into<String>) -> Self {
        self.transition = Transition::Push(target.into());
        self
    }

    /// Pop the rule-set stack after matching.
    #[must_use]
    pub fn pop(mut self) -> Self {
        self.transition = Transition::Pop;
        self
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn action(&self) -> &Action {
        &self.action
    }

    pub fn transition(&self) -> &Transition {
        &self.transition
    }
}

#[derive(Clone, Debug)]
enum Entry {
    Rule(RuleSpec),
    Include(String),
}

/// Ordered entries of one rule-set under construction.
#[derive(Clone, Debug, Default)]
pub struct RuleSetBuilder {
    entries: Vec<Entry>,
}

impl RuleSetBuilder {
    /// Append a rule.
    pub fn rule(&mut self, spec: RuleSpec) -> &mut Self {
        self.entries.push(Entry::Rule(spec));
        self
    }

    /// Splice every rule of the named rule-set in at this position.
    pub fn include(&mut self, name: impl Into<String>) -> &mut Self {
        self.entries.push(Entry::Include(name.into()));
        self
    }
}

/// Collects named rule-sets and compiles them into a [`Grammar`].
#[derive(Clone, Debug, Default)]
pub struct GrammarBuilder {
    /// Definition order is kept so rule-set ids are deterministic.
    names: Vec<String>,
    sets: FxHashMap<String, RuleSetBuilder>,
}

impl GrammarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the rule-set called `name`, creating it empty on first use.
    pub fn rule_set(&mut self, name: &str) -> &mut RuleSetBuilder {
        if !self.sets.contains_key(name) {
            self.names.push(name.to_owned());
        }
        self.sets.entry(name.to_owned()).or_default()
    }

    /// Compile every rule-set, starting tokenization in `root`.
    pub fn build(&self, root: &str) -> Result<Grammar, GrammarError> {
        let ids: FxHashMap<&str, RuleSetId> = self
            .names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.as_str(), RuleSetId(i)))
            .collect();

        let root_id = *ids
            .get(root)
            .ok_or_else(|| GrammarError::MissingRoot(root.to_owned()))?;

        let mut sets = Vec::with_capacity(self.names.len());
        for name in &self.names {
            let mut specs = Vec::new();
            let mut visiting = vec![name.as_str()];
            self.flatten(name, &mut visiting, &mut specs)?;

            let rules = specs
                .into_iter()
                .enumerate()
                .map(|(index, spec)| compile_rule(name, index, spec, &ids))
                .collect::<Result<Vec<_>, _>>()?;
            sets.push(CompiledRuleSet {
                name: name.clone(),
                rules,
            });
        }

        debug!(
            rule_sets = sets.len(),
            rules = sets.iter().map(|s| s.rules.len()).sum::<usize>(),
            root,
            "compiled grammar"
        );

        Ok(Grammar {
            sets,
            root: root_id,
        })
    }

    /// Expand includes depth-first, preserving entry order.
    fn flatten<'b>(
        &'b self,
        name: &str,
        visiting: &mut Vec<&'b str>,
        out: &mut Vec<&'b RuleSpec>,
    ) -> Result<(), GrammarError> {
        let Some(set) = self.sets.get(name) else {
            return Err(GrammarError::UnknownRuleSet {
                referenced_from: visiting.last().copied().unwrap_or(name).to_owned(),
                name: name.to_owned(),
            });
        };

        for entry in &set.entries {
            match entry {
                Entry::Rule(spec) => out.push(spec),
                Entry::Include(target) => {
                    if visiting.contains(&target.as_str()) {
                        return Err(GrammarError::IncludeCycle(target.clone()));
                    }
                    if !self.sets.contains_key(target.as_str()) {
                        return Err(GrammarError::UnknownRuleSet {
                            referenced_from: name.to_owned(),
                            name: target.clone(),
                        });
                    }
                    visiting.push(target);
                    self.flatten(target, visiting, out)?;
                    visiting.pop();
                }
            }
        }
        Ok(())
    }
}

fn compile_rule(
    rule_set: &str,
    index: usize,
    spec: &RuleSpec,
    ids: &FxHashMap<&str, RuleSetId>,
) -> Result<CompiledRule, GrammarError> {
    let regex = Regex::new(&format!("^(?:{})", spec.pattern)).map_err(|source| {
        GrammarError::InvalidPattern {
            rule_set: rule_set.to_owned(),
            index,
            source,
        }
    })?;

    if regex.is_match("") {
        return Err(GrammarError::EmptyPattern {
            rule_set: rule_set.to_owned(),
            index,
        });
    }

    let step = match &spec.transition {
        Transition::None => Step::Stay,
        Transition::Pop => Step::Pop,
        Transition::Push(target) => {
            let id = ids
                .get(target.as_str())
                .ok_or_else(|| GrammarError::UnknownRuleSet {
                    referenced_from: rule_set.to_owned(),
                    name: target.clone(),
                })?;
            Step::Push(*id)
        }
    };

    Ok(CompiledRule {
        regex,
        action: spec.action.clone(),
        step,
    })
}

/// Index of a rule-set within a compiled [`Grammar`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RuleSetId(usize);

/// Compiled transition with resolved rule-set ids.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    Stay,
    Push(RuleSetId),
    Pop,
}

#[derive(Clone, Debug)]
pub(crate) struct CompiledRule {
    /// Anchored at the start of the haystack: `^(?:pattern)`.
    pub(crate) regex: Regex,
    pub(crate) action: Action,
    pub(crate) step: Step,
}

#[derive(Clone, Debug)]
pub(crate) struct CompiledRuleSet {
    pub(crate) name: String,
    pub(crate) rules: Vec<CompiledRule>,
}

/// A compiled, immutable rule table.
///
/// Cheap to share: tokenizing borrows the grammar, so one grammar can serve
/// any number of inputs.
#[derive(Clone, Debug)]
pub struct Grammar {
    sets: Vec<CompiledRuleSet>,
    root: RuleSetId,
}

impl Grammar {
    /// Start tokenizing `text` in the root rule-set.
    pub fn tokenize<'g, 'src>(&'g self, text: &'src str) -> Tokenizer<'g, 'src> {
        Tokenizer::new(self, text)
    }

    /// Tokenize `text` to completion.
    pub fn tokenize_all<'src>(&self, text: &'src str) -> Vec<crate::Token<'src>> {
        self.tokenize(text).collect()
    }

    pub fn root(&self) -> RuleSetId {
        self.root
    }

    /// Look up a rule-set id by name.
    pub fn id_of(&self, name: &str) -> Option<RuleSetId> {
        self.sets
            .iter()
            .position(|set| set.name == name)
            .map(RuleSetId)
    }

    /// Name of the rule-set with the given id.
    pub fn name_of(&self, id: RuleSetId) -> &str {
        &self.sets[id.0].name
    }

    /// Number of rules tried in the named rule-set, includes expanded.
    pub fn rule_count(&self, name: &str) -> Option<usize> {
        self.id_of(name).map(|id| self.sets[id.0].rules.len())
    }

    pub(crate) fn rule_set(&self, id: RuleSetId) -> &CompiledRuleSet {
        &self.sets[id.0]
    }
}
