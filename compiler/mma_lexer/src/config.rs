//! Lexer configuration.

use crate::{Passes, ScopeResolution, SymbolTables};

/// Everything a [`MathematicaLexer`](crate::MathematicaLexer) is built from.
#[derive(Clone, Debug, Default)]
pub struct LexerConfig {
    /// Classification tables shared by the grammar and the passes.
    pub tables: SymbolTables,
    /// Annotation passes applied after tokenizing.
    pub passes: Passes,
    /// How body references find their binding.
    pub resolution: ScopeResolution,
}

impl LexerConfig {
    /// Standard tables with every annotation pass disabled.
    ///
    /// Output is exactly what the rule table produces.
    pub fn raw() -> Self {
        LexerConfig {
            passes: Passes::empty(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_tables(mut self, tables: SymbolTables) -> Self {
        self.tables = tables;
        self
    }

    #[must_use]
    pub fn with_passes(mut self, passes: Passes) -> Self {
        self.passes = passes;
        self
    }

    #[must_use]
    pub fn with_resolution(mut self, resolution: ScopeResolution) -> Self {
        self.resolution = resolution;
        self
    }
}

#[cfg(test)]
mod tests;
