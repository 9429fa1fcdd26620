//! Command handlers for the `mma` CLI.
//!
//! Each submodule implements one command. Shared helpers such as
//! [`read_file`] and the lexer option parsing live here in the module root.

use std::path::{Path, PathBuf};

use mma_lexer::{LexerConfig, Passes, ScopeResolution};

use crate::CliError;

mod lex;
mod stats;

pub use lex::{lex_files, render_file, run_lex, LexOptions, OutputFormat};
pub use stats::{collect_stats, run_stats, FileStats, KindCounts};

/// Read a source file, mapping failures to a user-facing [`CliError`].
pub fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|e| CliError::read(&path.display().to_string(), e))
}

/// Options every lexing command accepts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexerFlags {
    /// Skip every annotation pass.
    pub raw: bool,
    /// Skip the lexical scope pass only.
    pub no_scope: bool,
    pub resolution: ScopeResolution,
}

impl LexerFlags {
    /// Consume `arg` if it is a lexer flag. `Ok(false)` means "not mine".
    pub fn accept(&mut self, arg: &str) -> Result<bool, CliError> {
        if arg == "--raw" {
            self.raw = true;
        } else if arg == "--no-scope" {
            self.no_scope = true;
        } else if let Some(mode) = arg.strip_prefix("--resolve=") {
            self.resolution = match mode {
                "innermost" => ScopeResolution::Innermost,
                "enclosing" => ScopeResolution::Enclosing,
                _ => {
                    return Err(CliError::Usage(format!(
                        "unknown resolution '{mode}' (expected innermost or enclosing)"
                    )))
                }
            };
        } else {
            return Ok(false);
        }
        Ok(true)
    }

    pub fn config(&self) -> LexerConfig {
        let mut passes = Passes::all();
        if self.raw {
            passes = Passes::empty();
        } else if self.no_scope {
            passes.remove(Passes::LEXICAL_SCOPE);
        }
        LexerConfig::default()
            .with_passes(passes)
            .with_resolution(self.resolution)
    }
}

/// Split `args` into lexer flags and paths, rejecting unknown flags.
///
/// `extra` gets first look at every flag so commands can add their own.
pub(crate) fn parse_args(
    args: &[String],
    mut extra: impl FnMut(&str) -> Result<bool, CliError>,
) -> Result<(LexerFlags, Vec<PathBuf>), CliError> {
    let mut flags = LexerFlags::default();
    let mut paths = Vec::new();
    for arg in args {
        if arg.starts_with('-') {
            if !extra(arg)? && !flags.accept(arg)? {
                return Err(CliError::Usage(format!("unknown option '{arg}'")));
            }
        } else {
            paths.push(PathBuf::from(arg));
        }
    }
    if paths.is_empty() {
        return Err(CliError::Usage("missing file or directory path".to_owned()));
    }
    Ok((flags, paths))
}
