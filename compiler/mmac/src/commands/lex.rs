//! `mma lex`: print the token stream of one or more files.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use mma_lexer::{MathematicaLexer, Token};
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use super::{parse_args, read_file, LexerFlags};
use crate::discovery::expand_paths;
use crate::CliError;

/// How tokens are printed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `offset kind text`, one token per line.
    #[default]
    Plain,
    /// `offset scope text`, using conventional highlighting scopes.
    Scopes,
    /// One JSON object per file.
    Json,
}

impl OutputFormat {
    fn parse(name: &str) -> Result<Self, CliError> {
        match name {
            "plain" => Ok(OutputFormat::Plain),
            "scopes" => Ok(OutputFormat::Scopes),
            "json" => Ok(OutputFormat::Json),
            _ => Err(CliError::Usage(format!(
                "unknown format '{name}' (expected plain, scopes or json)"
            ))),
        }
    }
}

/// Parsed arguments of `mma lex`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexOptions {
    pub paths: Vec<PathBuf>,
    pub format: OutputFormat,
    pub flags: LexerFlags,
}

impl LexOptions {
    pub fn parse(args: &[String]) -> Result<Self, CliError> {
        let mut format = OutputFormat::default();
        let (flags, paths) = parse_args(args, |arg| {
            let Some(name) = arg.strip_prefix("--format=") else {
                return Ok(false);
            };
            format = OutputFormat::parse(name)?;
            Ok(true)
        })?;
        Ok(LexOptions {
            paths,
            format,
            flags,
        })
    }
}

#[derive(Serialize)]
struct FileTokens<'a> {
    path: String,
    tokens: &'a [Token<'a>],
}

/// Render the tokens of one file in `format`.
pub fn render_file(
    path: &Path,
    tokens: &[Token<'_>],
    format: OutputFormat,
) -> Result<String, CliError> {
    let mut out = String::new();
    match format {
        OutputFormat::Json => {
            let file = FileTokens {
                path: path.display().to_string(),
                tokens,
            };
            out.push_str(&serde_json::to_string(&file)?);
            out.push('\n');
        }
        OutputFormat::Plain | OutputFormat::Scopes => {
            let _ = writeln!(out, "{} ({} tokens)", path.display(), tokens.len());
            for token in tokens {
                let label = if format == OutputFormat::Plain {
                    token.kind.name()
                } else {
                    token.kind.standard_scope()
                };
                let _ = writeln!(out, "{:>6} {label:<20} {:?}", token.offset, token.text);
            }
        }
    }
    Ok(out)
}

/// Lex every file named by `options`, in parallel, returning the rendered
/// output in path order.
pub fn lex_files(options: &LexOptions) -> Result<String, CliError> {
    let lexer = MathematicaLexer::new(options.flags.config())?;
    let files = expand_paths(&options.paths);
    debug!(files = files.len(), format = ?options.format, "lexing");

    let rendered = files
        .par_iter()
        .map(|path| {
            let text = read_file(path)?;
            let tokens = lexer.lex(&text);
            render_file(path, &tokens, options.format)
        })
        .collect::<Result<Vec<_>, CliError>>()?;
    Ok(rendered.concat())
}

/// Entry point for `mma lex <path>... [options]`.
pub fn run_lex(args: &[String]) -> Result<(), CliError> {
    let options = LexOptions::parse(args)?;
    print!("{}", lex_files(&options)?);
    Ok(())
}
