//! `mma stats`: count tokens per kind.

use std::fmt::Write as _;
use std::ops::AddAssign;
use std::path::{Path, PathBuf};

use mma_lexer::{MathematicaLexer, TokenKind};
use rayon::prelude::*;
use tracing::debug;

use super::{parse_args, read_file};
use crate::discovery::expand_paths;
use crate::CliError;

/// Token count per [`TokenKind`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct KindCounts([usize; TokenKind::ALL.len()]);

impl KindCounts {
    pub fn get(&self, kind: TokenKind) -> usize {
        self.0[kind as usize]
    }

    pub fn add(&mut self, kind: TokenKind) {
        self.0[kind as usize] += 1;
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// Kinds with a non-zero count, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (TokenKind, usize)> + '_ {
        TokenKind::ALL
            .iter()
            .map(|&kind| (kind, self.get(kind)))
            .filter(|&(_, count)| count > 0)
    }
}

impl AddAssign for KindCounts {
    fn add_assign(&mut self, other: Self) {
        for (mine, theirs) in self.0.iter_mut().zip(other.0) {
            *mine += theirs;
        }
    }
}

impl FromIterator<TokenKind> for KindCounts {
    fn from_iter<I: IntoIterator<Item = TokenKind>>(iter: I) -> Self {
        let mut counts = KindCounts::default();
        for kind in iter {
            counts.add(kind);
        }
        counts
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileStats {
    pub path: PathBuf,
    pub counts: KindCounts,
}

/// Lex every file in `paths` (directories are expanded) and count kinds.
///
/// Results come back in path order regardless of scheduling.
pub fn collect_stats(
    lexer: &MathematicaLexer,
    paths: &[PathBuf],
) -> Result<Vec<FileStats>, CliError> {
    let files = expand_paths(paths);
    debug!(files = files.len(), "collecting stats");
    files
        .par_iter()
        .map(|path| {
            let text = read_file(path)?;
            Ok::<_, CliError>(FileStats {
                path: path.clone(),
                counts: lexer.tokens(&text).map(|t| t.kind).collect(),
            })
        })
        .collect()
}

fn render_counts(out: &mut String, title: &Path, counts: &KindCounts) {
    let _ = writeln!(out, "{} ({} tokens)", title.display(), counts.total());
    for (kind, count) in counts.iter() {
        let _ = writeln!(out, "  {:<12} {count:>8}", kind.name());
    }
}

/// Render per-file counts followed by a total when there is more than one file.
pub(crate) fn render_stats(stats: &[FileStats]) -> String {
    let mut out = String::new();
    let mut total = KindCounts::default();
    for file in stats {
        render_counts(&mut out, &file.path, &file.counts);
        total += file.counts;
    }
    if stats.len() > 1 {
        render_counts(&mut out, Path::new("total"), &total);
    }
    out
}

/// Entry point for `mma stats <path>... [options]`.
pub fn run_stats(args: &[String]) -> Result<(), CliError> {
    let (flags, paths) = parse_args(args, |_| Ok(false))?;
    let lexer = MathematicaLexer::new(flags.config())?;
    let stats = collect_stats(&lexer, &paths)?;
    print!("{}", render_stats(&stats));
    Ok(())
}
