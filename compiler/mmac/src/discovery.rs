//! Source file discovery.
//!
//! Directories named on the command line expand to every Mathematica source
//! file below them; plain file arguments are taken as given.

use std::fs;
use std::path::{Path, PathBuf};

use mma_lexer::metadata;

/// Find all source files under `root`, sorted by path.
pub fn discover_sources(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    discover_recursive(root, &mut files);
    files.sort();
    files
}

/// Entries never searched: dot-files and build or dependency output.
fn is_skipped(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.') || matches!(name, "target" | "node_modules"))
}

fn discover_recursive(dir: &Path, files: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for path in entries.flatten().map(|entry| entry.path()) {
        if is_skipped(&path) {
            continue;
        }
        if path.is_dir() {
            discover_recursive(&path, files);
        } else if metadata::is_source_path(&path) {
            files.push(path);
        }
    }
}

/// Expand command-line paths: directories are searched, anything else is
/// kept in place so a missing file is reported when it is read.
pub fn expand_paths(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            files.extend(discover_sources(path));
        } else {
            files.push(path.clone());
        }
    }
    files
}
