//! Registration data for hosts that pick a lexer by name, file or MIME type.

use std::path::Path;

pub const NAME: &str = "Mathematica";

/// Short names a host may use to request this lexer.
pub const ALIASES: &[&str] = &["mathematica", "mma", "nb", "wl", "wolfram", "wolfram-language"];

/// File extensions, without the leading dot.
pub const FILE_EXTENSIONS: &[&str] = &["cdf", "m", "ma", "nb", "wl"];

pub const MIME_TYPES: &[&str] = &[
    "application/mathematica",
    "application/vnd.wolfram.mathematica",
    "application/vnd.wolfram.mathematica.package",
    "application/vnd.wolfram.cdf",
    "application/vnd.wolfram.cdf.text",
];

/// Whether `path` has one of [`FILE_EXTENSIONS`], ignoring ASCII case.
pub fn is_source_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            FILE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// Whether `name` is one of [`ALIASES`], ignoring ASCII case.
pub fn is_alias(name: &str) -> bool {
    ALIASES.iter().any(|alias| alias.eq_ignore_ascii_case(name))
}
