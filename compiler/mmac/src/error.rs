use std::io;

use mma_lexer::GrammarError;

/// Everything that can stop a command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot find file '{0}'")]
    NotFound(String),
    #[error("permission denied reading '{0}'")]
    PermissionDenied(String),
    #[error("'{0}' contains invalid UTF-8 data")]
    InvalidUtf8(String),
    #[error("error reading '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("invalid lexer grammar: {0}")]
    Grammar(#[from] GrammarError),
    #[error("cannot encode tokens: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Usage(String),
}

impl CliError {
    /// Map a read failure on `path` to the most specific variant.
    pub fn read(path: &str, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => CliError::NotFound(path.to_owned()),
            io::ErrorKind::PermissionDenied => CliError::PermissionDenied(path.to_owned()),
            io::ErrorKind::InvalidData => CliError::InvalidUtf8(path.to_owned()),
            _ => CliError::Io {
                path: path.to_owned(),
                source: err,
            },
        }
    }
}
