//! Error types for loading Rust sources

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for source loading
pub type SourceResult<T> = Result<T, SourceError>;

/// Failure while loading a source tree
#[derive(Error, Debug)]
pub enum SourceError {
    /// A source file could not be read
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A source file is not valid Rust
    #[error("failed to parse {path:?} at {line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// The source directory could not be traversed
    #[error("failed to walk source directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// The source root does not exist or is not a directory
    #[error("source root {0:?} is not a directory")]
    NotADirectory(PathBuf),
}

impl SourceError {
    pub(crate) fn parse(path: PathBuf, err: &syn::Error) -> Self {
        let start = err.span().start();
        SourceError::Parse {
            path,
            line: start.line,
            column: start.column + 1,
            message: err.to_string(),
        }
    }
}
