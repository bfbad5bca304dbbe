//! Error types for configuration and generation

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors. All of them are fatal for a round.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No generated-sources root was configured
    #[error("missing output configuration: set the `{option}` option to the generated-sources directory")]
    MissingOutputConfiguration { option: String },

    /// The annotation tag is not a usable identifier
    #[error("invalid annotation tag: {0:?}")]
    InvalidAnnotation(String),

    /// Target language name not recognized
    #[error("unknown target language: {0} (expected `rust` or `kotlin`)")]
    UnknownLanguage(String),

    /// Configuration text could not be parsed
    #[error("failed to parse configuration: {0}")]
    Parse(String),

    /// Configuration file could not be read
    #[error("failed to read configuration {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

/// Failure while writing one synthesized type to disk
#[derive(Error, Debug)]
pub enum GenerateError {
    /// The output directory could not be created
    #[error("failed to create directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The generated file could not be written
    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenerateError {
    /// Path the failed operation targeted
    pub fn path(&self) -> &std::path::Path {
        match self {
            GenerateError::CreateDir { path, .. } | GenerateError::Write { path, .. } => path,
        }
    }
}
