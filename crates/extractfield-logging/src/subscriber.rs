//! Global subscriber installation

use crate::level::{LogLevel, convert_level_to_filter};
use crate::sink::FileSink;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Where and how verbosely to log
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Threshold used when `RUST_LOG` is not set
    pub level: LogLevel,

    /// Log file; stderr when unset
    pub file: Option<PathBuf>,
}

impl LogConfig {
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// `RUST_LOG` when set and valid, otherwise the configured level.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| self.level_filter())
    }

    fn level_filter(&self) -> EnvFilter {
        EnvFilter::builder()
            .with_default_directive(convert_level_to_filter(self.level).into())
            .parse_lossy("")
    }
}

/// Failure to set up logging
#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("failed to open log file {path:?}: {source}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Install the global fmt subscriber described by `config`.
///
/// Call once at startup. If a global subscriber is already set, the call is
/// a no-op.
pub fn init_logging(config: &LogConfig) -> Result<(), LoggingError> {
    let filter = config.env_filter();

    // Ignore the error if a subscriber is already installed
    let _ = match &config.file {
        Some(path) => {
            let sink = FileSink::open(path).map_err(|source| LoggingError::OpenFile {
                path: path.clone(),
                source,
            })?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(sink)
                .with_ansi(false)
                .try_init()
        }
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
    };

    Ok(())
}
