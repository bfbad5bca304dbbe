//! extractfield-logging - Tracing subscriber setup
//!
//! This crate provides:
//! - [`LogLevel`] and [`LogConfig`], loadable from the `[logging]` table of
//!   `extractfield.toml`
//! - [`init_logging`] installing a `tracing` fmt subscriber that writes to
//!   stderr or to a log file
//!
//! Installing a subscriber is optional. Without one, the generator's events
//! are discarded.

mod level;
mod sink;
mod subscriber;

pub use level::{LogLevel, ParseLevelError, convert_level_to_filter};
pub use sink::FileSink;
pub use subscriber::{LogConfig, LoggingError, init_logging};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{LogConfig, LogLevel, init_logging};
}
