//! extractfield-syn - Rust source files as an extractfield host
//!
//! [`SynSource`] parses `.rs` files with `syn` and exposes every item that
//! carries an outer attribute through [`extractfield_core::MetadataSource`].
//! Namespaces follow the module tree: `src/app/model.rs` is `app.model`, and
//! inline `mod` blocks add a segment.
//!
//! ```no_run
//! use extractfield_core::{Driver, GeneratorConfig};
//! use extractfield_syn::SynSource;
//!
//! let settings = GeneratorConfig::new().with_generated_dir("target/generated").validate()?;
//! let mut source = SynSource::from_dir("src")?;
//! let report = Driver::new(settings).process_round(&mut source);
//! for diagnostic in source.diagnostics() {
//!     eprintln!("{diagnostic}");
//! }
//! # let _ = report;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod module_path;
mod source;
pub mod types;

pub use error::{SourceError, SourceResult};
pub use source::SynSource;
