//! # extractfield
//!
//! Generates a nullable companion type for every struct marked
//! `#[extract_field]`: `Person { name: String, age: i32 }` gets an
//! `ExtractFieldPerson` with private `Option<String>` / `Option<i32>` fields
//! (all `None` by default), `getThename` / `getTheage` accessors and
//! `setThename` / `setTheage` mutators.
//!
//! ## Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! extractfield = "0.1"
//!
//! [build-dependencies]
//! extractfield = "0.1"
//! ```
//!
//! Generate in `build.rs`:
//!
//! ```ignore
//! fn main() -> Result<(), extractfield::BuildError> {
//!     extractfield::Builder::new().source_dir("src").generate()?;
//!     Ok(())
//! }
//! ```
//!
//! Mark the struct and pull the companion in next to it:
//!
//! ```ignore
//! // src/app/model.rs
//! use extractfield::extract_field;
//!
//! #[extract_field]
//! pub struct Person {
//!     pub name: String,
//!     pub age: i32,
//! }
//!
//! extractfield::include_extracted!("app/model/ExtractFieldPerson.rs");
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`extractfield_core`] - Metadata model, synthesis, emitters and the round driver
//! - [`extractfield_syn`] - Rust source files as a metadata source
//! - [`extractfield_macros`] - The `#[extract_field]` marker attribute

mod builder;

pub use builder::{BuildError, Builder};

// Re-export core types
pub use extractfield_core::{
    ConfigError, Diagnostic, Driver, GENERATED_DIR_OPTION, GenerateError, GeneratorConfig,
    MemorySource, MetadataSource, RoundReport, Settings, SynthesizedType, TargetLanguage,
};
pub use extractfield_core::{emit, model, naming};

// Re-export the source host
pub use extractfield_syn::{SourceError, SynSource};

// Re-export macros
pub use extractfield_macros::extract_field;

/// Include a companion type generated into `OUT_DIR`.
///
/// The path is relative to the generated-sources root and follows the
/// module path of the annotated struct.
///
/// ```ignore
/// extractfield::include_extracted!("app/model/ExtractFieldPerson.rs");
/// ```
#[macro_export]
macro_rules! include_extracted {
    ($path:literal) => {
        include!(concat!(env!("OUT_DIR"), "/", $path));
    };
}

/// Prelude module for convenient imports.
///
/// Use `use extractfield::prelude::*;` to import commonly used types.
pub mod prelude {
    pub use crate::{Builder, GeneratorConfig, TargetLanguage, extract_field, include_extracted};
}
