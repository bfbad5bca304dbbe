//! extractfield-core - Declaration metadata, type synthesis and source emission
//!
//! For every class carrying the marker annotation, extractfield generates a
//! companion type `ExtractField<Name>` holding one private, nullable copy of
//! each field plus a `getThe<field>` / `setThe<field>` pair.
//!
//! This crate is host independent:
//! - [`MetadataSource`] is the seam a host (source parser, compiler plugin)
//!   implements to expose declarations and report diagnostics
//! - [`reader`] and [`synth`] turn a declaration into a [`SynthesizedType`]
//! - [`emit`] renders that type as Rust or Kotlin and writes it to disk
//! - [`Driver`] runs a whole round over a source
//!
//! ```no_run
//! use extractfield_core::{Driver, GeneratorConfig, MemorySource};
//! use extractfield_core::model::{FieldMetadata, TypeRef};
//!
//! let settings = GeneratorConfig::new().with_generated_dir("target/generated").validate()?;
//! let mut source = MemorySource::new().with_class(
//!     "extract_field",
//!     "app.model",
//!     "Person",
//!     vec![FieldMetadata::new("name", TypeRef::String)],
//! );
//!
//! let report = Driver::new(settings).process_round(&mut source);
//! assert!(report.is_clean());
//! # Ok::<(), extractfield_core::ConfigError>(())
//! ```

pub mod config;
pub mod driver;
pub mod emit;
pub mod error;
pub mod model;
pub mod naming;
pub mod reader;
pub mod source;
pub mod synth;

pub use config::{GENERATED_DIR_OPTION, GeneratorConfig, Settings, TargetLanguage};
pub use driver::{DeclarationFailure, Driver, DriverState, ONLY_CLASSES_MESSAGE, RoundReport};
pub use error::{ConfigError, ConfigResult, GenerateError};
pub use model::SynthesizedType;
pub use source::{Diagnostic, MemorySource, MetadataSource};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::model::{
        AnnotatedDeclaration, DeclarationId, DeclarationKind, FieldMetadata, Namespace, Primitive,
        SourceLocation, TypeRef,
    };
    pub use crate::{
        ConfigError, Diagnostic, Driver, GeneratorConfig, MemorySource, MetadataSource,
        RoundReport, Settings, TargetLanguage,
    };
}
