//! The host's reflection surface as seen by the generator.
//!
//! A host (a source parser, a compiler plugin, a test fixture) implements
//! [`MetadataSource`]; the driver, the synthesizer and the emitters only ever
//! talk to this trait.

mod memory;

pub use memory::MemorySource;

use crate::model::{AnnotatedDeclaration, FieldMetadata, SourceLocation};
use std::fmt;

/// Discovery, field reflection and diagnostic reporting supplied by a host
pub trait MetadataSource {
    /// All declarations in the current round that carry the marker `tag`.
    ///
    /// Order is the host's discovery order and is preserved by the driver.
    fn declarations_with_annotation(&self, tag: &str) -> Vec<AnnotatedDeclaration>;

    /// Direct, lexically declared data members of `decl`, in declaration order.
    ///
    /// Methods, nested types and inherited members are never returned.
    fn fields_of(&self, decl: &AnnotatedDeclaration) -> Vec<FieldMetadata>;

    /// Report an error against `decl` through the host's diagnostic channel.
    fn report_diagnostic(&mut self, decl: &AnnotatedDeclaration, message: &str);
}

/// An error reported against a declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Dotted name of the offending declaration
    pub declaration: String,
    pub message: String,
    pub location: Option<SourceLocation>,
}

impl Diagnostic {
    pub fn new(decl: &AnnotatedDeclaration, message: impl Into<String>) -> Self {
        Self {
            declaration: decl.qualified_name(),
            message: message.into(),
            location: decl.location.clone(),
        }
    }
}

/// Renders rustc-style: `error: <message>` followed by a location line.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error: {}", self.message)?;
        match &self.location {
            Some(location) => write!(f, "\n  --> {location} ({})", self.declaration),
            None => write!(f, "\n  --> {}", self.declaration),
        }
    }
}
