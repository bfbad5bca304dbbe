//! In-memory metadata source

use super::{Diagnostic, MetadataSource};
use crate::model::{
    AnnotatedDeclaration, DeclarationId, DeclarationKind, FieldMetadata, Namespace,
};

#[derive(Debug, Clone)]
struct Entry {
    declaration: AnnotatedDeclaration,
    annotations: Vec<String>,
    fields: Vec<FieldMetadata>,
}

/// A host that hands over pre-collected declaration metadata.
///
/// Useful for embedders that already have a reflection model of their own,
/// and for exercising the driver without touching source files.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    entries: Vec<Entry>,
    diagnostics: Vec<Diagnostic>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a declaration carrying `annotation`.
    pub fn declare(
        &mut self,
        annotation: &str,
        namespace: Namespace,
        name: &str,
        kind: DeclarationKind,
        fields: Vec<FieldMetadata>,
    ) -> DeclarationId {
        let id = DeclarationId(self.entries.len());
        self.entries.push(Entry {
            declaration: AnnotatedDeclaration {
                id,
                name: name.to_string(),
                namespace,
                kind,
                location: None,
            },
            annotations: vec![annotation.to_string()],
            fields,
        });
        id
    }

    /// Builder-style shorthand for [`MemorySource::declare`] with a class.
    pub fn with_class(
        mut self,
        annotation: &str,
        namespace: &str,
        name: &str,
        fields: Vec<FieldMetadata>,
    ) -> Self {
        self.declare(
            annotation,
            Namespace::from_dotted(namespace),
            name,
            DeclarationKind::Class,
            fields,
        );
        self
    }

    /// Diagnostics reported so far
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

impl MetadataSource for MemorySource {
    fn declarations_with_annotation(&self, tag: &str) -> Vec<AnnotatedDeclaration> {
        self.entries
            .iter()
            .filter(|e| e.annotations.iter().any(|a| a == tag))
            .map(|e| e.declaration.clone())
            .collect()
    }

    fn fields_of(&self, decl: &AnnotatedDeclaration) -> Vec<FieldMetadata> {
        self.entries
            .get(decl.id.0)
            .map(|e| e.fields.clone())
            .unwrap_or_default()
    }

    fn report_diagnostic(&mut self, decl: &AnnotatedDeclaration, message: &str) {
        self.diagnostics.push(Diagnostic::new(decl, message));
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use crate::model::TypeRef;

    #[test]
    fn MemorySource___declarations_with_annotation___filters_by_tag() {
        let mut source = MemorySource::new();
        source.declare("extract_field", Namespace::root(), "A", DeclarationKind::Class, vec![]);
        source.declare("other", Namespace::root(), "B", DeclarationKind::Class, vec![]);

        let found = source.declarations_with_annotation("extract_field");

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "A");
    }

    #[test]
    fn MemorySource___fields_of___returns_registered_fields() {
        let source = MemorySource::new().with_class(
            "extract_field",
            "app",
            "Person",
            vec![FieldMetadata::new("name", TypeRef::String)],
        );
        let decl = &source.declarations_with_annotation("extract_field")[0];

        let fields = source.fields_of(decl);

        assert_eq!(fields, vec![FieldMetadata::new("name", TypeRef::String)]);
    }

    #[test]
    fn MemorySource___report_diagnostic___records_qualified_name() {
        let mut source = MemorySource::new();
        source.declare(
            "extract_field",
            Namespace::from_dotted("app"),
            "Color",
            DeclarationKind::Enum,
            vec![],
        );
        let decl = source.declarations_with_annotation("extract_field")[0].clone();

        source.report_diagnostic(&decl, "only classes can be annotated");

        assert_eq!(source.diagnostics().len(), 1);
        assert_eq!(source.diagnostics()[0].declaration, "app.Color");
        assert_eq!(
            source.diagnostics()[0].to_string(),
            "error: only classes can be annotated\n  --> app.Color"
        );
    }
}
