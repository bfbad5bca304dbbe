//! Reads name, namespace and direct fields of an annotated declaration.

use crate::model::{AnnotatedDeclaration, FieldMetadata, Namespace};
use crate::source::MetadataSource;

/// Everything the synthesizer needs to know about one declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationMetadata {
    pub simple_name: String,
    pub namespace: Namespace,

    /// Direct fields in declaration order; may be empty
    pub fields: Vec<FieldMetadata>,
}

/// Extract the metadata of `decl` from `source`.
///
/// Never fails: a declaration without fields yields an empty field list.
pub fn read<S: MetadataSource + ?Sized>(
    source: &S,
    decl: &AnnotatedDeclaration,
) -> DeclarationMetadata {
    let fields = source.fields_of(decl);

    tracing::trace!(
        declaration = %decl.qualified_name(),
        fields = fields.len(),
        "read declaration metadata"
    );

    DeclarationMetadata {
        simple_name: decl.name.clone(),
        namespace: decl.namespace.clone(),
        fields,
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use crate::model::{Primitive, TypeRef};
    use crate::source::MemorySource;

    #[test]
    fn read___returns_name_namespace_and_ordered_fields() {
        let source = MemorySource::new().with_class(
            "extract_field",
            "app.model",
            "Person",
            vec![
                FieldMetadata::new("name", TypeRef::String),
                FieldMetadata::new("age", TypeRef::Primitive(Primitive::I32)),
            ],
        );
        let decl = &source.declarations_with_annotation("extract_field")[0];

        let metadata = read(&source, decl);

        assert_eq!(metadata.simple_name, "Person");
        assert_eq!(metadata.namespace.to_dotted(), "app.model");
        let names: Vec<&str> = metadata.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["name", "age"]);
    }

    #[test]
    fn read___no_fields___returns_empty_list() {
        let source = MemorySource::new().with_class("extract_field", "app", "Empty", vec![]);
        let decl = &source.declarations_with_annotation("extract_field")[0];

        let metadata = read(&source, decl);

        assert!(metadata.fields.is_empty());
    }
}
