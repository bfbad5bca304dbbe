//! Builds the companion type model for one declaration.
//!
//! The transformation is pure and total:
//!
//! - type name is [`target_name`] of the source name
//! - every field becomes a private property of the field's nullable type,
//!   initialized to absent regardless of the original default
//! - every property gets an accessor and a mutator named by
//!   [`accessor_name`] / [`mutator_name`]
//!
//! Name collisions between generated members are not detected.

use crate::model::{FieldMetadata, Namespace, SynthesizedProperty, SynthesizedType};
use crate::naming::{accessor_name, mutator_name, target_name};
use crate::reader::DeclarationMetadata;

/// Synthesize the type model for `source_name` in `namespace`.
pub fn synthesize(
    source_name: &str,
    namespace: &Namespace,
    fields: &[FieldMetadata],
) -> SynthesizedType {
    SynthesizedType {
        name: target_name(source_name),
        namespace: namespace.clone(),
        source_name: source_name.to_string(),
        properties: fields.iter().map(synthesize_property).collect(),
    }
}

/// Synthesize straight from reader output.
pub fn synthesize_from(metadata: &DeclarationMetadata) -> SynthesizedType {
    synthesize(&metadata.simple_name, &metadata.namespace, &metadata.fields)
}

fn synthesize_property(field: &FieldMetadata) -> SynthesizedProperty {
    SynthesizedProperty {
        name: field.name.clone(),
        ty: field.declared_type.nullable(),
        accessor_name: accessor_name(&field.name),
        mutator_name: mutator_name(&field.name),
        docs: field.docs.clone(),
    }
}
