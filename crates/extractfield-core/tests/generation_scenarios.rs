//! End-to-end generation scenarios against an in-memory host.

#![allow(non_snake_case)]

use extractfield_core::model::{DeclarationKind, FieldMetadata, Namespace, Primitive, TypeRef};
use extractfield_core::{
    ConfigError, Driver, GeneratorConfig, MemorySource, ONLY_CLASSES_MESSAGE, TargetLanguage,
};
use std::fs;
use tempfile::TempDir;

const TAG: &str = "extract_field";

fn driver(temp: &TempDir, language: TargetLanguage) -> Driver {
    let settings = GeneratorConfig::new()
        .with_generated_dir(temp.path())
        .with_language(language)
        .validate()
        .unwrap();
    Driver::new(settings)
}

/// Count `needle` occurrences in `haystack`.
fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn person___rust___n_properties_and_2n_methods() {
    let temp = TempDir::new().unwrap();
    let mut source = MemorySource::new().with_class(
        TAG,
        "app.model",
        "Person",
        vec![
            FieldMetadata::new("name", TypeRef::String),
            FieldMetadata::new("age", TypeRef::Primitive(Primitive::I32)),
        ],
    );

    let report = driver(&temp, TargetLanguage::Rust).process_round(&mut source);

    assert!(report.is_clean());
    let code = fs::read_to_string(temp.path().join("app/model/ExtractFieldPerson.rs")).unwrap();
    assert_eq!(count(&code, ": Option<"), 2 + 2); // two fields, two mutator params
    assert_eq!(count(&code, "pub fn getThe"), 2);
    assert_eq!(count(&code, "pub fn setThe"), 2);
    let name_pos = code.find("getThename").unwrap();
    let age_pos = code.find("getTheage").unwrap();
    assert!(name_pos < age_pos, "methods follow field order");
}

#[test]
fn person___kotlin___private_nullable_properties_initialized_to_null() {
    let temp = TempDir::new().unwrap();
    let mut source = MemorySource::new().with_class(
        TAG,
        "app.model",
        "Person",
        vec![
            FieldMetadata::new("name", TypeRef::String),
            FieldMetadata::new("age", TypeRef::Primitive(Primitive::I32)),
        ],
    );

    driver(&temp, TargetLanguage::Kotlin).process_round(&mut source);

    let code = fs::read_to_string(temp.path().join("app/model/ExtractFieldPerson.kt")).unwrap();
    assert!(code.contains("package app.model"));
    assert!(code.contains("private var name: String? = null"));
    assert!(code.contains("private var age: Int? = null"));
    assert!(code.contains("fun getTheage(): Int?"));
    assert!(code.contains("fun setTheage(age: Int?)"));
    assert_eq!(count(&code, "fun "), 4);
}

#[test]
fn empty___produces_memberless_type() {
    let temp = TempDir::new().unwrap();
    let mut source = MemorySource::new().with_class(TAG, "", "Empty", vec![]);

    driver(&temp, TargetLanguage::Kotlin).process_round(&mut source);

    let code = fs::read_to_string(temp.path().join("ExtractFieldEmpty.kt")).unwrap();
    assert!(code.ends_with("class ExtractFieldEmpty\n"));
}

#[test]
fn color_enum___no_file_and_one_diagnostic() {
    let temp = TempDir::new().unwrap();
    let mut source = MemorySource::new();
    source.declare(
        TAG,
        Namespace::from_dotted("app.model"),
        "Color",
        DeclarationKind::Enum,
        vec![],
    );

    let report = driver(&temp, TargetLanguage::Rust).process_round(&mut source);

    assert!(report.generated.is_empty());
    assert_eq!(source.diagnostics().len(), 1);
    assert_eq!(source.diagnostics()[0].message, ONLY_CLASSES_MESSAGE);
    assert_eq!(source.diagnostics()[0].declaration, "app.model.Color");
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn same_simple_name_in_two_namespaces___distinct_files() {
    let temp = TempDir::new().unwrap();
    let mut source = MemorySource::new()
        .with_class(TAG, "app.a", "Item", vec![])
        .with_class(TAG, "app.b", "Item", vec![]);

    let report = driver(&temp, TargetLanguage::Rust).process_round(&mut source);

    assert_eq!(
        report.generated,
        vec![
            temp.path().join("app/a/ExtractFieldItem.rs"),
            temp.path().join("app/b/ExtractFieldItem.rs"),
        ]
    );
}

#[test]
fn missing_output_configuration___fails_before_round() {
    let result = GeneratorConfig::new().validate();

    assert!(matches!(
        result,
        Err(ConfigError::MissingOutputConfiguration { .. })
    ));
}
