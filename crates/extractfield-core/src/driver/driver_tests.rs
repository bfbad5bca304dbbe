#![allow(non_snake_case)]

use super::*;
use crate::config::{GeneratorConfig, TargetLanguage};
use crate::model::{DeclarationKind, FieldMetadata, Namespace, Primitive, TypeRef};
use crate::source::MemorySource;
use std::fs;
use tempfile::TempDir;

const TAG: &str = "extract_field";

fn settings(root: &std::path::Path, language: TargetLanguage) -> Settings {
    GeneratorConfig::default()
        .with_generated_dir(root)
        .with_language(language)
        .validate()
        .unwrap()
}

fn person_fields() -> Vec<FieldMetadata> {
    vec![
        FieldMetadata::new("name", TypeRef::String),
        FieldMetadata::new("age", TypeRef::Primitive(Primitive::I32)),
    ]
}

#[test]
fn Driver___new___starts_idle() {
    let temp = TempDir::new().unwrap();

    let driver = Driver::new(settings(temp.path(), TargetLanguage::Rust));

    assert_eq!(driver.state(), &DriverState::Idle);
}

#[test]
fn Driver___empty_round___not_claimed_and_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let mut driver = Driver::new(settings(temp.path(), TargetLanguage::Rust));
    let mut source = MemorySource::new().with_class("other_tag", "app", "Person", person_fields());

    let report = driver.process_round(&mut source);

    assert!(!report.claimed);
    assert!(report.generated.is_empty());
    assert!(report.is_clean());
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
    assert_eq!(driver.state(), &DriverState::Idle);
}

#[test]
fn Driver___person___writes_file_in_namespace_directory() {
    let temp = TempDir::new().unwrap();
    let mut driver = Driver::new(settings(temp.path(), TargetLanguage::Rust));
    let mut source = MemorySource::new().with_class(TAG, "app.model", "Person", person_fields());

    let report = driver.process_round(&mut source);

    let expected = temp.path().join("app/model/ExtractFieldPerson.rs");
    assert!(report.claimed);
    assert_eq!(report.generated, vec![expected.clone()]);
    let content = fs::read_to_string(expected).unwrap();
    assert!(content.contains("name: Option<String>,"));
    assert!(content.contains("age: Option<i32>,"));
    assert!(content.contains("pub fn getTheage(&self) -> Option<&i32>"));
    assert!(content.contains("pub fn setTheage(&mut self, age: Option<i32>)"));
}

#[test]
fn Driver___kotlin_language___writes_kt_file() {
    let temp = TempDir::new().unwrap();
    let mut driver = Driver::new(settings(temp.path(), TargetLanguage::Kotlin));
    let mut source = MemorySource::new().with_class(TAG, "app.model", "Person", person_fields());

    let report = driver.process_round(&mut source);

    let expected = temp.path().join("app/model/ExtractFieldPerson.kt");
    assert_eq!(report.generated, vec![expected.clone()]);
    let content = fs::read_to_string(expected).unwrap();
    assert!(content.contains("private var age: Int? = null"));
}

#[test]
fn Driver___empty_class___writes_type_without_members() {
    let temp = TempDir::new().unwrap();
    let mut driver = Driver::new(settings(temp.path(), TargetLanguage::Rust));
    let mut source = MemorySource::new().with_class(TAG, "app", "Empty", vec![]);

    let report = driver.process_round(&mut source);

    assert!(report.is_clean());
    let content = fs::read_to_string(temp.path().join("app/ExtractFieldEmpty.rs")).unwrap();
    assert!(content.contains("pub struct ExtractFieldEmpty {}"));
}

#[test]
fn Driver___enum___one_diagnostic_and_no_file() {
    let temp = TempDir::new().unwrap();
    let mut driver = Driver::new(settings(temp.path(), TargetLanguage::Rust));
    let mut source = MemorySource::new();
    source.declare(
        TAG,
        Namespace::from_dotted("app"),
        "Color",
        DeclarationKind::Enum,
        vec![],
    );

    let report = driver.process_round(&mut source);

    assert!(report.claimed);
    assert_eq!(report.rejected, vec!["app.Color".to_string()]);
    assert!(report.generated.is_empty());
    assert!(!report.is_clean());
    assert_eq!(source.diagnostics().len(), 1);
    assert_eq!(source.diagnostics()[0].message, ONLY_CLASSES_MESSAGE);
    assert!(!temp.path().join("app").exists());
}

#[test]
fn Driver___invalid_declaration___does_not_abort_round() {
    let temp = TempDir::new().unwrap();
    let mut driver = Driver::new(settings(temp.path(), TargetLanguage::Rust));
    let mut source = MemorySource::new();
    source.declare(TAG, Namespace::root(), "Color", DeclarationKind::Enum, vec![]);
    source.declare(TAG, Namespace::root(), "Shape", DeclarationKind::Interface, vec![]);
    source.declare(TAG, Namespace::root(), "Person", DeclarationKind::Class, person_fields());

    let report = driver.process_round(&mut source);

    assert_eq!(report.rejected.len(), 2);
    assert_eq!(source.diagnostics().len(), 2);
    assert_eq!(
        report.generated,
        vec![temp.path().join("ExtractFieldPerson.rs")]
    );
}

#[test]
fn Driver___write_failure___isolated_to_one_declaration() {
    let temp = TempDir::new().unwrap();
    // A directory squatting on the target path makes that one write fail.
    fs::create_dir_all(temp.path().join("app/ExtractFieldB.rs")).unwrap();
    let mut driver = Driver::new(settings(temp.path(), TargetLanguage::Rust));
    let mut source = MemorySource::new()
        .with_class(TAG, "app", "A", vec![])
        .with_class(TAG, "app", "B", vec![])
        .with_class(TAG, "app", "C", vec![]);

    let report = driver.process_round(&mut source);

    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].declaration, "app.B");
    assert!(matches!(report.failures[0].error, GenerateError::Write { .. }));
    assert_eq!(
        report.generated,
        vec![
            temp.path().join("app/ExtractFieldA.rs"),
            temp.path().join("app/ExtractFieldC.rs"),
        ]
    );
    assert_eq!(driver.state(), &DriverState::Idle);
}

#[test]
fn Driver___second_round___output_byte_identical() {
    let temp = TempDir::new().unwrap();
    let mut driver = Driver::new(settings(temp.path(), TargetLanguage::Rust));
    let mut source = MemorySource::new().with_class(TAG, "app.model", "Person", person_fields());

    let first_report = driver.process_round(&mut source);
    let first = fs::read(&first_report.generated[0]).unwrap();
    let second_report = driver.process_round(&mut source);
    let second = fs::read(&second_report.generated[0]).unwrap();

    assert_eq!(first, second);
}

#[test]
fn Driver___custom_annotation___only_that_tag_discovered() {
    let temp = TempDir::new().unwrap();
    let settings = GeneratorConfig::default()
        .with_generated_dir(temp.path())
        .with_annotation("shadow")
        .validate()
        .unwrap();
    let mut driver = Driver::new(settings);
    let mut source = MemorySource::new()
        .with_class(TAG, "", "Ignored", vec![])
        .with_class("shadow", "", "Picked", vec![]);

    let report = driver.process_round(&mut source);

    assert_eq!(
        report.generated,
        vec![temp.path().join("ExtractFieldPicked.rs")]
    );
}

#[test]
fn Driver___with_subscriber___logs_without_changing_outcome() {
    let temp = TempDir::new().unwrap();
    let mut driver = Driver::new(settings(temp.path(), TargetLanguage::Rust));
    let mut source = MemorySource::new().with_class(TAG, "app", "Person", person_fields());
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .finish();

    let report = tracing::subscriber::with_default(subscriber, || driver.process_round(&mut source));

    assert!(report.is_clean());
    assert_eq!(report.generated.len(), 1);
}

#[test]
fn DriverState___display___names_declaration() {
    let state = DriverState::Processing {
        declaration: "app.Person".into(),
    };

    assert_eq!(state.to_string(), "Processing(app.Person)");
}
