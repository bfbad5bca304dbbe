//! Integration tests for the extractfield binary.

#![allow(non_snake_case)]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn extractfield(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_extractfield"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .unwrap()
}

fn write_model(temp: &TempDir, model: &str) {
    let dir = temp.path().join("src/app");
    fs::create_dir_all(&dir).unwrap();
    fs::write(temp.path().join("src/lib.rs"), "pub mod app;\n").unwrap();
    fs::write(dir.join("model.rs"), model).unwrap();
}

#[test]
fn generate___person___exits_zero_and_writes_file() {
    let temp = TempDir::new().unwrap();
    write_model(&temp, "#[extract_field]\npub struct Person { name: String, age: i32 }\n");

    let output = extractfield(
        temp.path(),
        &["generate", "--source", "src", "--generated-dir", "gen"],
    );

    assert!(output.status.success(), "{output:?}");
    let code = fs::read_to_string(temp.path().join("gen/app/model/ExtractFieldPerson.rs")).unwrap();
    assert!(code.contains("pub fn getThename(&self) -> Option<&String>"));
}

#[test]
fn generate___kotlin_flag___writes_kt_file() {
    let temp = TempDir::new().unwrap();
    write_model(&temp, "#[extract_field]\npub struct Person { age: i32 }\n");

    let output = extractfield(
        temp.path(),
        &["generate", "-s", "src", "-g", "gen", "--lang", "kotlin"],
    );

    assert!(output.status.success(), "{output:?}");
    assert!(temp.path().join("gen/app/model/ExtractFieldPerson.kt").is_file());
}

#[test]
fn generate___enum___nonzero_exit_with_diagnostic() {
    let temp = TempDir::new().unwrap();
    write_model(&temp, "#[extract_field]\npub enum Color { Red }\n");

    let output = extractfield(
        temp.path(),
        &["generate", "--source", "src", "--generated-dir", "gen"],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: only classes can be annotated"), "{stderr}");
    assert!(stderr.contains("model.rs:1:1"), "{stderr}");
}

#[test]
fn generate___config_file_in_cwd___supplies_generated_dir() {
    let temp = TempDir::new().unwrap();
    write_model(&temp, "#[extract_field]\npub struct Empty;\n");
    fs::write(
        temp.path().join("extractfield.toml"),
        "[generator]\ngenerated_dir = \"from-config\"\n",
    )
    .unwrap();

    let output = extractfield(temp.path(), &["generate", "--source", "src"]);

    assert!(output.status.success(), "{output:?}");
    assert!(
        temp.path()
            .join("from-config/app/model/ExtractFieldEmpty.rs")
            .is_file()
    );
}

#[test]
fn generate___no_output_configuration___nonzero_exit_and_nothing_written() {
    let temp = TempDir::new().unwrap();
    write_model(&temp, "#[extract_field]\npub struct Person { name: String }\n");

    let output = extractfield(temp.path(), &["generate", "--source", "src"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("extractfield.generated"), "{stderr}");
}

#[test]
fn check___valid_config___exits_zero() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("extractfield.toml"),
        "[generator]\ngenerated_dir = \"gen\"\n\n[logging]\nlevel = \"warn\"\n",
    )
    .unwrap();

    let output = extractfield(temp.path(), &["check"]);

    assert!(output.status.success(), "{output:?}");
    assert!(String::from_utf8_lossy(&output.stdout).contains("Configuration is valid"));
}

#[test]
fn check___no_config___nonzero_exit() {
    let temp = TempDir::new().unwrap();

    let output = extractfield(temp.path(), &["check"]);

    assert!(!output.status.success());
}

#[test]
fn log_file___global_flag___creates_log() {
    let temp = TempDir::new().unwrap();
    write_model(&temp, "#[extract_field]\npub struct Empty;\n");

    let output = extractfield(
        temp.path(),
        &[
            "generate",
            "--source",
            "src",
            "--generated-dir",
            "gen",
            "--log-level",
            "debug",
            "--log-file",
            "logs/run.log",
        ],
    );

    assert!(output.status.success(), "{output:?}");
    let log = fs::read_to_string(temp.path().join("logs/run.log")).unwrap();
    assert!(log.contains("ExtractFieldEmpty"), "{log}");
}
