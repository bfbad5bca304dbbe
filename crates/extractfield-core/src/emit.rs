//! Serialization of synthesized types into source files.
//!
//! ```text
//! SynthesizedType
//!     ↓
//!  [Emitter::render]  (RustEmitter | KotlinEmitter)
//!     ↓
//!  <root>/<namespace path>/<TypeName>.<ext>
//! ```
//!
//! Rendering is deterministic, so regenerating an unchanged declaration
//! rewrites a byte-identical file.

pub mod jvm_types;
pub mod kotlin;
pub mod rust;

pub use kotlin::KotlinEmitter;
pub use rust::RustEmitter;

use crate::config::TargetLanguage;
use crate::error::GenerateError;
use crate::model::SynthesizedType;
use std::fs;
use std::path::{Path, PathBuf};

/// Renders a synthesized type in one target language
pub trait Emitter {
    /// Language this emitter writes
    fn language(&self) -> TargetLanguage;

    /// Complete source text of the file holding `ty`
    fn render(&self, ty: &SynthesizedType) -> String;

    /// File extension of generated files, without the dot
    fn file_extension(&self) -> &'static str {
        self.language().file_extension()
    }
}

/// The emitter for `language`
pub fn emitter_for(language: TargetLanguage) -> Box<dyn Emitter> {
    match language {
        TargetLanguage::Rust => Box::new(RustEmitter),
        TargetLanguage::Kotlin => Box::new(KotlinEmitter),
    }
}

/// `<root>/<namespace path>/<type name>.<ext>`
pub fn output_path(ty: &SynthesizedType, root: &Path, extension: &str) -> PathBuf {
    ty.namespace
        .resolve_under(root)
        .join(format!("{}.{}", ty.name, extension))
}

/// Render `ty` and write it below `root`, creating directories as needed.
///
/// An existing file at the target path is overwritten.
pub fn emit(
    emitter: &dyn Emitter,
    ty: &SynthesizedType,
    root: &Path,
) -> Result<PathBuf, GenerateError> {
    let path = output_path(ty, root, emitter.file_extension());

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|source| GenerateError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let code = emitter.render(ty);
    fs::write(&path, code).map_err(|source| GenerateError::Write {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}

/// First line of every generated file
fn generated_header(ty: &SynthesizedType) -> String {
    let origin = if ty.namespace.is_root() {
        ty.source_name.clone()
    } else {
        format!("{}.{}", ty.namespace, ty.source_name)
    };
    format!("// @generated by extractfield from `{origin}`. Do not edit.\n")
}

/// Non-empty lines of one documentation entry.
///
/// Splits on lone carriage returns too, which line comments cannot carry.
fn doc_lines(doc: &str) -> impl Iterator<Item = &str> {
    doc.split(['\r', '\n'])
        .map(str::trim_end)
        .filter(|line| !line.trim_start().is_empty())
}
