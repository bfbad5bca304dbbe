//! Kotlin source generation.

use super::jvm_types::{collect_imports, kotlin_type};
use super::{Emitter, doc_lines, generated_header};
use crate::config::TargetLanguage;
use crate::model::{Member, SynthesizedProperty, SynthesizedType};
use std::collections::BTreeSet;

const INDENT: &str = "  ";

/// Writes a Kotlin class with `private var x: T? = null` properties and
/// `getThe*` / `setThe*` functions.
#[derive(Debug, Clone, Copy, Default)]
pub struct KotlinEmitter;

impl Emitter for KotlinEmitter {
    fn language(&self) -> TargetLanguage {
        TargetLanguage::Kotlin
    }

    fn render(&self, ty: &SynthesizedType) -> String {
        let mut code = generated_header(ty);

        if !ty.namespace.is_root() {
            let package: Vec<String> = ty.namespace.segments().iter().map(|s| ident(s)).collect();
            code.push_str(&format!("package {}\n", package.join(".")));
        }

        let mut imports = BTreeSet::new();
        for property in &ty.properties {
            collect_imports(&property.ty, &mut imports);
        }
        if !imports.is_empty() {
            code.push('\n');
            for import in &imports {
                code.push_str(&format!("import {import}\n"));
            }
        }
        code.push('\n');

        if ty.is_empty() {
            code.push_str(&format!("class {}\n", ty.name));
            return code;
        }

        code.push_str(&format!("class {} {{\n", ty.name));
        for (i, member) in ty.members().into_iter().enumerate() {
            if i > 0 {
                code.push('\n');
            }
            match member {
                Member::Property(property) => push_property(&mut code, property),
                Member::Accessor(property) => push_accessor(&mut code, property),
                Member::Mutator(property) => push_mutator(&mut code, property),
            }
        }
        code.push_str("}\n");
        code
    }
}

fn push_property(code: &mut String, property: &SynthesizedProperty) {
    let lines: Vec<String> = property
        .docs
        .iter()
        .flat_map(|doc| doc_lines(doc))
        .map(kdoc_text)
        .collect();
    if !lines.is_empty() {
        code.push_str(&format!("{INDENT}/**\n"));
        for line in &lines {
            code.push_str(&format!("{INDENT} * {line}\n"));
        }
        code.push_str(&format!("{INDENT} */\n"));
    }
    code.push_str(&format!(
        "{INDENT}private var {}: {} = null\n",
        ident(&property.name),
        kotlin_type(&property.ty)
    ));
}

/// Comment delimiters inside KDoc text, with the slash as an HTML entity.
fn kdoc_text(line: &str) -> String {
    line.replace("*/", "*&#47;").replace("/*", "&#47;*")
}

fn push_accessor(code: &mut String, property: &SynthesizedProperty) {
    code.push_str(&format!(
        "{INDENT}fun {}(): {} {{\n",
        property.accessor_name,
        kotlin_type(&property.ty)
    ));
    code.push_str(&format!("{INDENT}{INDENT}return {}\n", ident(&property.name)));
    code.push_str(&format!("{INDENT}}}\n"));
}

fn push_mutator(code: &mut String, property: &SynthesizedProperty) {
    let name = ident(&property.name);
    code.push_str(&format!(
        "{INDENT}fun {}({name}: {}) {{\n",
        property.mutator_name,
        kotlin_type(&property.ty)
    ));
    code.push_str(&format!("{INDENT}{INDENT}this.{name} = {name}\n"));
    code.push_str(&format!("{INDENT}}}\n"));
}

const HARD_KEYWORDS: &[&str] = &[
    "as", "break", "class", "continue", "do", "else", "false", "for", "fun", "if", "in",
    "interface", "is", "null", "object", "package", "return", "super", "this", "throw", "true",
    "try", "typealias", "typeof", "val", "var", "when", "while",
];

/// Identifier, back-quoted when it is a hard keyword.
fn ident(name: &str) -> String {
    if HARD_KEYWORDS.contains(&name) {
        format!("`{name}`")
    } else {
        name.to_string()
    }
}
