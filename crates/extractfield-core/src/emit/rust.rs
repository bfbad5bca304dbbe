//! Rust source generation.

use super::{Emitter, doc_lines, generated_header};
use crate::config::TargetLanguage;
use crate::model::{Member, SynthesizedProperty, SynthesizedType};

/// Writes a `#[derive(Default)]` struct of `Option<T>` fields plus an
/// `impl` block with `getThe*` / `setThe*` pairs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustEmitter;

impl Emitter for RustEmitter {
    fn language(&self) -> TargetLanguage {
        TargetLanguage::Rust
    }

    fn render(&self, ty: &SynthesizedType) -> String {
        let mut code = generated_header(ty);
        code.push('\n');

        code.push_str(&format!("/// Nullable companion of `{}`.\n", ty.source_name));
        code.push_str("#[allow(dead_code, non_snake_case)]\n");
        code.push_str("#[derive(Default)]\n");

        if ty.is_empty() {
            code.push_str(&format!("pub struct {} {{}}\n", ty.name));
            return code;
        }

        let (fields, methods): (Vec<Member<'_>>, Vec<Member<'_>>) = ty
            .members()
            .into_iter()
            .partition(|member| matches!(member, Member::Property(_)));

        code.push_str(&format!("pub struct {} {{\n", ty.name));
        for member in fields {
            push_member(&mut code, member);
        }
        code.push_str("}\n");

        code.push_str("\n#[allow(dead_code, non_snake_case)]\n");
        code.push_str(&format!("impl {} {{\n", ty.name));
        for (i, member) in methods.into_iter().enumerate() {
            if i > 0 {
                code.push('\n');
            }
            push_member(&mut code, member);
        }
        code.push_str("}\n");

        code
    }
}

fn push_member(code: &mut String, member: Member<'_>) {
    match member {
        Member::Property(property) => push_field(code, property),
        Member::Accessor(property) => push_accessor(code, property),
        Member::Mutator(property) => push_mutator(code, property),
    }
}

fn push_field(code: &mut String, property: &SynthesizedProperty) {
    for doc in &property.docs {
        for line in doc_lines(doc) {
            code.push_str(&format!("    /// {line}\n"));
        }
    }
    code.push_str(&format!("    {}: {},\n", ident(&property.name), property.ty));
}

fn push_accessor(code: &mut String, property: &SynthesizedProperty) {
    let inner = property.ty.non_null();
    code.push_str(&format!(
        "    pub fn {}(&self) -> Option<&{}> {{\n",
        property.accessor_name, inner
    ));
    code.push_str(&format!("        self.{}.as_ref()\n", ident(&property.name)));
    code.push_str("    }\n");
}

fn push_mutator(code: &mut String, property: &SynthesizedProperty) {
    let name = ident(&property.name);
    code.push_str(&format!(
        "    pub fn {}(&mut self, {}: {}) {{\n",
        property.mutator_name, name, property.ty
    ));
    code.push_str(&format!("        self.{name} = {name};\n"));
    code.push_str("    }\n");
}

const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Field identifier, raw when it collides with a keyword.
fn ident(name: &str) -> String {
    if KEYWORDS.contains(&name) {
        format!("r#{name}")
    } else {
        name.to_string()
    }
}
