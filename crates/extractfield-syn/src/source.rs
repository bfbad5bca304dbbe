//! [`MetadataSource`] over parsed Rust files.

use crate::error::{SourceError, SourceResult};
use crate::module_path::namespace_for_file;
use crate::types::type_ref;
use extractfield_core::model::{
    AnnotatedDeclaration, DeclarationId, DeclarationKind, FieldMetadata, Namespace,
    SourceLocation,
};
use extractfield_core::{Diagnostic, MetadataSource};
use quote::ToTokens;
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use std::fs;
use std::path::{Path, PathBuf};
use syn::{Attribute, Fields, Item, ItemStruct, Meta};
use walkdir::WalkDir;

/// An item (or struct field) that carries at least one outer attribute.
#[derive(Debug, Clone)]
struct Entry {
    declaration: AnnotatedDeclaration,
    attributes: Vec<String>,
    fields: Vec<FieldMetadata>,
}

/// Rust source files as a host.
///
/// Files are parsed once when they are added; every item carrying an outer
/// attribute is indexed so discovery can filter by any annotation tag.
/// Inline `mod name { .. }` blocks extend the namespace.
#[derive(Debug, Default)]
pub struct SynSource {
    entries: Vec<Entry>,
    files: Vec<PathBuf>,
    diagnostics: Vec<Diagnostic>,
}

impl SynSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `.rs` file below `root`.
    pub fn from_dir(root: impl AsRef<Path>) -> SourceResult<Self> {
        let mut source = Self::new();
        source.add_dir(root)?;
        Ok(source)
    }

    /// Add every `.rs` file below `root`, in file-name order.
    ///
    /// Namespaces are derived from each file's path relative to `root`.
    pub fn add_dir(&mut self, root: impl AsRef<Path>) -> SourceResult<()> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(SourceError::NotADirectory(root.to_path_buf()));
        }

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry?;
            let path = entry.path();
            if entry.file_type().is_file() && path.extension().is_some_and(|ext| ext == "rs") {
                let namespace = namespace_for_file(root, path);
                self.add_file(path, namespace)?;
            }
        }
        Ok(())
    }

    /// Parse one file whose items live in `namespace`.
    pub fn add_file(&mut self, path: impl AsRef<Path>, namespace: Namespace) -> SourceResult<()> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SourceError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        self.add_source(&content, namespace, Some(path))?;
        self.files.push(path.to_path_buf());
        Ok(())
    }

    /// Parse source text whose items live in `namespace`.
    ///
    /// `file` is only used for locations in diagnostics.
    pub fn add_source(
        &mut self,
        content: &str,
        namespace: Namespace,
        file: Option<&Path>,
    ) -> SourceResult<()> {
        let file_path = file.map(Path::to_path_buf).unwrap_or_default();
        let ast = syn::parse_file(content).map_err(|e| SourceError::parse(file_path, &e))?;

        let before = self.entries.len();
        self.index_items(&ast.items, &namespace, file);
        tracing::trace!(
            file = %file.map(|f| f.display().to_string()).unwrap_or_default(),
            namespace = %namespace,
            indexed = self.entries.len() - before,
            "parsed source"
        );
        Ok(())
    }

    /// Files loaded so far, in load order.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Diagnostics reported so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Drain reported diagnostics.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    fn index_items(&mut self, items: &[Item], namespace: &Namespace, file: Option<&Path>) {
        for item in items {
            let (attrs, name, kind) = match item {
                Item::Struct(s) => {
                    self.index_struct_fields(s, namespace, file);
                    (&s.attrs, s.ident.unraw().to_string(), DeclarationKind::Class)
                }
                Item::Enum(e) => (&e.attrs, e.ident.unraw().to_string(), DeclarationKind::Enum),
                Item::Union(u) => (&u.attrs, u.ident.unraw().to_string(), DeclarationKind::Union),
                Item::Trait(t) => (
                    &t.attrs,
                    t.ident.unraw().to_string(),
                    DeclarationKind::Interface,
                ),
                Item::Fn(f) => (
                    &f.attrs,
                    f.sig.ident.unraw().to_string(),
                    DeclarationKind::Function,
                ),
                Item::Type(t) => (
                    &t.attrs,
                    t.ident.unraw().to_string(),
                    DeclarationKind::TypeAlias,
                ),
                Item::Const(c) => (
                    &c.attrs,
                    c.ident.unraw().to_string(),
                    DeclarationKind::Constant,
                ),
                Item::Static(s) => (
                    &s.attrs,
                    s.ident.unraw().to_string(),
                    DeclarationKind::Constant,
                ),
                Item::Impl(i) => (
                    &i.attrs,
                    i.self_ty.to_token_stream().to_string(),
                    DeclarationKind::Impl,
                ),
                Item::Mod(m) => {
                    let name = m.ident.unraw().to_string();
                    if let Some((_, content)) = &m.content {
                        self.index_items(content, &namespace.child(name.clone()), file);
                    }
                    (&m.attrs, name, DeclarationKind::Module)
                }
                _ => continue,
            };

            let attributes = attribute_names(attrs);
            if attributes.is_empty() {
                continue;
            }
            let fields = match item {
                Item::Struct(s) => struct_fields(s),
                _ => Vec::new(),
            };
            self.push(
                attributes,
                name,
                kind,
                namespace,
                fields,
                location(file, item.span()),
            );
        }
    }

    /// Struct fields can carry attributes too; index those so a misplaced
    /// marker on a field is reported instead of silently ignored.
    fn index_struct_fields(&mut self, s: &ItemStruct, namespace: &Namespace, file: Option<&Path>) {
        let owner = namespace.child(s.ident.unraw().to_string());
        for (i, field) in s.fields.iter().enumerate() {
            let attributes = attribute_names(&field.attrs);
            if attributes.is_empty() {
                continue;
            }
            self.push(
                attributes,
                field_name(field, i),
                DeclarationKind::Field,
                &owner,
                Vec::new(),
                location(file, field.span()),
            );
        }
    }

    fn push(
        &mut self,
        attributes: Vec<String>,
        name: String,
        kind: DeclarationKind,
        namespace: &Namespace,
        fields: Vec<FieldMetadata>,
        location: Option<SourceLocation>,
    ) {
        let id = DeclarationId(self.entries.len());
        self.entries.push(Entry {
            declaration: AnnotatedDeclaration {
                id,
                name,
                namespace: namespace.clone(),
                kind,
                location,
            },
            attributes,
            fields,
        });
    }
}

impl MetadataSource for SynSource {
    fn declarations_with_annotation(&self, tag: &str) -> Vec<AnnotatedDeclaration> {
        self.entries
            .iter()
            .filter(|e| e.attributes.iter().any(|a| a == tag))
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

/// Direct fields of a struct in declaration order.
fn struct_fields(s: &ItemStruct) -> Vec<FieldMetadata> {
    if !s.generics.params.is_empty() {
        tracing::warn!(
            declaration = %s.ident,
            "generic parameters are not carried over to the generated type"
        );
    }

    match &s.fields {
        Fields::Named(_) | Fields::Unnamed(_) => s
            .fields
            .iter()
            .enumerate()
            .map(|(i, f)| {
                FieldMetadata::new(field_name(f, i), type_ref(&f.ty))
                    .with_docs(extract_docs(&f.attrs))
            })
            .collect(),
        Fields::Unit => Vec::new(),
    }
}

/// Named fields use their identifier; positional fields become `_0`, `_1`, ...
fn field_name(field: &syn::Field, index: usize) -> String {
    field
        .ident
        .as_ref()
        .map(|ident| ident.unraw().to_string())
        .unwrap_or_else(|| format!("_{index}"))
}

/// Last path segment of every non-doc outer attribute.
fn attribute_names(attrs: &[Attribute]) -> Vec<String> {
    attrs
        .iter()
        .filter(|attr| !attr.path().is_ident("doc"))
        .filter_map(|attr| attr.path().segments.last())
        .map(|segment| segment.ident.to_string())
        .collect()
}

/// Documentation comments from attributes.
fn extract_docs(attrs: &[Attribute]) -> Vec<String> {
    let mut docs = Vec::new();

    for attr in attrs {
        if attr.path().is_ident("doc") {
            if let Meta::NameValue(meta) = &attr.meta {
                if let syn::Expr::Lit(syn::ExprLit {
                    lit: syn::Lit::Str(lit_str),
                    ..
                }) = &meta.value
                {
                    // Block comments and `#[doc = "..."]` may span several lines.
                    let value = lit_str.value();
                    docs.extend(
                        value
                            .lines()
                            .map(str::trim)
                            .filter(|line| !line.is_empty())
                            .map(str::to_string),
                    );
                }
            }
        }
    }

    docs
}

fn location(file: Option<&Path>, span: proc_macro2::Span) -> Option<SourceLocation> {
    let file = file?;
    let start = span.start();
    Some(SourceLocation {
        file: file.to_path_buf(),
        line: start.line,
        column: start.column + 1,
    })
}
