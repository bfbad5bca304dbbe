//! Host-independent description of annotated declarations and synthesized types.
//!
//! Host adapters translate their own reflection surface into these types; the
//! synthesizer and the emitters never see anything else.

use std::fmt;
use std::path::{Path, PathBuf};

/// Dotted module/package path of a declaration (`app.model`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Namespace {
    segments: Vec<String>,
}

impl Namespace {
    /// The root namespace (no segments).
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a namespace from individual segments, skipping empty ones.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments
                .into_iter()
                .map(Into::into)
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    /// Parse a dotted namespace such as `app.model`.
    pub fn from_dotted(dotted: &str) -> Self {
        Self::from_segments(dotted.split('.').map(str::trim))
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Return a child namespace with `segment` appended.
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self::from_segments(segments)
    }

    pub fn to_dotted(&self) -> String {
        self.segments.join(".")
    }

    /// The namespace laid out as nested directories.
    pub fn to_relative_path(&self) -> PathBuf {
        self.segments.iter().collect()
    }

    /// Resolve this namespace below `root`.
    pub fn resolve_under(&self, root: &Path) -> PathBuf {
        root.join(self.to_relative_path())
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_dotted())
    }
}

/// Built-in scalar types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Bool,
    Char,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    F32,
    F64,
}

impl Primitive {
    /// Look up a primitive by its Rust spelling.
    pub fn from_name(name: &str) -> Option<Self> {
        let primitive = match name {
            "bool" => Primitive::Bool,
            "char" => Primitive::Char,
            "i8" => Primitive::I8,
            "i16" => Primitive::I16,
            "i32" => Primitive::I32,
            "i64" => Primitive::I64,
            "i128" => Primitive::I128,
            "isize" => Primitive::Isize,
            "u8" => Primitive::U8,
            "u16" => Primitive::U16,
            "u32" => Primitive::U32,
            "u64" => Primitive::U64,
            "u128" => Primitive::U128,
            "usize" => Primitive::Usize,
            "f32" => Primitive::F32,
            "f64" => Primitive::F64,
            _ => return None,
        };
        Some(primitive)
    }

    pub fn rust_name(self) -> &'static str {
        match self {
            Primitive::Bool => "bool",
            Primitive::Char => "char",
            Primitive::I8 => "i8",
            Primitive::I16 => "i16",
            Primitive::I32 => "i32",
            Primitive::I64 => "i64",
            Primitive::I128 => "i128",
            Primitive::Isize => "isize",
            Primitive::U8 => "u8",
            Primitive::U16 => "u16",
            Primitive::U32 => "u32",
            Primitive::U64 => "u64",
            Primitive::U128 => "u128",
            Primitive::Usize => "usize",
            Primitive::F32 => "f32",
            Primitive::F64 => "f64",
        }
    }
}

/// Declared type of a field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    Primitive(Primitive),

    /// Owned string type.
    String,

    /// Growable list (`Vec<T>`).
    List(Box<TypeRef>),

    /// Optional value (`Option<T>`).
    Optional(Box<TypeRef>),

    /// Any other nominal type, with its path segments and type arguments.
    Named { path: Vec<String>, args: Vec<TypeRef> },

    /// Source text of a type with no structured representation
    /// (references, tuples, arrays, function pointers, ...).
    Verbatim(String),
}

impl TypeRef {
    /// Shorthand for a single-segment named type without arguments.
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named {
            path: vec![name.into()],
            args: Vec::new(),
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, TypeRef::Optional(_))
    }

    /// The nullable form of this type.
    ///
    /// An already optional type is its own nullable form.
    pub fn nullable(&self) -> TypeRef {
        if self.is_optional() {
            self.clone()
        } else {
            TypeRef::Optional(Box::new(self.clone()))
        }
    }

    /// The type wrapped by `Optional`, or the type itself.
    pub fn non_null(&self) -> &TypeRef {
        match self {
            TypeRef::Optional(inner) => inner,
            other => other,
        }
    }
}

/// Renders the type in Rust surface syntax.
impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Primitive(p) => f.write_str(p.rust_name()),
            TypeRef::String => f.write_str("String"),
            TypeRef::List(inner) => write!(f, "Vec<{inner}>"),
            TypeRef::Optional(inner) => write!(f, "Option<{inner}>"),
            TypeRef::Named { path, args } => {
                f.write_str(&path.join("::"))?;
                if !args.is_empty() {
                    f.write_str("<")?;
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{arg}")?;
                    }
                    f.write_str(">")?;
                }
                Ok(())
            }
            TypeRef::Verbatim(text) => f.write_str(text),
        }
    }
}

/// A data member read from an annotated declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMetadata {
    /// Field name as declared (raw identifiers unrawed).
    pub name: String,

    pub declared_type: TypeRef,

    /// Documentation comments attached to the field.
    pub docs: Vec<String>,
}

impl FieldMetadata {
    pub fn new(name: impl Into<String>, declared_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            declared_type,
            docs: Vec::new(),
        }
    }

    pub fn with_docs(mut self, docs: Vec<String>) -> Self {
        self.docs = docs;
        self
    }
}

/// Kind of the item that carries the marker annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Class,
    Enum,
    Union,
    Interface,
    Function,
    TypeAlias,
    Constant,
    Field,
    Impl,
    Module,
    Other,
}

impl DeclarationKind {
    /// Only classes are processed; every other kind is rejected.
    pub fn is_class_like(self) -> bool {
        matches!(self, DeclarationKind::Class)
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DeclarationKind::Class => "class",
            DeclarationKind::Enum => "enum",
            DeclarationKind::Union => "union",
            DeclarationKind::Interface => "interface",
            DeclarationKind::Function => "function",
            DeclarationKind::TypeAlias => "type alias",
            DeclarationKind::Constant => "constant",
            DeclarationKind::Field => "field",
            DeclarationKind::Impl => "impl block",
            DeclarationKind::Module => "module",
            DeclarationKind::Other => "item",
        };
        f.write_str(name)
    }
}

/// Where a declaration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: PathBuf,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.column)
    }
}

/// Opaque handle a host uses to find its own record of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeclarationId(pub usize);

/// A declaration bearing the marker annotation, as supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedDeclaration {
    pub id: DeclarationId,
    pub name: String,
    pub namespace: Namespace,
    pub kind: DeclarationKind,
    pub location: Option<SourceLocation>,
}

impl AnnotatedDeclaration {
    /// Fully qualified dotted name, used in logs and diagnostics.
    pub fn qualified_name(&self) -> String {
        if self.namespace.is_root() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }
}

/// One shadow property of a synthesized type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedProperty {
    pub name: String,

    /// Always the nullable form of the originating field's type.
    pub ty: TypeRef,

    pub accessor_name: String,
    pub mutator_name: String,
    pub docs: Vec<String>,
}

/// The companion type generated for one annotated declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedType {
    pub name: String,
    pub namespace: Namespace,

    /// Simple name of the declaration this type was derived from.
    pub source_name: String,

    pub properties: Vec<SynthesizedProperty>,
}

/// A member of a synthesized type in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Member<'a> {
    Property(&'a SynthesizedProperty),
    Accessor(&'a SynthesizedProperty),
    Mutator(&'a SynthesizedProperty),
}

impl<'a> Member<'a> {
    /// The member's own name.
    pub fn name(&self) -> &'a str {
        match self {
            Member::Property(p) => &p.name,
            Member::Accessor(p) => &p.accessor_name,
            Member::Mutator(p) => &p.mutator_name,
        }
    }
}

impl SynthesizedType {
    /// All properties first, then accessor/mutator pairs in field order.
    pub fn members(&self) -> Vec<Member<'_>> {
        let properties = self.properties.iter().map(Member::Property);
        let methods = self
            .properties
            .iter()
            .flat_map(|p| [Member::Accessor(p), Member::Mutator(p)]);
        properties.chain(methods).collect()
    }

    pub fn method_count(&self) -> usize {
        self.properties.len() * 2
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
