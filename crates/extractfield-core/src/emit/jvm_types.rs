//! JVM type mappings for Kotlin code generation.
//!
//! # Type Mappings
//!
//! | Rust | Kotlin |
//! |------|--------|
//! | `String` | `String` |
//! | `bool` | `Boolean` |
//! | `i32` | `Int` |
//! | `i64` / `isize` | `Long` |
//! | `u32` | `UInt` |
//! | `i128` / `u128` | `BigInteger` |
//! | `f64` | `Double` |
//! | `Vec<T>` | `List<T>` |
//! | `Option<T>` | `T?` |
//! | `HashMap<K, V>` | `Map<K, V>` |
//! | `Box<T>` / `Rc<T>` / `Arc<T>` | `T` |
//! | anything unrepresentable | `Any` |

use crate::model::{Primitive, TypeRef};
use std::collections::BTreeSet;

const BIG_INTEGER: &str = "java.math.BigInteger";

/// Kotlin spelling of `ty`.
pub fn kotlin_type(ty: &TypeRef) -> String {
    match ty {
        TypeRef::Primitive(p) => primitive_name(*p).to_string(),
        TypeRef::String => "String".to_string(),
        TypeRef::List(inner) => format!("List<{}>", kotlin_type(inner)),
        TypeRef::Optional(inner) => {
            let inner = kotlin_type(inner);
            if inner.ends_with('?') {
                inner
            } else {
                format!("{inner}?")
            }
        }
        TypeRef::Named { path, args } => named_type(path, args),
        TypeRef::Verbatim(_) => "Any".to_string(),
    }
}

/// Fully qualified imports the Kotlin spelling of `ty` needs.
pub fn collect_imports(ty: &TypeRef, imports: &mut BTreeSet<&'static str>) {
    match ty {
        TypeRef::Primitive(Primitive::I128 | Primitive::U128) => {
            imports.insert(BIG_INTEGER);
        }
        TypeRef::List(inner) | TypeRef::Optional(inner) => collect_imports(inner, imports),
        TypeRef::Named { args, .. } => {
            for arg in args {
                collect_imports(arg, imports);
            }
        }
        _ => {}
    }
}

fn primitive_name(p: Primitive) -> &'static str {
    match p {
        Primitive::Bool => "Boolean",
        Primitive::Char => "Char",
        Primitive::I8 => "Byte",
        Primitive::I16 => "Short",
        Primitive::I32 => "Int",
        Primitive::I64 | Primitive::Isize => "Long",
        Primitive::U8 => "UByte",
        Primitive::U16 => "UShort",
        Primitive::U32 => "UInt",
        Primitive::U64 | Primitive::Usize => "ULong",
        Primitive::I128 | Primitive::U128 => "BigInteger",
        Primitive::F32 => "Float",
        Primitive::F64 => "Double",
    }
}

fn named_type(path: &[String], args: &[TypeRef]) -> String {
    let Some(last) = path.last() else {
        return "Any".to_string();
    };

    match (last.as_str(), args) {
        ("Box" | "Rc" | "Arc", [inner]) => return kotlin_type(inner),
        ("HashMap" | "BTreeMap", [key, value]) => {
            return format!("Map<{}, {}>", kotlin_type(key), kotlin_type(value));
        }
        ("HashSet" | "BTreeSet", [inner]) => return format!("Set<{}>", kotlin_type(inner)),
        ("VecDeque", [inner]) => return format!("List<{}>", kotlin_type(inner)),
        _ => {}
    }

    if args.is_empty() {
        last.clone()
    } else {
        let args: Vec<String> = args.iter().map(kotlin_type).collect();
        format!("{}<{}>", last, args.join(", "))
    }
}
