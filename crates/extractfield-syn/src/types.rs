//! Mapping from `syn` types to [`TypeRef`].

use extractfield_core::model::{Primitive, TypeRef};
use quote::ToTokens;
use syn::{GenericArgument, Path, PathArguments, PathSegment, Type};

/// Convert a declared field type.
///
/// Anything without a structured representation (references, tuples,
/// arrays, qualified paths, lifetimes in generics) is kept as source text.
pub fn type_ref(ty: &Type) -> TypeRef {
    match ty {
        Type::Path(type_path) if type_path.qself.is_none() => {
            path_type(&type_path.path).unwrap_or_else(|| verbatim(ty))
        }
        Type::Paren(paren) => type_ref(&paren.elem),
        Type::Group(group) => type_ref(&group.elem),
        _ => verbatim(ty),
    }
}

fn path_type(path: &Path) -> Option<TypeRef> {
    // Only the last segment may carry generic arguments.
    let segments: Vec<&PathSegment> = path.segments.iter().collect();
    let (last, leading) = segments.split_last()?;
    if leading
        .iter()
        .any(|s| !matches!(s.arguments, PathArguments::None))
    {
        return None;
    }

    let args = match &last.arguments {
        PathArguments::None => Vec::new(),
        PathArguments::AngleBracketed(bracketed) => bracketed
            .args
            .iter()
            .map(|arg| match arg {
                GenericArgument::Type(inner) => Some(type_ref(inner)),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()?,
        PathArguments::Parenthesized(_) => return None,
    };

    let ident = last.ident.to_string();
    let simple = path.leading_colon.is_none() && leading.is_empty();

    if simple && args.is_empty() {
        if let Some(primitive) = Primitive::from_name(&ident) {
            return Some(TypeRef::Primitive(primitive));
        }
    }

    let ty = match (ident.as_str(), args.len()) {
        ("String", 0) => TypeRef::String,
        ("Vec", 1) => TypeRef::List(Box::new(args.into_iter().next()?)),
        ("Option", 1) => TypeRef::Optional(Box::new(args.into_iter().next()?)),
        _ => {
            let mut segments: Vec<String> = Vec::with_capacity(path.segments.len() + 1);
            if path.leading_colon.is_some() {
                // `::std::...` keeps its absolute form through an empty first segment
                segments.push(String::new());
            }
            segments.extend(path.segments.iter().map(|s| s.ident.to_string()));
            TypeRef::Named {
                path: segments,
                args,
            }
        }
    };
    Some(ty)
}

fn verbatim(ty: &Type) -> TypeRef {
    TypeRef::Verbatim(ty.to_token_stream().to_string())
}
