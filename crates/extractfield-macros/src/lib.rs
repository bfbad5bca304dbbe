//! extractfield-macros - The `#[extract_field]` marker attribute
//!
//! The attribute itself generates nothing. It marks a struct for the
//! extractfield build step, which reads the marked sources and writes the
//! `ExtractField<Name>` companion types. Applying it to anything other than
//! a struct is a compile error.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote_spanned;
use syn::spanned::Spanned;
use syn::Item;

/// Same text the generator reports for non-struct declarations
const ONLY_CLASSES_MESSAGE: &str = "only classes can be annotated";

/// Mark a struct for companion type generation
///
/// # Example
///
/// ```ignore
/// use extractfield::extract_field;
///
/// #[extract_field]
/// pub struct Person {
///     name: String,
///     age: i32,
/// }
///
/// // after the build step: ExtractFieldPerson { name: Option<String>, age: Option<i32> }
/// ```
#[proc_macro_attribute]
pub fn extract_field(attr: TokenStream, item: TokenStream) -> TokenStream {
    expand(attr.into(), item.into()).into()
}

/// Validate the marker placement and pass the item through unchanged.
fn expand(attr: TokenStream2, item: TokenStream2) -> TokenStream2 {
    if !attr.is_empty() {
        let message = "`#[extract_field]` takes no arguments";
        return quote_spanned! {attr.span()=>
            ::core::compile_error!(#message);
            #item
        };
    }

    match syn::parse2::<Item>(item.clone()) {
        Ok(Item::Struct(_)) => item,
        Ok(other) => {
            let message = ONLY_CLASSES_MESSAGE;
            quote_spanned! {other.span()=>
                ::core::compile_error!(#message);
                #other
            }
        }
        Err(err) => err.to_compile_error(),
    }
}
