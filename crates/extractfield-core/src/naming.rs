//! Naming rules for synthesized types and their members.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `Person` | [`target_name`] | `ExtractFieldPerson` |
//! | `age` | [`accessor_name`] | `getTheage` |
//! | `age` | [`mutator_name`] | `setTheage` |
//!
//! Field names are appended verbatim. `getTheage` rather than `getTheAge` is
//! the established output format and must not change.

/// Prefix of every synthesized type name.
pub const TYPE_PREFIX: &str = "ExtractField";

/// Prefix of every accessor method.
pub const ACCESSOR_PREFIX: &str = "getThe";

/// Prefix of every mutator method.
pub const MUTATOR_PREFIX: &str = "setThe";

/// Name of the companion type generated for `source_name`.
///
/// # Examples
///
/// ```
/// use extractfield_core::naming::target_name;
///
/// assert_eq!(target_name("Person"), "ExtractFieldPerson");
/// ```
pub fn target_name(source_name: &str) -> String {
    format!("{TYPE_PREFIX}{source_name}")
}

/// Accessor method name for `field_name`.
///
/// # Examples
///
/// ```
/// use extractfield_core::naming::accessor_name;
///
/// assert_eq!(accessor_name("firstName"), "getThefirstName");
/// assert_eq!(accessor_name("age"), "getTheage");
/// ```
pub fn accessor_name(field_name: &str) -> String {
    format!("{ACCESSOR_PREFIX}{field_name}")
}

/// Mutator method name for `field_name`.
///
/// # Examples
///
/// ```
/// use extractfield_core::naming::mutator_name;
///
/// assert_eq!(mutator_name("age"), "setTheage");
/// ```
pub fn mutator_name(field_name: &str) -> String {
    format!("{MUTATOR_PREFIX}{field_name}")
}

/// Check that `s` is a plain identifier (`[A-Za-z_][A-Za-z0-9_]*`).
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
