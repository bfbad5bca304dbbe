//! Module paths of source files.
//!
//! | File (relative to the source root) | Namespace |
//! |------------------------------------|-----------|
//! | `lib.rs`, `main.rs` | root |
//! | `app.rs`, `app/mod.rs` | `app` |
//! | `app/model.rs` | `app.model` |
//!
//! `#[path = "..."]` redirections are not followed.

use extractfield_core::model::Namespace;
use std::path::{Component, Path};

/// Namespace of `file` within the crate rooted at `root`.
pub fn namespace_for_file(root: &Path, file: &Path) -> Namespace {
    let relative = file.strip_prefix(root).unwrap_or(file);

    let mut segments: Vec<String> = relative
        .parent()
        .map(|dir| {
            dir.components()
                .filter_map(|c| match c {
                    Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default();

    if let Some(stem) = relative.file_stem().map(|s| s.to_string_lossy()) {
        if !is_module_root(&stem) {
            segments.push(stem.into_owned());
        }
    }

    Namespace::from_segments(segments)
}

fn is_module_root(stem: &str) -> bool {
    matches!(stem, "lib" | "main" | "mod")
}
