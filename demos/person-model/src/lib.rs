//! Example model using `#[extract_field]`
//!
//! `build.rs` scans `src/` and writes `ExtractFieldPerson` and
//! `ExtractFieldEmpty` into `OUT_DIR/app/model/`; `app::model` includes them.

pub mod app;
