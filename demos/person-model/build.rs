//! Generates `ExtractField*` companions for the structs under `src/` into `OUT_DIR`.

fn main() -> Result<(), extractfield::BuildError> {
    extractfield::Builder::new().source_dir("src").generate()?;
    Ok(())
}
