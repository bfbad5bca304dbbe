//! Check command implementation

use crate::config_file::{ConfigFile, DEFAULT_CONFIG_FILE};
use anyhow::{Context, Result};
use extractfield_core::Settings;
use std::path::Path;

/// Validate the loaded configuration.
///
/// `path` is the file the user named, only used for reporting; an absent
/// default file is an error here, unlike for `generate`.
pub fn run(path: Option<&Path>, file: &ConfigFile) -> Result<Settings> {
    let shown = path.unwrap_or(Path::new(DEFAULT_CONFIG_FILE));
    if path.is_none() && !shown.is_file() {
        anyhow::bail!("No {DEFAULT_CONFIG_FILE} in the current directory");
    }

    println!("Checking config: {}", shown.display());

    let settings = file
        .generator
        .clone()
        .validate()
        .context("Invalid [generator] table")?;

    println!("✓ Generated sources: {}", settings.output_root().display());
    println!("✓ Annotation: #[{}]", settings.annotation());
    println!("✓ Language: {}", settings.language());
    println!("✓ Log level: {}", file.logging.level);
    println!("\nConfiguration is valid!");

    Ok(settings)
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use extractfield_core::TargetLanguage;
    use tempfile::TempDir;

    #[test]
    fn run___complete_config___returns_settings() {
        let file = ConfigFile::parse(
            "[generator]\ngenerated_dir = \"gen\"\nlanguage = \"kotlin\"\n",
        )
        .unwrap();

        let settings = run(Some(Path::new("extractfield.toml")), &file).unwrap();

        assert_eq!(settings.output_root(), Path::new("gen"));
        assert_eq!(settings.language(), TargetLanguage::Kotlin);
    }

    #[test]
    fn run___missing_generated_dir___error() {
        let file = ConfigFile::parse("[generator]\nlanguage = \"rust\"\n").unwrap();

        let err = run(Some(Path::new("extractfield.toml")), &file).unwrap_err();

        assert!(format!("{err:#}").contains("missing output configuration"));
    }

    #[test]
    fn run___invalid_annotation___error() {
        let file =
            ConfigFile::parse("[generator]\ngenerated_dir = \"gen\"\nannotation = \"not a tag\"\n")
                .unwrap();

        let err = run(Some(Path::new("extractfield.toml")), &file).unwrap_err();

        assert!(format!("{err:#}").contains("invalid annotation"));
    }

    #[test]
    fn run___explicit_file___loaded_and_validated() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("extractfield.toml");
        std::fs::write(&path, "[generator]\ngenerated_dir = \"gen\"\n").unwrap();
        let file = ConfigFile::from_file(&path).unwrap();

        assert!(run(Some(&path), &file).is_ok());
    }
}
