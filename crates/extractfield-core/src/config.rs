//! Generator configuration types

use crate::error::{ConfigError, ConfigResult};
use crate::naming::is_identifier;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Host option naming the generated-sources root directory
pub const GENERATED_DIR_OPTION: &str = "extractfield.generated";

/// Host option overriding the annotation tag
pub const ANNOTATION_OPTION: &str = "extractfield.annotation";

/// Host option selecting the target language
pub const LANGUAGE_OPTION: &str = "extractfield.language";

/// Marker attribute recognized when none is configured
pub const DEFAULT_ANNOTATION: &str = "extract_field";

/// Language the synthesized types are written in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetLanguage {
    #[default]
    Rust,
    Kotlin,
}

impl TargetLanguage {
    /// File extension of generated sources, without the dot
    pub fn file_extension(self) -> &'static str {
        match self {
            TargetLanguage::Rust => "rs",
            TargetLanguage::Kotlin => "kt",
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetLanguage::Rust => write!(f, "rust"),
            TargetLanguage::Kotlin => write!(f, "kotlin"),
        }
    }
}

impl FromStr for TargetLanguage {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rust" | "rs" => Ok(TargetLanguage::Rust),
            "kotlin" | "kt" => Ok(TargetLanguage::Kotlin),
            other => Err(ConfigError::UnknownLanguage(other.to_string())),
        }
    }
}

/// Unvalidated generator configuration
///
/// Every field has a default so partial TOML tables and option maps can be
/// layered on top of each other. Call [`GeneratorConfig::validate`] before
/// generating anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Root of the generated-sources tree
    pub generated_dir: Option<PathBuf>,

    /// Name of the marker attribute
    pub annotation: String,

    /// Output language
    pub language: TargetLanguage,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            generated_dir: None,
            annotation: DEFAULT_ANNOTATION.to_string(),
            language: TargetLanguage::default(),
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Build a configuration from host options
    ///
    /// Recognizes [`GENERATED_DIR_OPTION`], [`ANNOTATION_OPTION`] and
    /// [`LANGUAGE_OPTION`]; unrelated keys are ignored.
    pub fn from_options(options: &HashMap<String, String>) -> ConfigResult<Self> {
        let mut config = Self::default();
        config.apply_options(options)?;
        Ok(config)
    }

    /// Override fields from host options
    pub fn apply_options(&mut self, options: &HashMap<String, String>) -> ConfigResult<()> {
        if let Some(dir) = options.get(GENERATED_DIR_OPTION) {
            self.generated_dir = Some(PathBuf::from(dir));
        }
        if let Some(annotation) = options.get(ANNOTATION_OPTION) {
            self.annotation = annotation.clone();
        }
        if let Some(language) = options.get(LANGUAGE_OPTION) {
            self.language = language.parse()?;
        }
        Ok(())
    }

    /// Set the generated-sources root
    pub fn with_generated_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.generated_dir = Some(dir.into());
        self
    }

    /// Set the annotation tag
    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = annotation.into();
        self
    }

    /// Set the output language
    pub fn with_language(mut self, language: TargetLanguage) -> Self {
        self.language = language;
        self
    }

    /// Check the configuration and produce the settings a round runs with
    pub fn validate(self) -> ConfigResult<Settings> {
        let output_root = match self.generated_dir {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => {
                return Err(ConfigError::MissingOutputConfiguration {
                    option: GENERATED_DIR_OPTION.to_string(),
                });
            }
        };

        if !is_identifier(&self.annotation) {
            return Err(ConfigError::InvalidAnnotation(self.annotation));
        }

        Ok(Settings {
            output_root,
            annotation: self.annotation,
            language: self.language,
        })
    }
}

/// Validated settings for a generation round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    output_root: PathBuf,
    annotation: String,
    language: TargetLanguage,
}

impl Settings {
    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    pub fn annotation(&self) -> &str {
        &self.annotation
    }

    pub fn language(&self) -> TargetLanguage {
        self.language
    }
}
