//! Build-script entry point

use extractfield_core::config::{ANNOTATION_OPTION, LANGUAGE_OPTION};
use extractfield_core::{
    ConfigError, Driver, GENERATED_DIR_OPTION, GeneratorConfig, RoundReport, TargetLanguage,
};
use extractfield_syn::{SourceError, SynSource};
use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of a build-script generation run
#[derive(Error, Debug)]
pub enum BuildError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Source(#[from] SourceError),

    /// The round ran but rejected or failed declarations
    #[error("extractfield: {rejected} rejected and {failed} failed declaration(s)")]
    Round {
        rejected: usize,
        failed: usize,
        report: RoundReport,
    },
}

/// Configures and runs generation from `build.rs`
///
/// The generated-sources root defaults to `OUT_DIR`, the language to Rust
/// and the marker to `extract_field`. Environment variables named after the
/// host options (`EXTRACTFIELD_ANNOTATION`, `EXTRACTFIELD_LANGUAGE`) are
/// honored too; explicit builder calls win over both.
#[derive(Debug, Clone)]
pub struct Builder {
    source_dir: PathBuf,
    out_dir: Option<PathBuf>,
    language: Option<TargetLanguage>,
    annotation: Option<String>,
    cargo_directives: bool,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("src"),
            out_dir: None,
            language: None,
            annotation: None,
            cargo_directives: true,
        }
    }
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Root of the source tree to scan (default `src`)
    pub fn source_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.source_dir = dir.into();
        self
    }

    /// Root for generated sources (default `OUT_DIR`)
    pub fn out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = Some(dir.into());
        self
    }

    pub fn language(mut self, language: TargetLanguage) -> Self {
        self.language = Some(language);
        self
    }

    pub fn annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    /// Print `cargo:` directives to stdout (default on)
    pub fn cargo_directives(mut self, enabled: bool) -> Self {
        self.cargo_directives = enabled;
        self
    }

    /// Scan the sources and write every companion type.
    pub fn generate(self) -> Result<RoundReport, BuildError> {
        let options = host_options();
        self.generate_with_options(&options)
    }

    pub(crate) fn generate_with_options(
        self,
        options: &HashMap<String, String>,
    ) -> Result<RoundReport, BuildError> {
        let mut config = GeneratorConfig::from_options(options)?;
        if let Some(dir) = self.out_dir {
            config.generated_dir = Some(dir);
        }
        if let Some(language) = self.language {
            config.language = language;
        }
        if let Some(annotation) = self.annotation {
            config.annotation = annotation;
        }
        let settings = config.validate()?;

        let mut source = SynSource::from_dir(&self.source_dir)?;
        tracing::debug!(
            source_dir = %self.source_dir.display(),
            files = source.files().len(),
            "scanning sources"
        );
        if self.cargo_directives {
            println!("cargo:rerun-if-env-changed=EXTRACTFIELD_ANNOTATION");
            println!("cargo:rerun-if-env-changed=EXTRACTFIELD_LANGUAGE");
            println!("cargo:rerun-if-changed={}", self.source_dir.display());
            for file in source.files() {
                println!("cargo:rerun-if-changed={}", file.display());
            }
        }

        let report = Driver::new(settings).process_round(&mut source);

        if self.cargo_directives {
            for diagnostic in source.diagnostics() {
                for line in diagnostic.to_string().lines() {
                    println!("cargo:warning={line}");
                }
            }
            for failure in &report.failures {
                println!("cargo:warning={}: {}", failure.declaration, failure.error);
            }
        }

        if report.is_clean() {
            Ok(report)
        } else {
            Err(BuildError::Round {
                rejected: report.rejected.len(),
                failed: report.failures.len(),
                report,
            })
        }
    }
}

/// Options a build script receives from Cargo's environment.
fn host_options() -> HashMap<String, String> {
    let mut options = HashMap::new();
    let vars = [
        ("OUT_DIR", GENERATED_DIR_OPTION),
        ("EXTRACTFIELD_ANNOTATION", ANNOTATION_OPTION),
        ("EXTRACTFIELD_LANGUAGE", LANGUAGE_OPTION),
    ];
    for (var, option) in vars {
        if let Ok(value) = std::env::var(var) {
            options.insert(option.to_string(), value);
        }
    }
    options
}
