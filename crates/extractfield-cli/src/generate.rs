//! Generate command implementation

use anyhow::{Context, Result};
use extractfield_core::{Driver, GeneratorConfig, RoundReport, TargetLanguage};
use extractfield_syn::SynSource;
use std::path::PathBuf;

/// Command line overrides for a generation round
#[derive(Debug, Clone, Default)]
pub struct GenerateArgs {
    pub source: PathBuf,
    pub generated_dir: Option<PathBuf>,
    pub language: Option<TargetLanguage>,
    pub annotation: Option<String>,
}

impl GenerateArgs {
    /// Layer the flags that were given over `base`.
    pub fn apply_to(&self, mut base: GeneratorConfig) -> GeneratorConfig {
        if let Some(dir) = &self.generated_dir {
            base.generated_dir = Some(dir.clone());
        }
        if let Some(language) = self.language {
            base.language = language;
        }
        if let Some(annotation) = &self.annotation {
            base.annotation = annotation.clone();
        }
        base
    }
}

/// Generate command implementation
///
/// Fails when the configuration is invalid, the sources cannot be loaded, or
/// the round rejected or failed any declaration.
pub fn run(args: &GenerateArgs, config: GeneratorConfig) -> Result<RoundReport> {
    let settings = args
        .apply_to(config)
        .validate()
        .context("Invalid generator configuration")?;

    let mut source = SynSource::from_dir(&args.source)
        .with_context(|| format!("Failed to load sources from {:?}", args.source))?;
    tracing::debug!(files = source.files().len(), "loaded sources");

    let report = Driver::new(settings).process_round(&mut source);

    for diagnostic in source.diagnostics() {
        eprintln!("{diagnostic}");
    }
    for failure in &report.failures {
        eprintln!("error: {}: {}", failure.declaration, failure.error);
    }

    if !report.claimed {
        println!("No annotated declarations found in {:?}", args.source);
    }
    for path in &report.generated {
        println!("✓ Generated: {}", path.display());
    }

    if !report.is_clean() {
        anyhow::bail!(
            "Generation finished with {} rejected and {} failed declaration(s)",
            report.rejected.len(),
            report.failures.len()
        );
    }

    Ok(report)
}
