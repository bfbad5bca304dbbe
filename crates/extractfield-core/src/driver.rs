//! Round orchestration: discover → read → synthesize → emit.
//!
//! # States
//!
//! ```text
//! Idle → Scanning → (Processing)* → Idle
//! ```
//!
//! A round with no annotated declarations returns straight to `Idle`.
//! Non-class declarations get exactly one diagnostic and are skipped. A
//! failed write aborts only the declaration being written; the remaining
//! declarations are still processed.

use crate::config::Settings;
use crate::emit::{Emitter, emit, emitter_for};
use crate::error::GenerateError;
use crate::model::AnnotatedDeclaration;
use crate::reader;
use crate::source::MetadataSource;
use crate::synth;
use std::fmt;
use std::path::PathBuf;

/// Diagnostic text reported for annotated items that are not classes
pub const ONLY_CLASSES_MESSAGE: &str = "only classes can be annotated";

/// Where the driver is within a round
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DriverState {
    #[default]
    Idle,
    Scanning,
    Processing { declaration: String },
}

impl fmt::Display for DriverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverState::Idle => write!(f, "Idle"),
            DriverState::Scanning => write!(f, "Scanning"),
            DriverState::Processing { declaration } => write!(f, "Processing({declaration})"),
        }
    }
}

/// A declaration whose generation failed
#[derive(Debug)]
pub struct DeclarationFailure {
    pub declaration: String,
    pub error: GenerateError,
}

/// Outcome of one round
#[derive(Debug, Default)]
pub struct RoundReport {
    /// Whether the round saw declarations carrying the annotation
    pub claimed: bool,

    /// Files written, in processing order
    pub generated: Vec<PathBuf>,

    /// Declarations rejected with a diagnostic
    pub rejected: Vec<String>,

    pub failures: Vec<DeclarationFailure>,
}

impl RoundReport {
    /// True when nothing was rejected and nothing failed
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty() && self.failures.is_empty()
    }
}

/// Runs generation rounds against a [`MetadataSource`]
pub struct Driver {
    settings: Settings,
    emitter: Box<dyn Emitter>,
    state: DriverState,
}

impl Driver {
    /// Create a driver emitting in the configured language
    pub fn new(settings: Settings) -> Self {
        let emitter = emitter_for(settings.language());
        Self::with_emitter(settings, emitter)
    }

    /// Create a driver with a custom emitter
    pub fn with_emitter(settings: Settings, emitter: Box<dyn Emitter>) -> Self {
        Self {
            settings,
            emitter,
            state: DriverState::Idle,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn state(&self) -> &DriverState {
        &self.state
    }

    /// Process every declaration annotated in this round.
    pub fn process_round<S: MetadataSource + ?Sized>(&mut self, source: &mut S) -> RoundReport {
        self.state = DriverState::Scanning;

        let annotation = self.settings.annotation().to_string();
        let declarations = source.declarations_with_annotation(&annotation);

        let mut report = RoundReport::default();
        if declarations.is_empty() {
            tracing::debug!(annotation = %annotation, "no annotated declarations");
            self.state = DriverState::Idle;
            return report;
        }

        report.claimed = true;
        tracing::info!(
            annotation = %annotation,
            declarations = declarations.len(),
            output_root = %self.settings.output_root().display(),
            "generation round started"
        );

        for decl in &declarations {
            let name = decl.qualified_name();
            self.state = DriverState::Processing {
                declaration: name.clone(),
            };

            if !decl.kind.is_class_like() {
                tracing::warn!(declaration = %name, kind = %decl.kind, "{ONLY_CLASSES_MESSAGE}");
                source.report_diagnostic(decl, ONLY_CLASSES_MESSAGE);
                report.rejected.push(name);
                continue;
            }

            match self.generate(&*source, decl) {
                Ok(path) => {
                    tracing::debug!(declaration = %name, path = %path.display(), "generated");
                    report.generated.push(path);
                }
                Err(error) => {
                    tracing::warn!(declaration = %name, error = %error, "generation failed");
                    report.failures.push(DeclarationFailure {
                        declaration: name,
                        error,
                    });
                }
            }
        }

        tracing::info!(
            generated = report.generated.len(),
            rejected = report.rejected.len(),
            failed = report.failures.len(),
            "generation round finished"
        );

        self.state = DriverState::Idle;
        report
    }

    fn generate<S: MetadataSource + ?Sized>(
        &self,
        source: &S,
        decl: &AnnotatedDeclaration,
    ) -> Result<PathBuf, GenerateError> {
        let metadata = reader::read(source, decl);
        let ty = synth::synthesize_from(&metadata);
        tracing::trace!(
            name = %ty.name,
            properties = ty.properties.len(),
            methods = ty.method_count(),
            "synthesized"
        );
        emit(self.emitter.as_ref(), &ty, self.settings.output_root())
    }
}

#[cfg(test)]
#[path = "driver/driver_tests.rs"]
mod driver_tests;
