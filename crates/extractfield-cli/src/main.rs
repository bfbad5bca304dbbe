//! extractfield CLI - Generate `ExtractField<Name>` companion types
//!
//! Commands:
//! - `extractfield generate` - Scan a source tree and write companion types
//! - `extractfield check` - Validate an extractfield.toml configuration

use clap::{Parser, Subcommand};
use extractfield_core::TargetLanguage;
use extractfield_logging::{LogLevel, init_logging};
use std::path::PathBuf;
use std::process::ExitCode;

mod check;
mod config_file;
mod generate;

use config_file::ConfigFile;
use generate::GenerateArgs;

#[derive(Parser)]
#[command(name = "extractfield")]
#[command(author, version, about = "Generate nullable companion types for annotated structs", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error, off); RUST_LOG takes precedence
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a source tree and write companion types
    Generate {
        /// Root of the Rust source tree to scan (e.g. src)
        #[arg(short, long)]
        source: PathBuf,

        /// Root directory for generated sources
        #[arg(short, long)]
        generated_dir: Option<PathBuf>,

        /// Target language (rust, kotlin)
        #[arg(short, long)]
        lang: Option<TargetLanguage>,

        /// Marker attribute name (default: extract_field)
        #[arg(short, long)]
        annotation: Option<String>,

        /// Path to extractfield.toml (default: ./extractfield.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Validate an extractfield.toml configuration
    Check {
        /// Path to extractfield.toml (default: ./extractfield.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

impl Commands {
    fn config_path(&self) -> Option<&PathBuf> {
        match self {
            Commands::Generate { config, .. } | Commands::Check { config } => config.as_ref(),
        }
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let file = ConfigFile::load(cli.command.config_path().map(PathBuf::as_path))?;

    let mut logging = file.logging.clone();
    if let Some(level) = cli.log_level {
        logging.level = level;
    }
    if let Some(path) = cli.log_file {
        logging.file = Some(path);
    }
    init_logging(&logging)?;

    match cli.command {
        Commands::Generate {
            source,
            generated_dir,
            lang,
            annotation,
            config: _,
        } => {
            let args = GenerateArgs {
                source,
                generated_dir,
                language: lang,
                annotation,
            };
            generate::run(&args, file.generator)?;
        }
        Commands::Check { config } => {
            check::run(config.as_deref(), &file)?;
        }
    }

    Ok(())
}
