//! Command-line arguments and the generation run.

use crate::error::CliError;
use crate::logging::{LogFormat, LoggingConfig};
use crate::module_path::module_path;
use clap::Parser;
use observable_settings_codegen::{Generator, SourceFile};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::Level;

/// Generates observable settings accessors for Rust source files.
#[derive(Debug, Clone, Parser)]
#[command(name = "settings-gen", version, about)]
pub struct Args {
    /// Source root that module paths are derived from.
    #[arg(long, default_value = "src")]
    pub root: PathBuf,

    /// Directory to write generated files into; stdout if omitted.
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Path generated code uses to name the runtime crate.
    #[arg(long, default_value = "::observable_settings_core")]
    pub crate_path: String,

    /// Maximum log level.
    #[arg(long, default_value = "warn")]
    pub log_level: Level,

    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    /// Source files to scan.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

impl Args {
    /// Returns the logging configuration selected by the flags.
    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig::new()
            .with_level(self.log_level)
            .with_format(self.log_format)
    }
}

/// What a run produced.
#[derive(Debug, Default)]
pub struct Outcome {
    /// Files written into the output directory.
    pub written: Vec<PathBuf>,
    /// Number of generated units.
    pub units: usize,
    /// Number of skipped types.
    pub diagnostics: usize,
}

/// Scans the input files and writes every generated unit.
///
/// With no output directory, units are written to `stdout` one after
/// another.
///
/// # Errors
///
/// Returns [`CliError`] if the crate path is invalid, a file cannot be read
/// or parsed, or output cannot be written. Skipped types are not errors.
pub fn run(args: &Args, stdout: &mut impl Write) -> Result<Outcome, CliError> {
    let crate_path: syn::Path =
        syn::parse_str(&args.crate_path).map_err(|source| CliError::CratePath {
            path: args.crate_path.clone(),
            source,
        })?;

    let sources = args
        .files
        .iter()
        .map(|file| SourceFile::read(file, module_path(&args.root, file)))
        .collect::<Result<Vec<_>, _>>()?;

    let generation = Generator::new()
        .with_crate_path(&crate_path)
        .generate(&sources);

    let mut outcome = Outcome {
        written: Vec::new(),
        units: generation.units.len(),
        diagnostics: generation.diagnostics.len(),
    };

    match &args.out_dir {
        Some(dir) => {
            fs::create_dir_all(dir).map_err(|source| CliError::Write {
                path: dir.clone(),
                source,
            })?;
            for unit in &generation.units {
                let path = dir.join(&unit.file_name);
                fs::write(&path, unit.text()).map_err(|source| CliError::Write {
                    path: path.clone(),
                    source,
                })?;
                tracing::info!(path = %path.display(), ty = %unit.type_name, "wrote unit");
                outcome.written.push(path);
            }
        }
        None => {
            for unit in &generation.units {
                writeln!(stdout, "{}", unit.text()).map_err(|source| CliError::Write {
                    path: PathBuf::from("-"),
                    source,
                })?;
            }
        }
    }

    tracing::info!(
        units = outcome.units,
        skipped = outcome.diagnostics,
        "generation finished"
    );
    Ok(outcome)
}
