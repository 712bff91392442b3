//! Errors reported by `settings-gen`.

use observable_settings_codegen::CodegenError;
use std::path::PathBuf;
use thiserror::Error;

/// A failure that stops generation.
#[derive(Debug, Error)]
pub enum CliError {
    /// A source file could not be read or parsed.
    #[error(transparent)]
    Codegen(#[from] CodegenError),

    /// `--crate-path` is not a Rust path.
    #[error("invalid crate path `{path}`: {source}")]
    CratePath {
        /// The rejected argument.
        path: String,
        /// The parse error.
        #[source]
        source: syn::Error,
    },

    /// A generated unit could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// The destination, `-` for stdout.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
}
