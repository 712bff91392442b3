//! Error types for code generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop generation outright.
///
/// Problems with individual types or fields are not errors at this level:
/// the derive reports them as compile errors and the file generator as
/// [`Diagnostic`](crate::Diagnostic)s.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// A source file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// The file being read.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A source file is not valid Rust.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        /// The file being parsed.
        path: PathBuf,
        /// The parser error.
        #[source]
        source: syn::Error,
    },

    /// Neither the runtime crate nor the umbrella crate is a dependency.
    #[error(
        "observable settings runtime not found; add `observable_settings` or \
         `observable_settings_core` to [dependencies]"
    )]
    MissingRuntime,
}
