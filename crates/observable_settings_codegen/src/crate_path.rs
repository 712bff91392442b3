//! Auto-detection of the runtime crate path for generated code.
//!
//! Generated items name runtime types by fully-qualified path. The path is
//! found by checking, in order:
//! 1. If the consuming crate is `observable_settings_core`, or depends on it
//!    (possibly renamed), it emits `observable_settings_core::` paths.
//! 2. If the consuming crate depends on the `observable_settings` umbrella,
//!    it emits `observable_settings::observable_settings_core::` paths.
//!
//! Anything else is [`CodegenError::MissingRuntime`].

use crate::error::CodegenError;
use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

/// Package name of the runtime crate.
pub const RUNTIME_CRATE: &str = "observable_settings_core";

/// Package name of the umbrella crate.
pub const UMBRELLA_CRATE: &str = "observable_settings";

/// Returns the token path of the runtime crate in the consuming crate.
///
/// Only meaningful while a procedural macro is expanding, since it reads the
/// consuming crate's `Cargo.toml`.
///
/// # Errors
///
/// Returns [`CodegenError::MissingRuntime`] if neither crate is a dependency.
pub fn runtime_crate_path() -> Result<TokenStream, CodegenError> {
    match crate_name(RUNTIME_CRATE) {
        Ok(FoundCrate::Itself) => {
            let ident = format_ident!("{}", RUNTIME_CRATE);
            Ok(quote!(#ident))
        }
        Ok(FoundCrate::Name(found)) => {
            let ident = format_ident!("{}", found);
            Ok(quote!(#ident))
        }
        Err(_) => match crate_name(UMBRELLA_CRATE) {
            Ok(FoundCrate::Name(found)) => {
                let umbrella = format_ident!("{}", found);
                let runtime = format_ident!("{}", RUNTIME_CRATE);
                Ok(quote!(#umbrella::#runtime))
            }
            Ok(FoundCrate::Itself) => {
                let umbrella = format_ident!("{}", UMBRELLA_CRATE);
                let runtime = format_ident!("{}", RUNTIME_CRATE);
                Ok(quote!(#umbrella::#runtime))
            }
            Err(_) => Err(CodegenError::MissingRuntime),
        },
    }
}
