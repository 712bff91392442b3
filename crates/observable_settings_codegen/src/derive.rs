//! Expansion of `#[derive(ObservableSettings)]`.

use crate::crate_path::runtime_crate_path;
use crate::emit::Emitter;
use crate::enclosing::parse_enclosing;
use crate::extract::Extractor;
use crate::model::Container;
use proc_macro2::TokenStream;
use syn::DeriveInput;

/// Expands the derive for `input`, resolving the runtime crate from the
/// consuming crate's manifest.
///
/// Errors are returned as `compile_error!` invocations.
pub fn expand_derive(input: &DeriveInput) -> TokenStream {
    match runtime_crate_path() {
        Ok(krate) => expand_with_crate_path(input, krate),
        Err(err) => syn::Error::new_spanned(&input.ident, err).to_compile_error(),
    }
}

/// Expands the derive for `input` against an explicit runtime crate path.
pub fn expand_with_crate_path(input: &DeriveInput, krate: TokenStream) -> TokenStream {
    let (target, candidates) = match parse_enclosing(input, &[], Container::Module) {
        Ok(parsed) => parsed,
        Err(err) => return err.write_errors(),
    };

    let expanded = Extractor::collect(candidates)
        .and_then(|records| Emitter::new(krate).emit(&target, &records));

    match expanded {
        Ok(tokens) => tokens.unwrap_or_default(),
        Err(err) => err.to_compile_error(),
    }
}
