//! Whole-file generation.
//!
//! The [`Generator`] scans parsed source files for structs with
//! `#[observable_setting]` fields and produces one [`GeneratedUnit`] per
//! eligible struct. A unit is meant to be `include!`d in the module that
//! declares the struct, so structs inside function bodies are skipped and
//! reported as [`Diagnostic`]s.
//!
//! Such a struct derives `SettingsSource`, which registers the field
//! attributes and expands to nothing. Structs that derive
//! `ObservableSettings` already get their accessors from the derive and are
//! skipped. Field types are qualified through the module's `use` items
//! before their storage strategy is chosen; see [`Imports`].
//!
//! # Example
//!
//! ```
//! use observable_settings_codegen::{Generator, SourceFile};
//!
//! let source = SourceFile::parse(
//!     vec!["app".to_string()],
//!     r#"
//!     #[derive(SettingsSource)]
//!     pub struct Audio {
//!         #[observable_setting]
//!         _volume: f64,
//!         context: SettingsContext,
//!     }
//!     "#,
//! )?;
//!
//! let generation = Generator::new().generate(&[source]);
//! assert_eq!(generation.units.len(), 1);
//! assert_eq!(generation.units[0].file_name, "app.Audio_observable_settings.g.rs");
//! # Ok::<(), syn::Error>(())
//! ```

use crate::crate_path::RUNTIME_CRATE;
use crate::enclosing::parse_enclosing;
use crate::emit::Emitter;
use crate::error::CodegenError;
use crate::extract::{Extractor, MARKER_ATTRIBUTE, group_by_enclosing};
use crate::imports::Imports;
use crate::model::{Container, EnclosingType, FieldCandidate, TypeIdentity};
use crate::render;
use core::fmt;
use indexmap::IndexMap;
use proc_macro2::TokenStream;
use quote::{ToTokens, format_ident, quote};
use std::fs;
use std::path::{Path, PathBuf};
use syn::punctuated::Punctuated;
use syn::{
    Attribute, Block, DeriveInput, Fields, ImplItem, Item, ItemImpl, ItemStruct, Stmt, Token, Type,
};

/// Name of the derive whose structs the generator leaves alone.
const DERIVE_NAME: &str = "ObservableSettings";

/// A parsed source file and the module it defines.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Module segments of the file, e.g. `["app", "settings"]`.
    pub module_path: Vec<String>,
    /// The parsed file.
    pub file: syn::File,
    /// Where the file was read from, if anywhere.
    pub origin: Option<PathBuf>,
}

impl SourceFile {
    /// Parses source text.
    ///
    /// # Errors
    ///
    /// Returns the parser error if `text` is not a valid Rust file.
    pub fn parse(module_path: Vec<String>, text: &str) -> syn::Result<Self> {
        Ok(Self {
            module_path,
            file: syn::parse_file(text)?,
            origin: None,
        })
    }

    /// Reads and parses a file.
    ///
    /// # Errors
    ///
    /// Returns [`CodegenError::Io`] or [`CodegenError::Parse`].
    pub fn read(path: &Path, module_path: Vec<String>) -> Result<Self, CodegenError> {
        let text = fs::read_to_string(path).map_err(|source| CodegenError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut source = Self::parse(module_path, &text).map_err(|source| CodegenError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        source.origin = Some(path.to_path_buf());
        Ok(source)
    }
}

/// The generated code for one struct.
#[derive(Debug, Clone)]
pub struct GeneratedUnit {
    /// Identity of the struct.
    pub identity: TypeIdentity,
    /// Fully qualified struct name.
    pub type_name: String,
    /// File name derived from the qualified name.
    pub file_name: String,
    /// The generated items.
    pub tokens: TokenStream,
}

impl GeneratedUnit {
    fn new(identity: TypeIdentity, tokens: TokenStream) -> Self {
        Self {
            type_name: identity.qualified_name(),
            file_name: render::file_name(&identity),
            identity,
            tokens,
        }
    }

    /// Renders the unit as source text.
    pub fn text(&self) -> String {
        render::render_text(&self.identity, &self.tokens)
    }
}

/// A struct that was skipped or could not be generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Fully qualified struct name.
    pub type_name: String,
    /// What went wrong.
    pub message: String,
}

impl Diagnostic {
    fn new(identity: &TypeIdentity, message: impl Into<String>) -> Self {
        Self {
            type_name: identity.qualified_name(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.type_name, self.message)
    }
}

/// The result of one generation pass.
#[derive(Debug, Clone, Default)]
pub struct Generation {
    /// Units in first-encounter order of their structs.
    pub units: Vec<GeneratedUnit>,
    /// Skipped structs and emission errors.
    pub diagnostics: Vec<Diagnostic>,
}

/// Generates units from whole source files.
#[derive(Debug, Clone)]
pub struct Generator {
    crate_path: TokenStream,
}

impl Default for Generator {
    fn default() -> Self {
        let runtime = format_ident!("{}", RUNTIME_CRATE);
        Self {
            crate_path: quote!(::#runtime),
        }
    }
}

impl Generator {
    /// Creates a generator whose output names `::observable_settings_core`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the path generated code uses to reach the runtime crate, e.g.
    /// `observable_settings` when only the umbrella crate is a dependency.
    #[must_use]
    pub fn with_crate_path(mut self, path: &syn::Path) -> Self {
        self.crate_path = path.to_token_stream();
        self
    }

    /// Runs one pass over `sources`.
    ///
    /// The same struct seen more than once (for example, the same file
    /// listed twice) yields a single unit.
    pub fn generate(&self, sources: &[SourceFile]) -> Generation {
        let mut scan = Scan::default();
        for source in sources {
            scan.items(&source.file.items, &source.module_path, Container::Module);
        }
        scan.apply_impls();

        let mut diagnostics = scan.diagnostics;
        let mut records = Vec::new();
        for candidate in Extractor::dedup(scan.candidates) {
            match Extractor::resolve(&candidate) {
                Ok(resolved) => records.extend(resolved),
                Err(err) => diagnostics.push(Diagnostic::new(&candidate.enclosing, err.to_string())),
            }
        }

        let emitter = Emitter::new(self.crate_path.clone());
        let mut units = Vec::new();
        for (identity, records) in group_by_enclosing(records) {
            let Some(target) = scan.types.get(&identity) else {
                continue;
            };

            match emitter.emit(target, &records) {
                Ok(Some(tokens)) => {
                    let unit = GeneratedUnit::new(identity, tokens);
                    tracing::debug!(
                        ty = %unit.type_name,
                        file = %unit.file_name,
                        properties = records.len(),
                        "generated settings unit"
                    );
                    tracing::trace!(text = %unit.text(), "generated source");
                    units.push(unit);
                }
                Ok(None) => diagnostics.push(Diagnostic::new(
                    &identity,
                    "declared inside a function or block; no accessors generated",
                )),
                Err(err) => diagnostics.push(Diagnostic::new(&identity, err.to_string())),
            }
        }

        for diagnostic in &diagnostics {
            tracing::warn!(ty = %diagnostic.type_name, "{}", diagnostic.message);
        }

        Generation { units, diagnostics }
    }
}

/// Declarations collected while walking source files.
#[derive(Default)]
struct Scan {
    types: IndexMap<TypeIdentity, EnclosingType>,
    candidates: Vec<FieldCandidate>,
    impls: Vec<(TypeIdentity, syn::Path)>,
    diagnostics: Vec<Diagnostic>,
}

impl Scan {
    fn items<'a>(
        &mut self,
        items: impl IntoIterator<Item = &'a Item>,
        scope: &[String],
        container: Container,
    ) {
        let items: Vec<&Item> = items.into_iter().collect();
        let imports = Imports::collect(items.iter().copied());

        for item in items {
            match item {
                Item::Struct(item) => self.structure(item, scope, container, &imports),
                Item::Mod(module) => {
                    if let Some((_, content)) = &module.content {
                        let scope = nested_scope(scope, module.ident.to_string());
                        self.items(content, &scope, container);
                    }
                }
                Item::Fn(function) => {
                    let scope = nested_scope(scope, function_segment(&function.sig.ident));
                    self.block(&function.block, &scope);
                }
                Item::Impl(implementation) => self.implementation(implementation, scope),
                _ => {}
            }
        }
    }

    fn block(&mut self, block: &Block, scope: &[String]) {
        let items = block.stmts.iter().filter_map(|stmt| match stmt {
            Stmt::Item(item) => Some(item),
            _ => None,
        });
        self.items(items, scope, Container::Nested);
    }

    fn implementation(&mut self, implementation: &ItemImpl, scope: &[String]) {
        if let Some((None, capability, _)) = &implementation.trait_
            && let Type::Path(self_ty) = implementation.self_ty.as_ref()
            && let Some(segment) = self_ty.path.segments.last()
        {
            let identity = TypeIdentity::new(scope.iter().cloned(), segment.ident.to_string());
            self.impls.push((identity, capability.clone()));
        }

        for item in &implementation.items {
            if let ImplItem::Fn(method) = item {
                let scope = nested_scope(scope, function_segment(&method.sig.ident));
                self.block(&method.block, &scope);
            }
        }
    }

    fn structure(
        &mut self,
        item: &ItemStruct,
        scope: &[String],
        container: Container,
        imports: &Imports,
    ) {
        let Fields::Named(fields) = &item.fields else {
            return;
        };
        let has_marker = fields.named.iter().any(|field| {
            field
                .attrs
                .iter()
                .any(|attr| attr.path().is_ident(MARKER_ATTRIBUTE))
        });
        if !has_marker {
            return;
        }
        if derives(&item.attrs, DERIVE_NAME) {
            tracing::debug!(
                ty = %item.ident,
                "struct derives ObservableSettings; no unit generated"
            );
            return;
        }

        let mut input = DeriveInput::from(item.clone());
        if let syn::Data::Struct(data) = &mut input.data {
            for field in data.fields.iter_mut() {
                imports.qualify(&mut field.ty, &item.generics);
            }
        }

        match parse_enclosing(&input, scope, container) {
            Ok((target, candidates)) => {
                self.types.entry(target.identity.clone()).or_insert(target);
                self.candidates.extend(candidates);
            }
            Err(err) => {
                let identity = TypeIdentity::new(scope.iter().cloned(), item.ident.to_string());
                self.diagnostics.push(Diagnostic::new(&identity, err.to_string()));
            }
        }
    }

    fn apply_impls(&mut self) {
        for (identity, capability) in self.impls.drain(..) {
            if let Some(target) = self.types.get_mut(&identity) {
                target.add_capability(capability);
            }
        }
    }
}

fn nested_scope(scope: &[String], segment: String) -> Vec<String> {
    scope.iter().cloned().chain([segment]).collect()
}

/// Scope segment of a function body, e.g. `build()`; distinct from a module
/// of the same name.
fn function_segment(ident: &syn::Ident) -> String {
    format!("{ident}()")
}

/// Returns whether `attrs` contain `#[derive(..)]` naming `name`.
fn derives(attrs: &[Attribute], name: &str) -> bool {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("derive"))
        .any(|attr| {
            attr.parse_args_with(Punctuated::<syn::Path, Token![,]>::parse_terminated)
                .is_ok_and(|paths| {
                    paths
                        .iter()
                        .any(|path| path.segments.last().is_some_and(|segment| segment.ident == name))
                })
        })
}
