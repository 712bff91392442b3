//! The declaration extractor: annotated fields to [`FieldDeclaration`]s.
//!
//! Extraction runs in three steps:
//!
//! 1. **Filter**: a field is a candidate only if it carries an attribute.
//! 2. **Match**: a candidate is kept only if one of its attributes is the
//!    `#[observable_setting]` marker; its arguments are parsed here.
//! 3. **Resolve**: every declared variable with a describable type becomes
//!    one record.
//!
//! Candidates are deduplicated structurally before resolution, so scanning
//! the same source twice produces each record once.

use crate::model::{
    FieldCandidate, FieldDeclaration, StorageStrategy, TypeDescriptor, TypeIdentity,
};
use indexmap::{IndexMap, IndexSet};
use quote::ToTokens;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Attribute, Expr, ExprLit, Field, Ident, Lit, Meta, Token};

/// Name of the field marker attribute.
pub const MARKER_ATTRIBUTE: &str = "observable_setting";

/// Arguments of a `#[observable_setting(...)]` marker.
///
/// Positional arguments follow the order `(key, raise_event)`; the same
/// values can be given by name. The storage strategy is chosen from the
/// field type unless given as a bare `native`/`json` flag or as
/// `strategy = "json"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerArgs {
    /// Explicit storage key.
    pub override_key: Option<String>,
    /// Whether a typed change event is emitted. Defaults to `true`.
    pub raise_event: bool,
    /// Explicit storage strategy.
    pub strategy: Option<StorageStrategy>,
}

impl Default for MarkerArgs {
    fn default() -> Self {
        Self {
            override_key: None,
            raise_event: true,
            strategy: None,
        }
    }
}

/// One argument inside the marker's parentheses.
enum MarkerArg {
    Positional(Lit),
    Named(Ident, Lit),
    Flag(Ident),
}

impl Parse for MarkerArg {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.peek(Ident) && input.peek2(Token![=]) {
            let name: Ident = input.parse()?;
            input.parse::<Token![=]>()?;
            Ok(Self::Named(name, input.parse()?))
        } else if input.peek(Ident) {
            Ok(Self::Flag(input.parse()?))
        } else {
            Ok(Self::Positional(input.parse()?))
        }
    }
}

/// Stateless entry points of the extraction pipeline.
pub struct Extractor;

impl Extractor {
    /// Syntactic prefilter: whether a field has any attribute at all.
    pub fn is_candidate(field: &Field) -> bool {
        !field.attrs.is_empty()
    }

    /// Returns the marker arguments if `attrs` contains the marker.
    ///
    /// Other attributes are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the marker's arguments are malformed or the marker
    /// appears more than once.
    pub fn marker_args(attrs: &[Attribute]) -> syn::Result<Option<MarkerArgs>> {
        let mut markers = attrs
            .iter()
            .filter(|attr| attr.path().is_ident(MARKER_ATTRIBUTE));

        let Some(marker) = markers.next() else {
            return Ok(None);
        };
        if let Some(duplicate) = markers.next() {
            return Err(syn::Error::new_spanned(
                duplicate,
                "duplicate #[observable_setting] attribute",
            ));
        }

        parse_marker(marker).map(Some)
    }

    /// Resolves a candidate into zero or more records.
    ///
    /// Only the first variable receives documentation. A variable whose type
    /// cannot be resolved is skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the marker is malformed.
    pub fn resolve(candidate: &FieldCandidate) -> syn::Result<Vec<FieldDeclaration>> {
        if candidate.attrs.is_empty() {
            return Ok(Vec::new());
        }
        let Some(args) = Self::marker_args(&candidate.attrs)? else {
            return Ok(Vec::new());
        };

        let documentation = extract_documentation(&candidate.attrs);
        let mut records = Vec::with_capacity(candidate.variables.len());

        for (index, (field, ty)) in candidate.variables.iter().enumerate() {
            let Some(declared_type) = TypeDescriptor::resolve(ty) else {
                tracing::trace!(
                    enclosing = %candidate.enclosing,
                    field = %field,
                    "field type cannot be resolved; skipping"
                );
                continue;
            };

            records.push(FieldDeclaration {
                field: field.clone(),
                declared_type,
                enclosing: candidate.enclosing.clone(),
                documentation: if index == 0 {
                    documentation.clone()
                } else {
                    None
                },
                override_key: args.override_key.clone(),
                raise_event: args.raise_event,
                strategy_override: args.strategy,
            });
        }

        Ok(records)
    }

    /// Removes structurally identical candidates, keeping first occurrences.
    pub fn dedup(candidates: impl IntoIterator<Item = FieldCandidate>) -> Vec<FieldCandidate> {
        candidates
            .into_iter()
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }

    /// Deduplicates and resolves candidates in encounter order.
    ///
    /// # Errors
    ///
    /// Returns every malformed marker, combined into one error.
    pub fn collect(
        candidates: impl IntoIterator<Item = FieldCandidate>,
    ) -> syn::Result<Vec<FieldDeclaration>> {
        let mut records = Vec::new();
        let mut errors: Option<syn::Error> = None;

        for candidate in Self::dedup(candidates) {
            match Self::resolve(&candidate) {
                Ok(resolved) => records.extend(resolved),
                Err(err) => match &mut errors {
                    Some(existing) => existing.combine(err),
                    None => errors = Some(err),
                },
            }
        }

        match errors {
            Some(err) => Err(err),
            None => Ok(records),
        }
    }
}

/// Partitions records by enclosing type, in first-encounter order.
pub fn group_by_enclosing(
    records: impl IntoIterator<Item = FieldDeclaration>,
) -> IndexMap<TypeIdentity, Vec<FieldDeclaration>> {
    let mut groups: IndexMap<TypeIdentity, Vec<FieldDeclaration>> = IndexMap::new();
    for record in records {
        groups
            .entry(record.enclosing.clone())
            .or_default()
            .push(record);
    }
    groups
}

/// Joins the doc attributes of a declaration with `\n`.
///
/// Returns `None` if there are none or they contain only whitespace.
pub fn extract_documentation(attrs: &[Attribute]) -> Option<String> {
    let lines: Vec<String> = attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(meta) => match &meta.value {
                Expr::Lit(ExprLit {
                    lit: Lit::Str(text),
                    ..
                }) => Some(text.value()),
                _ => None,
            },
            _ => None,
        })
        .collect();

    let joined = lines.join("\n");
    if joined.trim().is_empty() {
        None
    } else {
        Some(joined)
    }
}

fn parse_marker(marker: &Attribute) -> syn::Result<MarkerArgs> {
    let mut args = MarkerArgs::default();

    match &marker.meta {
        Meta::Path(_) => {}
        Meta::NameValue(meta) => match &meta.value {
            Expr::Lit(ExprLit {
                lit: Lit::Str(key), ..
            }) => args.override_key = Some(key.value()),
            other => {
                return Err(syn::Error::new_spanned(
                    other,
                    "expected a string key, e.g. #[observable_setting = \"Key\"]",
                ));
            }
        },
        Meta::List(_) => {
            let parsed =
                marker.parse_args_with(Punctuated::<MarkerArg, Token![,]>::parse_terminated)?;
            apply_marker_args(&mut args, parsed)?;
        }
    }

    Ok(args)
}

fn apply_marker_args(
    args: &mut MarkerArgs,
    parsed: Punctuated<MarkerArg, Token![,]>,
) -> syn::Result<()> {
    let mut key_seen = false;
    let mut raise_seen = false;
    let mut strategy_seen = false;
    let mut named_seen = false;

    for (position, arg) in parsed.into_iter().enumerate() {
        let (slot, lit) = match arg {
            MarkerArg::Positional(lit) => {
                if named_seen {
                    return Err(syn::Error::new_spanned(
                        lit,
                        "positional arguments must come before named arguments",
                    ));
                }
                match position {
                    0 => ("key", lit),
                    1 => ("raise_event", lit),
                    _ => {
                        return Err(syn::Error::new_spanned(
                            lit,
                            "expected at most two arguments: (key, raise_event)",
                        ));
                    }
                }
            }
            MarkerArg::Flag(flag) => {
                named_seen = true;
                if strategy_seen {
                    return Err(syn::Error::new_spanned(
                        flag,
                        "storage strategy given more than once",
                    ));
                }
                strategy_seen = true;
                args.strategy = Some(parse_strategy(&flag.to_string(), &flag)?);
                continue;
            }
            MarkerArg::Named(name, lit) => {
                named_seen = true;
                if name == "key" {
                    ("key", lit)
                } else if name == "raise_event" {
                    ("raise_event", lit)
                } else if name == "strategy" {
                    ("strategy", lit)
                } else {
                    return Err(syn::Error::new_spanned(
                        name,
                        "unknown argument; expected `key`, `raise_event` or `strategy`",
                    ));
                }
            }
        };

        match slot {
            "key" => {
                if key_seen {
                    return Err(syn::Error::new_spanned(lit, "`key` given more than once"));
                }
                key_seen = true;
                match lit {
                    Lit::Str(key) => args.override_key = Some(key.value()),
                    other => {
                        return Err(syn::Error::new_spanned(
                            other,
                            "`key` must be a string literal",
                        ));
                    }
                }
            }
            "raise_event" => {
                if raise_seen {
                    return Err(syn::Error::new_spanned(
                        lit,
                        "`raise_event` given more than once",
                    ));
                }
                raise_seen = true;
                match lit {
                    Lit::Bool(raise) => args.raise_event = raise.value,
                    other => {
                        return Err(syn::Error::new_spanned(
                            other,
                            "`raise_event` must be `true` or `false`",
                        ));
                    }
                }
            }
            _ => {
                if strategy_seen {
                    return Err(syn::Error::new_spanned(
                        lit,
                        "storage strategy given more than once",
                    ));
                }
                strategy_seen = true;
                match &lit {
                    Lit::Str(strategy) => {
                        args.strategy = Some(parse_strategy(&strategy.value(), &lit)?);
                    }
                    other => {
                        return Err(syn::Error::new_spanned(
                            other,
                            "`strategy` must be \"native\" or \"json\"",
                        ));
                    }
                }
            }
        }
    }

    Ok(())
}

fn parse_strategy(name: &str, tokens: &impl ToTokens) -> syn::Result<StorageStrategy> {
    match name {
        "native" => Ok(StorageStrategy::Native),
        "json" => Ok(StorageStrategy::Json),
        _ => Err(syn::Error::new_spanned(
            tokens,
            "unknown storage strategy; expected `native` or `json`",
        )),
    }
}
