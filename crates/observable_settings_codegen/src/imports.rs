//! `use` declarations visible in one module scope.
//!
//! The file generator sees a module's imports, which a derive never does.
//! Field types are qualified through them before classification, so
//! `Duration` after `use std::time::Duration;` is stored natively while a
//! bare `Duration` with no visible import falls back to JSON.
//!
//! ```
//! use observable_settings_codegen::imports::Imports;
//! use quote::ToTokens;
//! use syn::{Generics, Type, parse_quote};
//!
//! let file: syn::File = parse_quote! {
//!     use std::time::Duration;
//! };
//! let imports = Imports::collect(&file.items);
//!
//! let mut ty: Type = parse_quote!(Option<Duration>);
//! imports.qualify(&mut ty, &Generics::default());
//! assert_eq!(
//!     ty.to_token_stream().to_string(),
//!     "Option < std :: time :: Duration >"
//! );
//! ```

use crate::native_types;
use indexmap::{IndexMap, IndexSet};
use syn::punctuated::Punctuated;
use syn::visit_mut::{self, VisitMut};
use syn::{Generics, Ident, Item, Path, PathArguments, PathSegment, Type, TypePath, UseTree};

/// Names imported into, or declared in, one module.
#[derive(Debug, Clone, Default)]
pub struct Imports {
    /// Explicitly imported names and the paths they stand for.
    names: IndexMap<String, Path>,
    /// Prefixes of glob imports.
    globs: Vec<Path>,
    /// Types declared in the module itself.
    local: IndexSet<String>,
}

impl Imports {
    /// Collects the imports and type declarations of one item list.
    ///
    /// Items nested in inline modules are not included; each module has its
    /// own scope.
    pub fn collect<'a>(items: impl IntoIterator<Item = &'a Item>) -> Self {
        let mut imports = Self::default();
        for item in items {
            match item {
                Item::Use(item) => {
                    let root = Path {
                        leading_colon: item.leading_colon,
                        segments: Punctuated::new(),
                    };
                    imports.tree(&root, &item.tree);
                }
                Item::Struct(item) => imports.declare(&item.ident),
                Item::Enum(item) => imports.declare(&item.ident),
                Item::Type(item) => imports.declare(&item.ident),
                Item::Union(item) => imports.declare(&item.ident),
                _ => {}
            }
        }
        imports
    }

    /// Returns whether nothing was imported.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.globs.is_empty()
    }

    /// Rewrites every path in `ty` that starts with an imported name into
    /// the full imported path.
    ///
    /// A bare name reached only through a glob is rewritten only when the
    /// result is a natively storable type. Type parameters of `generics` and
    /// types declared in the module are left alone.
    pub fn qualify(&self, ty: &mut Type, generics: &Generics) {
        if self.is_empty() {
            return;
        }
        let mut qualifier = Qualifier {
            imports: self,
            params: generics
                .type_params()
                .map(|param| param.ident.to_string())
                .collect(),
        };
        qualifier.visit_type_mut(ty);
    }

    fn declare(&mut self, ident: &Ident) {
        self.local.insert(ident.to_string());
    }

    fn tree(&mut self, prefix: &Path, tree: &UseTree) {
        match tree {
            UseTree::Path(path) => self.tree(&joined(prefix, &path.ident), &path.tree),
            UseTree::Name(name) => {
                if name.ident == "self" {
                    if let Some(last) = prefix.segments.last() {
                        self.names.insert(last.ident.to_string(), prefix.clone());
                    }
                } else {
                    self.names
                        .insert(name.ident.to_string(), joined(prefix, &name.ident));
                }
            }
            UseTree::Rename(rename) => {
                if rename.rename == "_" {
                    return;
                }
                let path = if rename.ident == "self" {
                    prefix.clone()
                } else {
                    joined(prefix, &rename.ident)
                };
                self.names.insert(rename.rename.to_string(), path);
            }
            UseTree::Glob(_) => self.globs.push(prefix.clone()),
            UseTree::Group(group) => {
                for tree in &group.items {
                    self.tree(prefix, tree);
                }
            }
        }
    }

    fn resolve(&self, path: &Path, params: &IndexSet<String>) -> Option<Path> {
        if path.leading_colon.is_some() {
            return None;
        }
        let first = path.segments.first()?;
        let name = first.ident.to_string();
        if params.contains(&name) || self.local.contains(&name) {
            return None;
        }

        if let Some(imported) = self.names.get(&name) {
            return Some(splice(imported, path));
        }

        if path.segments.len() != 1 {
            return None;
        }
        self.globs
            .iter()
            .map(|glob| splice(&joined(glob, &first.ident), path))
            .find(|candidate| {
                let ty = Type::Path(TypePath {
                    qself: None,
                    path: candidate.clone(),
                });
                native_types::lookup(&ty).is_some()
            })
    }
}

struct Qualifier<'a> {
    imports: &'a Imports,
    params: IndexSet<String>,
}

impl VisitMut for Qualifier<'_> {
    fn visit_type_path_mut(&mut self, ty: &mut TypePath) {
        if ty.qself.is_none()
            && let Some(resolved) = self.imports.resolve(&ty.path, &self.params)
        {
            tracing::trace!(
                from = %quote::ToTokens::to_token_stream(&ty.path),
                to = %quote::ToTokens::to_token_stream(&resolved),
                "qualified field type through import"
            );
            ty.path = resolved;
        }
        visit_mut::visit_type_path_mut(self, ty);
    }
}

fn joined(prefix: &Path, ident: &Ident) -> Path {
    let mut path = prefix.clone();
    path.segments.push(PathSegment::from(ident.clone()));
    path
}

/// Replaces the first segment of `path` with `imported`, keeping the first
/// segment's generic arguments on the last imported segment.
fn splice(imported: &Path, path: &Path) -> Path {
    let mut spliced = imported.clone();
    let mut written = path.segments.iter();
    if let Some(first) = written.next()
        && let Some(last) = spliced.segments.last_mut()
        && !matches!(first.arguments, PathArguments::None)
    {
        last.arguments = first.arguments.clone();
    }
    for segment in written {
        spliced.segments.push(segment.clone());
    }
    spliced
}
