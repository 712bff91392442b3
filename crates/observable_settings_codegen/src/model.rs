//! Records passed from the extractor to the emitter.

use crate::naming;
use crate::native_types;
use core::fmt;
use quote::ToTokens;
use syn::{Attribute, Generics, Ident, Path, Type};

/// Identifies an enclosing type by module path and name.
///
/// Compared structurally: two identities built from separate parses of the
/// same declaration are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeIdentity {
    module_path: Vec<String>,
    name: String,
}

impl TypeIdentity {
    /// Creates an identity.
    pub fn new<S: Into<String>>(
        module_path: impl IntoIterator<Item = S>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            module_path: module_path.into_iter().map(Into::into).collect(),
            name: name.into(),
        }
    }

    /// Returns the module segments, outermost first.
    pub fn module_path(&self) -> &[String] {
        &self.module_path
    }

    /// Returns the type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the name joined with `::`, e.g. `app::settings::Audio`.
    pub fn qualified_name(&self) -> String {
        self.joined("::")
    }

    /// Returns the name joined with `.`, e.g. `app.settings.Audio`.
    pub fn dotted_name(&self) -> String {
        self.joined(".")
    }

    fn joined(&self, separator: &str) -> String {
        self.module_path
            .iter()
            .map(String::as_str)
            .chain([self.name.as_str()])
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl fmt::Display for TypeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified_name())
    }
}

/// Where an enclosing type is declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Container {
    /// Directly in a module; generated items can be placed beside it.
    Module,
    /// Inside a function body or another block.
    Nested,
}

/// How a property's value is kept in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageStrategy {
    /// As a native store value.
    Native,
    /// As JSON text.
    Json,
}

impl StorageStrategy {
    /// Returns the matching variant name of the runtime enum.
    pub fn variant_name(self) -> &'static str {
        match self {
            Self::Native => "Native",
            Self::Json => "Json",
        }
    }
}

/// A resolved field type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    declared: Type,
    inner: Type,
    nullable: bool,
    qualified_name: String,
}

impl TypeDescriptor {
    /// Resolves a declared type, or returns `None` if it does not describe a
    /// concrete value type (`_`, `impl Trait`, a macro, a trait object).
    pub fn resolve(ty: &Type) -> Option<Self> {
        let ty = strip_groups(ty);
        if !is_describable(ty) {
            return None;
        }

        let (inner, nullable) = match native_types::option_inner(ty) {
            Some(inner) if is_describable(strip_groups(inner)) => (strip_groups(inner), true),
            Some(_) => return None,
            None => (ty, false),
        };

        Some(Self {
            declared: ty.clone(),
            inner: inner.clone(),
            nullable,
            qualified_name: normalized_name(ty),
        })
    }

    /// Returns the type as written.
    pub fn declared(&self) -> &Type {
        &self.declared
    }

    /// Returns the type with one `Option` layer removed.
    pub fn inner(&self) -> &Type {
        &self.inner
    }

    /// Returns whether the declared type is an `Option`.
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Returns the declared type rendered without token spacing, e.g.
    /// `Option<Vec<i32>>`.
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }
}

fn strip_groups(ty: &Type) -> &Type {
    match ty {
        Type::Group(group) => strip_groups(&group.elem),
        Type::Paren(paren) => strip_groups(&paren.elem),
        other => other,
    }
}

fn is_describable(ty: &Type) -> bool {
    !matches!(
        ty,
        Type::Infer(_)
            | Type::ImplTrait(_)
            | Type::Macro(_)
            | Type::Never(_)
            | Type::TraitObject(_)
            | Type::Verbatim(_)
    )
}

fn normalized_name(ty: &Type) -> String {
    ty.to_token_stream()
        .to_string()
        .replace(" :: ", "::")
        .replace(" <", "<")
        .replace("< ", "<")
        .replace(" >", ">")
        .replace(" ,", ",")
}

/// One annotated field, ready for emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDeclaration {
    /// The field identifier as declared.
    pub field: Ident,
    /// The resolved field type.
    pub declared_type: TypeDescriptor,
    /// The type declaring the field.
    pub enclosing: TypeIdentity,
    /// Documentation carried over to the getter.
    pub documentation: Option<String>,
    /// Explicit storage key.
    pub override_key: Option<String>,
    /// Whether a typed change event is emitted.
    pub raise_event: bool,
    /// Strategy given on the marker, if any.
    pub strategy_override: Option<StorageStrategy>,
}

impl FieldDeclaration {
    /// Returns the property name derived from the field.
    pub fn property_name(&self) -> String {
        naming::property_name(&naming::accessor_name(&self.field))
    }

    /// Returns the override key, or the property name.
    pub fn storage_key(&self) -> String {
        self.override_key
            .clone()
            .unwrap_or_else(|| self.property_name())
    }

    /// Returns how the value is stored: the marker's strategy, or the one
    /// chosen from the type.
    pub fn strategy(&self) -> StorageStrategy {
        self.strategy_override
            .unwrap_or_else(|| native_types::classify(&self.declared_type))
    }
}

/// A field declaration before semantic matching.
///
/// Rust fields always declare one variable; the list form lets every
/// variable of a multi-variable declaration resolve on its own while only
/// the first receives documentation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldCandidate {
    /// The declaring type.
    pub enclosing: TypeIdentity,
    /// Every attribute on the declaration, in source order.
    pub attrs: Vec<Attribute>,
    /// The declared `(name, type)` pairs.
    pub variables: Vec<(Ident, Type)>,
}

impl FieldCandidate {
    /// Creates a single-variable candidate.
    pub fn single(enclosing: TypeIdentity, attrs: Vec<Attribute>, field: Ident, ty: Type) -> Self {
        Self {
            enclosing,
            attrs,
            variables: vec![(field, ty)],
        }
    }
}

/// A type that may receive generated properties.
#[derive(Debug, Clone)]
pub struct EnclosingType {
    /// Structural identity.
    pub identity: TypeIdentity,
    /// The type identifier.
    pub ident: Ident,
    /// The type's generics, repeated on every generated impl.
    pub generics: Generics,
    /// Traits the type already implements.
    pub capabilities: Vec<Path>,
    /// Where the type is declared.
    pub container: Container,
    /// The `SettingsContext` field, if one was found.
    pub context_field: Option<Ident>,
}

impl EnclosingType {
    /// Returns whether `capability` is among the declared traits, compared
    /// by the trait's own name.
    pub fn declares(&self, capability: &str) -> bool {
        self.capabilities.iter().any(|path| {
            path.segments
                .last()
                .is_some_and(|segment| segment.ident == capability)
        })
    }

    /// Records a trait implementation, ignoring duplicates.
    pub fn add_capability(&mut self, capability: Path) {
        if !self.capabilities.contains(&capability) {
            self.capabilities.push(capability);
        }
    }
}
