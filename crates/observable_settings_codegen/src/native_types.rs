//! The closed set of types a key-value store holds natively.
//!
//! Matching is syntactic. Primitives and `String` match by suffix:
//! `String`, `string::String` and `std::string::String` all match the
//! `String` entry. Every other entry names a type a user crate could
//! shadow with its own `Point` or `Duration`, so it matches only a full
//! path such as `std::time::Duration` or `observable_settings::Point`. A
//! bare name falls back to JSON unless the file generator can qualify it
//! through a visible `use`. Generic arguments match recursively by suffix.
//!
//! Every entry has a `NativeSetting` implementation in the runtime crate.

use crate::model::{StorageStrategy, TypeDescriptor};
use syn::{GenericArgument, PathArguments, Type, TypePath};

/// A path pattern with generic argument patterns.
#[derive(Debug)]
pub struct TypePattern {
    /// Path segments, outermost first.
    pub segments: &'static [&'static str],
    /// Patterns for the last segment's type arguments.
    pub args: &'static [TypePattern],
    /// Whether the written path must name every segment.
    pub exact: bool,
}

impl TypePattern {
    const fn path(segments: &'static [&'static str]) -> Self {
        Self {
            segments,
            args: &[],
            exact: false,
        }
    }

    const fn exact(segments: &'static [&'static str]) -> Self {
        Self {
            segments,
            args: &[],
            exact: true,
        }
    }

    /// Returns whether `ty` names this pattern.
    pub fn matches(&self, ty: &Type) -> bool {
        let Type::Path(TypePath { qself: None, path }) = ty else {
            return false;
        };

        let written = path.segments.len();
        if written == 0 || written > self.segments.len() {
            return false;
        }
        if self.exact && written != self.segments.len() {
            return false;
        }

        let expected = &self.segments[self.segments.len() - written..];
        for (index, (segment, name)) in path.segments.iter().zip(expected).enumerate() {
            if segment.ident != name {
                return false;
            }
            let is_last = index + 1 == written;
            if !is_last && !segment.arguments.is_none() {
                return false;
            }
            if is_last && !self.matches_args(&segment.arguments) {
                return false;
            }
        }
        true
    }

    fn matches_args(&self, arguments: &PathArguments) -> bool {
        match arguments {
            PathArguments::None => self.args.is_empty(),
            PathArguments::AngleBracketed(bracketed) => {
                bracketed.args.len() == self.args.len()
                    && bracketed
                        .args
                        .iter()
                        .zip(self.args)
                        .all(|(arg, pattern)| match arg {
                            GenericArgument::Type(ty) => pattern.matches(ty),
                            _ => false,
                        })
            }
            PathArguments::Parenthesized(_) => false,
        }
    }
}

/// One natively storable type.
#[derive(Debug)]
pub struct NativeType {
    /// Display name.
    pub name: &'static str,
    /// Accepted paths.
    pub paths: &'static [TypePattern],
    /// False only for `String`, the one native type that is not a primitive
    /// or a small fixed-size value.
    pub is_primitive: bool,
}

impl NativeType {
    /// Returns whether `ty` names this type under any accepted path.
    pub fn matches(&self, ty: &Type) -> bool {
        self.paths.iter().any(|pattern| pattern.matches(ty))
    }
}

macro_rules! primitive {
    ($name:literal) => {
        NativeType {
            name: $name,
            paths: &[TypePattern::path(&[$name])],
            is_primitive: true,
        }
    };
}

macro_rules! geometry {
    ($name:literal) => {
        NativeType {
            name: $name,
            paths: &[
                TypePattern::exact(&["observable_settings_core", $name]),
                TypePattern::exact(&["observable_settings_core", "geometry", $name]),
                TypePattern::exact(&["observable_settings_core", "prelude", $name]),
                TypePattern::exact(&["observable_settings", $name]),
                TypePattern::exact(&["observable_settings", "geometry", $name]),
                TypePattern::exact(&["observable_settings", "prelude", $name]),
            ],
            is_primitive: true,
        }
    };
}

/// The allow-list.
pub static NATIVE_TYPES: &[NativeType] = &[
    primitive!("i16"),
    primitive!("u16"),
    primitive!("i32"),
    primitive!("u32"),
    primitive!("i64"),
    primitive!("u64"),
    primitive!("f32"),
    primitive!("f64"),
    primitive!("bool"),
    primitive!("char"),
    NativeType {
        name: "String",
        paths: &[
            TypePattern::path(&["std", "string", "String"]),
            TypePattern::path(&["alloc", "string", "String"]),
        ],
        is_primitive: false,
    },
    NativeType {
        name: "DateTime<FixedOffset>",
        paths: &[TypePattern {
            segments: &["chrono", "DateTime"],
            args: &[TypePattern::path(&["chrono", "FixedOffset"])],
            exact: true,
        }],
        is_primitive: true,
    },
    NativeType {
        name: "Duration",
        paths: &[
            TypePattern::exact(&["std", "time", "Duration"]),
            TypePattern::exact(&["core", "time", "Duration"]),
        ],
        is_primitive: true,
    },
    NativeType {
        name: "Uuid",
        paths: &[TypePattern::exact(&["uuid", "Uuid"])],
        is_primitive: true,
    },
    geometry!("Point"),
    geometry!("Size"),
    geometry!("Rect"),
];

/// Looks up the allow-list entry for `ty`.
pub fn lookup(ty: &Type) -> Option<&'static NativeType> {
    NATIVE_TYPES.iter().find(|native| native.matches(ty))
}

/// Chooses the storage strategy for a resolved type.
///
/// The `Option` layer is ignored: `Option<i32>` is stored natively.
pub fn classify(descriptor: &TypeDescriptor) -> StorageStrategy {
    match lookup(descriptor.inner()) {
        Some(native) => {
            tracing::trace!(ty = descriptor.qualified_name(), native = native.name, "native setting");
            StorageStrategy::Native
        }
        None => StorageStrategy::Json,
    }
}

const OPTION: &[TypePattern] = &[
    TypePattern::path(&["std", "option", "Option"]),
    TypePattern::path(&["core", "option", "Option"]),
];

/// Returns `T` if `ty` is written as `Option<T>`.
pub fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(TypePath { qself: None, path }) = ty else {
        return None;
    };
    let last = path.segments.last()?;
    let PathArguments::AngleBracketed(bracketed) = &last.arguments else {
        return None;
    };
    let mut args = bracketed.args.iter();
    let (Some(GenericArgument::Type(inner)), None) = (args.next(), args.next()) else {
        return None;
    };

    let mut bare = path.clone();
    if let Some(segment) = bare.segments.last_mut() {
        segment.arguments = PathArguments::None;
    }
    let bare = Type::Path(TypePath { qself: None, path: bare });

    OPTION
        .iter()
        .any(|pattern| pattern.matches(&bare))
        .then_some(inner)
}
