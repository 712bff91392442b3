//! Names derived from a field identifier.
//!
//! For a field `_volume`:
//!
//! | Item            | Name             |
//! |-----------------|------------------|
//! | property        | `Volume`         |
//! | getter          | `volume`         |
//! | setter          | `set_volume`     |
//! | typed event     | `volume_changed` |

use proc_macro2::Span;
use syn::Ident;
use syn::ext::IdentExt;

/// Returns the field name without its raw prefix and leading underscores.
pub fn accessor_name(field: &Ident) -> String {
    field.unraw().to_string().trim_start_matches('_').to_string()
}

/// Derives the property name from a field name.
///
/// Leading underscores are stripped and the first character is upper-cased;
/// the rest is left unchanged. A name made only of underscores yields an
/// empty string.
///
/// ```
/// use observable_settings_codegen::naming::property_name;
///
/// assert_eq!(property_name("_volume"), "Volume");
/// assert_eq!(property_name("_x"), "X");
/// assert_eq!(property_name("recentFiles"), "RecentFiles");
/// assert_eq!(property_name("__"), "");
/// ```
pub fn property_name(field: &str) -> String {
    let stripped = field.trim_start_matches('_');
    let mut chars = stripped.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Builds the getter identifier, using a raw identifier for keywords.
///
/// # Errors
///
/// Returns an error if `name` cannot form an identifier at all.
pub fn getter_ident(name: &str, span: Span) -> syn::Result<Ident> {
    if syn::parse_str::<Ident>(name).is_ok() {
        Ok(Ident::new(name, span))
    } else if syn::parse_str::<Ident>(&format!("r#{name}")).is_ok() {
        Ok(Ident::new_raw(name, span))
    } else {
        Err(syn::Error::new(
            span,
            format!("`{name}` cannot be used as a getter name"),
        ))
    }
}

/// Builds the setter identifier `set_<name>`.
pub fn setter_ident(name: &str, span: Span) -> Ident {
    Ident::new(&format!("set_{name}"), span)
}

/// Builds the typed event accessor identifier `<name>_changed`.
pub fn event_ident(name: &str, span: Span) -> Ident {
    Ident::new(&format!("{name}_changed"), span)
}
