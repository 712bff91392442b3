//! Type-level configuration of a settings struct.
//!
//! ```ignore
//! #[derive(ObservableSettings)]
//! #[observable_settings(implements(NotifyPropertyChanged))]
//! struct AudioSettings {
//!     #[observable_setting]
//!     _volume: f64,
//!
//!     #[observable_settings(context)]
//!     state: SettingsContext,
//! }
//! ```

use crate::model::{Container, EnclosingType, FieldCandidate, TypeIdentity};
use darling::util::PathList;
use darling::{FromDeriveInput, FromField};
use syn::{Attribute, DeriveInput, Generics, Ident, Type};

/// Name of the runtime context type looked up by field type.
const CONTEXT_TYPE: &str = "SettingsContext";

/// Parsed attributes of the struct.
#[derive(FromDeriveInput)]
#[darling(attributes(observable_settings), supports(struct_named))]
struct SettingsInput {
    ident: Ident,
    generics: Generics,
    data: darling::ast::Data<(), SettingsField>,

    /// Traits the struct implements by hand.
    #[darling(default)]
    implements: PathList,
}

/// Parsed attributes of one field.
#[derive(FromField)]
#[darling(attributes(observable_settings), forward_attrs)]
struct SettingsField {
    ident: Option<Ident>,
    ty: Type,
    attrs: Vec<Attribute>,

    /// Marks the `SettingsContext` field explicitly.
    #[darling(default)]
    context: bool,
}

/// Reads a struct's configuration and field candidates.
///
/// # Errors
///
/// Returns an error if the input is not a struct with named fields, the
/// configuration attribute is malformed, or the context field is ambiguous.
pub fn parse_enclosing(
    input: &DeriveInput,
    module_path: &[String],
    container: Container,
) -> darling::Result<(EnclosingType, Vec<FieldCandidate>)> {
    let parsed = SettingsInput::from_derive_input(input)?;
    let identity = TypeIdentity::new(module_path.iter().cloned(), parsed.ident.to_string());

    let fields = parsed
        .data
        .take_struct()
        .ok_or_else(|| darling::Error::unsupported_shape("enum").with_span(&parsed.ident))?
        .fields;

    let context_field = find_context_field(&fields)?;

    let candidates = fields
        .into_iter()
        .filter(|field| !field.attrs.is_empty())
        .filter_map(|field| {
            let ident = field.ident?;
            Some(FieldCandidate::single(identity.clone(), field.attrs, ident, field.ty))
        })
        .collect();

    let target = EnclosingType {
        identity,
        ident: parsed.ident,
        generics: parsed.generics,
        capabilities: parsed.implements.to_vec(),
        container,
        context_field,
    };

    Ok((target, candidates))
}

fn find_context_field(fields: &[SettingsField]) -> darling::Result<Option<Ident>> {
    let marked: Vec<&SettingsField> = fields.iter().filter(|field| field.context).collect();
    match marked.as_slice() {
        [only] => return Ok(only.ident.clone()),
        [_, second, ..] => {
            return Err(darling::Error::custom(
                "only one field can be marked #[observable_settings(context)]",
            )
            .with_span(&second.ty));
        }
        [] => {}
    }

    let typed: Vec<&SettingsField> = fields
        .iter()
        .filter(|field| is_context_type(&field.ty))
        .collect();
    match typed.as_slice() {
        [] => Ok(None),
        [only] => Ok(only.ident.clone()),
        [_, second, ..] => Err(darling::Error::custom(
            "several SettingsContext fields; mark one with #[observable_settings(context)]",
        )
        .with_span(&second.ty)),
    }
}

fn is_context_type(ty: &Type) -> bool {
    match ty {
        Type::Path(path) => path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == CONTEXT_TYPE),
        Type::Group(group) => is_context_type(&group.elem),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn parse(input: DeriveInput) -> darling::Result<(EnclosingType, Vec<FieldCandidate>)> {
        parse_enclosing(&input, &["app".to_string()], Container::Module)
    }

    #[test]
    fn finds_context_by_type() {
        let (target, candidates) = parse(parse_quote! {
            struct Audio {
                #[observable_setting]
                _volume: f64,
                plain: u8,
                ctx: observable_settings::SettingsContext,
            }
        })
        .unwrap();

        assert_eq!(target.identity.qualified_name(), "app::Audio");
        assert_eq!(target.context_field.unwrap(), "ctx");
        assert_eq!(target.container, Container::Module);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].variables[0].0, "_volume");
    }

    #[test]
    fn explicit_context_wins() {
        let (target, _) = parse(parse_quote! {
            struct Audio {
                primary: SettingsContext,
                #[observable_settings(context)]
                secondary: std::sync::Arc<SettingsContext>,
            }
        })
        .unwrap();
        assert_eq!(target.context_field.unwrap(), "secondary");
    }

    #[test]
    fn missing_context_is_not_an_error_here() {
        let (target, _) = parse(parse_quote! {
            struct Audio { #[observable_setting] _volume: f64 }
        })
        .unwrap();
        assert!(target.context_field.is_none());
    }

    #[test]
    fn ambiguous_context_is_an_error() {
        assert!(
            parse(parse_quote! {
                struct Audio { a: SettingsContext, b: SettingsContext }
            })
            .is_err()
        );
    }

    #[test]
    fn implements_list_is_read() {
        let (target, _) = parse(parse_quote! {
            #[observable_settings(implements(NotifyPropertyChanged, Clone))]
            struct Audio { ctx: SettingsContext }
        })
        .unwrap();
        assert!(target.declares("NotifyPropertyChanged"));
        assert!(target.declares("Clone"));
    }

    #[test]
    fn rejects_other_shapes() {
        assert!(parse(parse_quote! { struct Audio(SettingsContext); }).is_err());
        assert!(parse(parse_quote! { enum Audio { A } }).is_err());
    }
}
