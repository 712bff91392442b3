//! The property emitter: records to generated items.
//!
//! For an eligible type `T` with context field `ctx`, one emission yields:
//!
//! ```ignore
//! impl ObservableSettings for T { /* context access, property table */ }
//! impl NotifyPropertyChanged for T { /* unless T declares it already */ }
//! impl T {
//!     pub fn volume(&self) -> f64 { /* read store, default to self._volume */ }
//!     pub fn set_volume(&self, value: f64) { /* compare, write, notify */ }
//!     pub fn volume_changed(&self) -> Arc<Event<SettingValueChanged<f64>>> { .. }
//! }
//! ```

use crate::model::{Container, EnclosingType, FieldDeclaration, StorageStrategy};
use crate::naming;
use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::Ident;

/// Name of the change-notification trait.
pub const NOTIFY_CAPABILITY: &str = "NotifyPropertyChanged";

/// Emits generated items against a runtime crate path.
#[derive(Debug, Clone)]
pub struct Emitter {
    krate: TokenStream,
}

impl Emitter {
    /// Creates an emitter whose output names runtime items through `krate`.
    pub fn new(krate: TokenStream) -> Self {
        Self { krate }
    }

    /// Emits the items for one enclosing type.
    ///
    /// Returns `Ok(None)` if the type is not declared directly in a module.
    ///
    /// # Errors
    ///
    /// Returns an error if the type has no context field, or if a property
    /// name cannot form an identifier. Errors from every property are
    /// combined.
    pub fn emit(
        &self,
        target: &EnclosingType,
        records: &[FieldDeclaration],
    ) -> syn::Result<Option<TokenStream>> {
        if target.container == Container::Nested {
            tracing::debug!(ty = %target.identity, "type is not declared in a module; skipping");
            return Ok(None);
        }

        let Some(context) = &target.context_field else {
            return Err(syn::Error::new_spanned(
                &target.ident,
                format!(
                    "`{}` needs a `SettingsContext` field to derive ObservableSettings",
                    target.ident
                ),
            ));
        };

        let mut properties = Vec::with_capacity(records.len());
        let mut rows = Vec::with_capacity(records.len());
        let mut errors: Option<syn::Error> = None;

        for record in records {
            match self.property(record, context) {
                Ok(property) => {
                    properties.push(property);
                    rows.push(self.property_row(record));
                }
                Err(err) => match &mut errors {
                    Some(existing) => existing.combine(err),
                    None => errors = Some(err),
                },
            }
        }
        if let Some(err) = errors {
            return Err(err);
        }

        let header = self.header(target, context, &rows);
        let notify = if target.declares(NOTIFY_CAPABILITY) {
            TokenStream::new()
        } else {
            self.notify_impl(target, context)
        };

        let ident = &target.ident;
        let (impl_generics, ty_generics, where_clause) = target.generics.split_for_impl();

        tracing::debug!(
            ty = %target.identity,
            properties = records.len(),
            notify_impl = !notify.is_empty(),
            "emitted observable settings"
        );

        Ok(Some(quote! {
            #header

            #notify

            impl #impl_generics #ident #ty_generics #where_clause {
                #(#properties)*
            }
        }))
    }

    fn header(&self, target: &EnclosingType, context: &Ident, rows: &[TokenStream]) -> TokenStream {
        let krate = &self.krate;
        let ident = &target.ident;
        let (impl_generics, ty_generics, where_clause) = target.generics.split_for_impl();

        quote! {
            impl #impl_generics #krate::ObservableSettings for #ident #ty_generics #where_clause {
                fn settings_context(&self) -> &#krate::SettingsContext {
                    &self.#context
                }

                fn setting_properties(&self) -> &'static [#krate::SettingProperty] {
                    const PROPERTIES: &[#krate::SettingProperty] = &[#(#rows),*];
                    PROPERTIES
                }
            }
        }
    }

    fn notify_impl(&self, target: &EnclosingType, context: &Ident) -> TokenStream {
        let krate = &self.krate;
        let ident = &target.ident;
        let (impl_generics, ty_generics, where_clause) = target.generics.split_for_impl();

        quote! {
            impl #impl_generics #krate::NotifyPropertyChanged for #ident #ty_generics #where_clause {
                fn property_changed(&self) -> &#krate::Event<#krate::PropertyChangedEventArgs> {
                    self.#context.property_changed()
                }
            }
        }
    }

    fn property_row(&self, record: &FieldDeclaration) -> TokenStream {
        let krate = &self.krate;
        let name = record.property_name();
        let key = record.storage_key();
        let strategy = format_ident!("{}", record.strategy().variant_name());
        let nullable = record.declared_type.is_nullable();
        let raises_event = record.raise_event;

        quote! {
            #krate::SettingProperty {
                name: #name,
                key: #key,
                strategy: #krate::StorageStrategy::#strategy,
                nullable: #nullable,
                raises_event: #raises_event,
            }
        }
    }

    fn property(&self, record: &FieldDeclaration, context: &Ident) -> syn::Result<TokenStream> {
        let krate = &self.krate;
        let span = record.field.span();
        let field = &record.field;

        let name = record.property_name();
        if name.is_empty() {
            return Err(syn::Error::new(
                span,
                format!("`{field}` has no name left once leading underscores are removed"),
            ));
        }

        let accessor = naming::accessor_name(field);
        let getter = naming::getter_ident(&accessor, span)?;
        let setter = naming::setter_ident(&accessor, span);
        let event = naming::event_ident(&accessor, span);

        let key = record.storage_key();
        let ty = record.declared_type.declared();
        let (read, write, unchanged) =
            accessors(record.strategy(), record.declared_type.is_nullable());

        let getter_doc = record.documentation.clone().unwrap_or_else(|| {
            format!(" Returns the `{name}` setting, or the field value if it is not stored.")
        });
        let setter_doc = format!(" Sets the `{name}` setting and raises change notifications.");
        let event_doc = format!(" Returns the event raised after `{name}` changes.");

        let typed_event = if record.raise_event {
            quote! {
                #[doc = #event_doc]
                pub fn #event(&self) -> ::std::sync::Arc<#krate::Event<#krate::SettingValueChanged<#ty>>> {
                    self.#context.value_changed::<#ty>(#name)
                }
            }
        } else {
            TokenStream::new()
        };

        let raise_typed = if record.raise_event {
            quote! {
                self.#event().raise(&#krate::SettingValueChanged::new(old, value));
            }
        } else {
            TokenStream::new()
        };

        Ok(quote! {
            #[doc = #getter_doc]
            pub fn #getter(&self) -> #ty {
                #krate::access::#read(self.#context.store(), #key, &self.#field)
            }

            #[doc = #setter_doc]
            pub fn #setter(&self, value: #ty) {
                let old = self.#getter();
                if #krate::access::#unchanged(&old, &value) {
                    return;
                }
                #krate::access::#write(self.#context.store(), #key, &value);
                #krate::NotifyPropertyChanged::property_changed(self)
                    .raise(&#krate::PropertyChangedEventArgs::new(#name));
                #raise_typed
            }

            #typed_event
        })
    }
}

/// Returns the `(read, write, unchanged)` access helpers for a strategy.
fn accessors(strategy: StorageStrategy, nullable: bool) -> (Ident, Ident, Ident) {
    let (read, write, unchanged) = match (strategy, nullable) {
        (StorageStrategy::Native, false) => ("get_native", "set_native", "native_unchanged"),
        (StorageStrategy::Native, true) => (
            "get_native_nullable",
            "set_native_nullable",
            "native_nullable_unchanged",
        ),
        (StorageStrategy::Json, false) => ("get_json", "set_json", "json_unchanged"),
        (StorageStrategy::Json, true) => ("get_json_nullable", "set_json", "json_unchanged"),
    };
    (
        Ident::new(read, Span::call_site()),
        Ident::new(write, Span::call_site()),
        Ident::new(unchanged, Span::call_site()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TypeDescriptor, TypeIdentity};
    use syn::{Generics, Type, parse_quote};

    fn target(container: Container, context: Option<&str>) -> EnclosingType {
        EnclosingType {
            identity: TypeIdentity::new(["app"], "Audio"),
            ident: format_ident!("Audio"),
            generics: Generics::default(),
            capabilities: Vec::new(),
            container,
            context_field: context.map(|name| format_ident!("{}", name)),
        }
    }

    fn record(field: &str, ty: Type) -> FieldDeclaration {
        FieldDeclaration {
            field: format_ident!("{}", field),
            declared_type: TypeDescriptor::resolve(&ty).unwrap(),
            enclosing: TypeIdentity::new(["app"], "Audio"),
            documentation: None,
            override_key: None,
            raise_event: true,
            strategy_override: None,
        }
    }

    fn emit(target: &EnclosingType, records: &[FieldDeclaration]) -> syn::Result<Option<String>> {
        Emitter::new(quote!(rt))
            .emit(target, records)
            .map(|tokens| tokens.map(|tokens| tokens.to_string()))
    }

    #[test]
    fn nested_types_are_not_emitted() {
        let out = emit(&target(Container::Nested, Some("ctx")), &[record("_a", parse_quote!(i32))]);
        assert!(out.unwrap().is_none());
    }

    #[test]
    fn missing_context_is_an_error() {
        let err = emit(&target(Container::Module, None), &[]).unwrap_err();
        assert!(err.to_string().contains("SettingsContext"));
    }

    #[test]
    fn empty_property_name_is_an_error() {
        let err = emit(
            &target(Container::Module, Some("ctx")),
            &[record("__", parse_quote!(i32)), record("___", parse_quote!(i32))],
        )
        .unwrap_err();
        assert_eq!(err.into_iter().count(), 2);
    }

    #[test]
    fn notify_impl_depends_on_capabilities() {
        let plain = emit(&target(Container::Module, Some("ctx")), &[]).unwrap().unwrap();
        assert!(plain.contains("rt :: NotifyPropertyChanged for Audio"));
        assert!(plain.contains("rt :: ObservableSettings for Audio"));

        let mut declared = target(Container::Module, Some("ctx"));
        declared.add_capability(parse_quote!(NotifyPropertyChanged));
        let out = emit(&declared, &[]).unwrap().unwrap();
        assert!(!out.contains("NotifyPropertyChanged for Audio"));
        assert!(out.contains("rt :: ObservableSettings for Audio"));
    }

    #[test]
    fn accessor_helpers_follow_strategy() {
        let native = record("_volume", parse_quote!(f64));
        let nullable = record("_count", parse_quote!(Option<u32>));
        let json = record("_recent", parse_quote!(Vec<String>));
        let json_nullable = record("_window", parse_quote!(Option<Vec<u8>>));

        let out = emit(
            &target(Container::Module, Some("ctx")),
            &[native, nullable, json, json_nullable],
        )
        .unwrap()
        .unwrap();

        for expected in [
            "access :: get_native (self . ctx . store () , \"Volume\" , & self . _volume)",
            "access :: set_native (self . ctx . store () , \"Volume\" , & value)",
            "access :: get_native_nullable (self . ctx . store () , \"Count\"",
            "access :: set_native_nullable (self . ctx . store () , \"Count\"",
            "access :: get_json (self . ctx . store () , \"Recent\"",
            "access :: set_json (self . ctx . store () , \"Recent\"",
            "access :: get_json_nullable (self . ctx . store () , \"Window\"",
            "access :: set_json (self . ctx . store () , \"Window\"",
            "access :: native_unchanged (& old , & value)",
            "access :: native_nullable_unchanged (& old , & value)",
            "access :: json_unchanged (& old , & value)",
        ] {
            assert!(out.contains(expected), "missing `{expected}` in {out}");
        }
    }

    #[test]
    fn strategy_override_selects_helpers() {
        let mut point = record("_home", parse_quote!(observable_settings::Point));
        point.strategy_override = Some(StorageStrategy::Json);
        let mut forced = record("_anchor", parse_quote!(Point));
        forced.strategy_override = Some(StorageStrategy::Native);

        let out = emit(&target(Container::Module, Some("ctx")), &[point, forced])
            .unwrap()
            .unwrap();
        assert!(out.contains("access :: get_json (self . ctx . store () , \"Home\""));
        assert!(out.contains("access :: get_native (self . ctx . store () , \"Anchor\""));
    }

    #[test]
    fn override_key_and_event_switch() {
        let mut keyed = record("_theme", parse_quote!(String));
        keyed.override_key = Some("ui.theme".to_string());
        keyed.raise_event = false;

        let out = emit(&target(Container::Module, Some("ctx")), &[keyed])
            .unwrap()
            .unwrap();

        assert!(out.contains("\"ui.theme\""));
        assert!(out.contains("PropertyChangedEventArgs :: new (\"Theme\")"));
        assert!(out.contains("fn set_theme"));
        assert!(!out.contains("theme_changed"));
        assert!(out.contains("raises_event : false"));
        assert!(out.contains("StorageStrategy :: Native"));
    }

    #[test]
    fn keyword_getter_is_raw() {
        let out = emit(
            &target(Container::Module, Some("ctx")),
            &[record("_type", parse_quote!(String))],
        )
        .unwrap()
        .unwrap();
        assert!(out.contains("fn r#type"));
        assert!(out.contains("fn set_type"));
        assert!(out.contains("fn type_changed"));
    }

    #[test]
    fn documentation_is_carried_over() {
        let mut documented = record("_volume", parse_quote!(f64));
        documented.documentation = Some(" Output volume.".to_string());

        let out = emit(&target(Container::Module, Some("ctx")), &[documented])
            .unwrap()
            .unwrap();
        assert!(out.contains("\" Output volume.\""));
    }
}
