//! Naming and text rendering of generated units.

use crate::model::TypeIdentity;
use proc_macro2::TokenStream;

/// Suffix appended to the dotted type name to form a unit's file name.
pub const GENERATED_SUFFIX: &str = "_observable_settings.g.rs";

/// Returns the file name of the unit generated for `identity`.
///
/// ```
/// use observable_settings_codegen::TypeIdentity;
/// use observable_settings_codegen::render::file_name;
///
/// let identity = TypeIdentity::new(["app", "settings"], "Audio");
/// assert_eq!(file_name(&identity), "app.settings.Audio_observable_settings.g.rs");
/// ```
pub fn file_name(identity: &TypeIdentity) -> String {
    format!("{}{GENERATED_SUFFIX}", identity.dotted_name())
}

/// Renders a unit as source text: a header comment, then the tokens.
pub fn render_text(identity: &TypeIdentity, tokens: &TokenStream) -> String {
    format!(
        "// @generated by settings-gen for `{}`. Do not edit.\n\n{}\n",
        identity.qualified_name(),
        tokens
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    #[test]
    fn root_types_have_no_module_prefix() {
        let identity = TypeIdentity::new(Vec::<String>::new(), "Audio");
        assert_eq!(file_name(&identity), "Audio_observable_settings.g.rs");
    }

    #[test]
    fn text_starts_with_header() {
        let identity = TypeIdentity::new(["app"], "Audio");
        let text = render_text(&identity, &quote!(struct Marker;));
        assert!(text.starts_with("// @generated by settings-gen for `app::Audio`."));
        assert!(text.contains("struct Marker ;"));
        assert!(text.ends_with('\n'));
    }
}
