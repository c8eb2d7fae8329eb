extern crate proc_macro;

use proc_macro::TokenStream;

/// Implements `dokk::EntityName` for a marker type.
///
/// The entity token defaults to the upper-cased type name. Override it with
/// `#[entity(name = "...")]`.
#[proc_macro_derive(EntityName, attributes(entity))]
pub fn derive_entity_name(input: TokenStream) -> TokenStream {
    match dokk_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
