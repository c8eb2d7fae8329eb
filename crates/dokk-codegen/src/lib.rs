mod entity;
mod expand;

use proc_macro2::TokenStream;

pub fn generate(input: TokenStream) -> syn::Result<TokenStream> {
    let item: syn::DeriveInput = syn::parse2(input)?;
    let entity = entity::Entity::from_ast(&item)?;

    Ok(expand::entity_name(&entity))
}
