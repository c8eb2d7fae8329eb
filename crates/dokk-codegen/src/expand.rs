use crate::entity::Entity;

use proc_macro2::TokenStream;
use quote::quote;

pub(crate) fn entity_name(entity: &Entity) -> TokenStream {
    let ident = &entity.ident;
    let name = &entity.name;
    let (impl_generics, ty_generics, where_clause) = entity.generics.split_for_impl();

    quote! {
        const _: () = {
            use dokk as _dokk;

            impl #impl_generics _dokk::EntityName for #ident #ty_generics #where_clause {
                const NAME: &'static str = #name;
            }
        };
    }
}
