/// A type deriving `EntityName`.
#[derive(Debug)]
pub(crate) struct Entity {
    pub(crate) ident: syn::Ident,

    pub(crate) generics: syn::Generics,

    /// The entity token, e.g. `USER`
    pub(crate) name: syn::LitStr,
}

impl Entity {
    pub(crate) fn from_ast(ast: &syn::DeriveInput) -> syn::Result<Entity> {
        let mut name = None;

        for attr in &ast.attrs {
            if !attr.path().is_ident("entity") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    if name.is_some() {
                        return Err(meta.error("duplicate `name` attribute"));
                    }

                    let lit: syn::LitStr = meta.value()?.parse()?;
                    if !is_valid_entity_name(&lit.value()) {
                        return Err(syn::Error::new_spanned(
                            &lit,
                            "entity names must match `[A-Z0-9_]+`",
                        ));
                    }

                    name = Some(lit);
                    Ok(())
                } else {
                    Err(meta.error("expected `name = \"ENTITY\"`"))
                }
            })?;
        }

        let name = match name {
            Some(name) => name,
            None => {
                let upper = ast.ident.to_string().to_uppercase();
                if !is_valid_entity_name(&upper) {
                    return Err(syn::Error::new_spanned(
                        &ast.ident,
                        "type name does not upper-case to a valid entity name; \
                         set one with #[entity(name = \"...\")]",
                    ));
                }
                syn::LitStr::new(&upper, ast.ident.span())
            }
        };

        Ok(Entity {
            ident: ast.ident.clone(),
            generics: ast.generics.clone(),
            name,
        })
    }
}

fn is_valid_entity_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(tokens: proc_macro2::TokenStream) -> syn::Result<Entity> {
        Entity::from_ast(&syn::parse2(tokens).unwrap())
    }

    #[test]
    fn upper_cases_type_name() {
        let entity = parse(quote::quote!(
            struct GroupMember;
        ))
        .unwrap();
        assert_eq!(entity.name.value(), "GROUPMEMBER");
    }

    #[test]
    fn name_override() {
        let entity = parse(quote::quote!(
            #[entity(name = "GROUP_MEMBER")]
            struct GroupMember;
        ))
        .unwrap();
        assert_eq!(entity.name.value(), "GROUP_MEMBER");
    }

    #[test]
    fn invalid_override() {
        let err = parse(quote::quote!(
            #[entity(name = "User")]
            struct User;
        ))
        .unwrap_err();
        assert_eq!(err.to_string(), "entity names must match `[A-Z0-9_]+`");
    }

    #[test]
    fn unknown_key() {
        assert!(parse(quote::quote!(
            #[entity(table = "users")]
            struct User;
        ))
        .is_err());
    }
}
