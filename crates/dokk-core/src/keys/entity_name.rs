/// Marker for a kind of entity stored in the table.
///
/// `NAME` is the token used as key prefix and must match `[A-Z0-9_]+`. It is
/// normally set with `#[derive(EntityName)]`, which upper-cases the type name:
///
/// ```
/// # use dokk_core::EntityName;
/// struct User;
///
/// impl EntityName for User {
///     const NAME: &'static str = "USER";
/// }
/// ```
pub trait EntityName: 'static {
    const NAME: &'static str;
}

/// Returns `true` if `name` is usable as an entity token.
pub fn is_valid_entity_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'_')
}
