/// Builds an [`Attributes`](crate::Attributes) map from `name => value` pairs.
///
/// ```
/// let attrs = dokk_core::attributes! {
///     "Name" => "Alice",
///     "Age" => 34,
/// };
/// assert_eq!(attrs.len(), 2);
/// ```
#[macro_export]
macro_rules! attributes {
    () => {
        $crate::Attributes::new()
    };
    ( $( $name:expr => $value:expr ),+ $(,)? ) => {{
        let mut attributes = $crate::Attributes::new();
        $(
            attributes.insert(::std::string::String::from($name), $crate::Value::from($value));
        )+
        attributes
    }};
}
