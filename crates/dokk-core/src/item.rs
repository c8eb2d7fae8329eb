use crate::keys::{is_valid_entity_name, DELIMITER};
use crate::{Attributes, Value};

/// An item returned by a read.
///
/// Entity prefixes are stripped from every top-level string attribute that
/// looks like an encoded key, so `PK = "USER#alice"` reads back as `"alice"`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Item {
    attributes: Attributes,
}

impl Item {
    /// Wraps already normalised attributes.
    pub fn new(attributes: Attributes) -> Item {
        Item { attributes }
    }

    /// Builds an item from attributes as stored, stripping entity prefixes.
    pub fn from_raw(mut attributes: Attributes) -> Item {
        for value in attributes.values_mut() {
            if let Value::String(raw) = value {
                if let Some(stripped) = strip_entity_prefix(raw) {
                    *raw = stripped.to_string();
                }
            }
        }

        Item { attributes }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Returns the attribute as a string, if it is one.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn into_attributes(self) -> Attributes {
        self.attributes
    }
}

impl core::ops::Index<&str> for Item {
    type Output = Value;

    #[track_caller]
    fn index(&self, name: &str) -> &Value {
        match self.attributes.get(name) {
            Some(value) => value,
            None => panic!("no attribute named `{name}`"),
        }
    }
}

impl IntoIterator for Item {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.into_iter()
    }
}

/// Returns the value part of `ENTITY#value`, if `raw` has that shape.
fn strip_entity_prefix(raw: &str) -> Option<&str> {
    let (entity, value) = raw.split_once(DELIMITER)?;

    if is_valid_entity_name(entity) && !value.is_empty() {
        Some(value)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn strips_entity_prefixes() {
        let item = Item::from_raw(attributes! {
            "PK" => "GROUP#group1",
            "SK" => "USER#alice",
            "Email" => "ORDER#7#a",
            "Name" => "Alice",
            "Note" => "lower#x",
            "Prefix" => "USER#",
            "Age" => 34,
        });

        assert_eq!(item.get_str("PK"), Some("group1"));
        assert_eq!(item.get_str("SK"), Some("alice"));
        assert_eq!(item.get_str("Email"), Some("7#a"));
        assert_eq!(item.get_str("Name"), Some("Alice"));
        assert_eq!(item.get_str("Note"), Some("lower#x"));
        assert_eq!(item.get_str("Prefix"), Some("USER#"));
        assert_eq!(item["Age"], Value::I64(34));
    }

    #[test]
    fn nested_values_are_left_alone() {
        let nested = attributes! { "Ref" => "USER#bob" };
        let item = Item::from_raw(attributes! { "Map" => nested.clone() });
        assert_eq!(item["Map"], Value::Map(nested));
    }
}
