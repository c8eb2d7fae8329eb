use super::{is_valid_entity_name, EntityName};
use crate::{Error, Result};
use std::borrow::Cow;

/// Separates the entity token from the value in an encoded key.
pub const DELIMITER: char = '#';

/// One `(entity, value)` pair of a key attribute.
///
/// A part without a value is a prefix and encodes to `{ENTITY}#`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyPart {
    entity: Cow<'static, str>,
    value: Option<String>,
}

impl KeyPart {
    /// Creates a part for entity `E`.
    ///
    /// Fails if the value is empty or contains the delimiter.
    pub fn new<E: EntityName>(value: impl Into<String>) -> Result<KeyPart> {
        check_entity(E::NAME)?;
        let value = value.into();
        check_value(E::NAME, &value)?;

        Ok(KeyPart {
            entity: Cow::Borrowed(E::NAME),
            value: Some(value),
        })
    }

    /// Creates a value-less part for entity `E`.
    pub fn prefix<E: EntityName>() -> KeyPart {
        KeyPart {
            entity: Cow::Borrowed(E::NAME),
            value: None,
        }
    }

    /// Encodes an `(entity, value)` pair to its attribute string.
    pub fn encode(entity: &str, value: &str) -> Result<String> {
        check_entity(entity)?;
        check_value(entity, value)?;
        Ok(format!("{entity}{DELIMITER}{value}"))
    }

    /// Decodes a raw attribute string.
    ///
    /// The string is split on the first delimiter. `USER#` decodes to a prefix
    /// part. The value is never included in error messages.
    pub fn decode(raw: &str) -> Result<KeyPart> {
        let Some((entity, value)) = raw.split_once(DELIMITER) else {
            return Err(Error::validation_malformed_key(
                "missing `#` delimiter between entity and value",
            ));
        };

        check_entity(entity)?;

        let value = if value.is_empty() {
            None
        } else {
            check_value(entity, value)?;
            Some(value.to_string())
        };

        Ok(KeyPart {
            entity: Cow::Owned(entity.to_string()),
            value,
        })
    }

    /// Decodes a raw attribute string, requiring the entity token of `E`.
    pub fn decode_as<E: EntityName>(raw: &str) -> Result<KeyPart> {
        let part = KeyPart::decode(raw)?;

        if part.entity != E::NAME {
            return Err(Error::validation_entity_mismatch(E::NAME, &part.entity));
        }

        Ok(KeyPart {
            entity: Cow::Borrowed(E::NAME),
            value: part.value,
        })
    }

    pub(super) fn from_registered(entity: &'static str, value: Option<String>) -> KeyPart {
        KeyPart {
            entity: Cow::Borrowed(entity),
            value,
        }
    }

    pub fn entity(&self) -> &str {
        &self.entity
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn is_prefix(&self) -> bool {
        self.value.is_none()
    }

    /// Returns `true` if this part belongs to entity `E`.
    pub fn is<E: EntityName>(&self) -> bool {
        self.entity == E::NAME
    }

    /// A display adapter that shows the entity token but hides the value.
    pub fn redacted(&self) -> Redacted<'_> {
        Redacted(self)
    }
}

impl core::fmt::Display for KeyPart {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}{DELIMITER}", self.entity)?;
        if let Some(value) = &self.value {
            f.write_str(value)?;
        }
        Ok(())
    }
}

impl core::fmt::Debug for KeyPart {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "KeyPart({})", self.redacted())
    }
}

/// Formats a [`KeyPart`] as `USER#…`, so keys can be logged without exposing
/// their values.
pub struct Redacted<'a>(&'a KeyPart);

impl core::fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}{DELIMITER}", self.0.entity)?;
        if self.0.value.is_some() {
            f.write_str("…")?;
        }
        Ok(())
    }
}

fn check_entity(entity: &str) -> Result<()> {
    if is_valid_entity_name(entity) {
        Ok(())
    } else {
        Err(Error::validation_invalid_entity_name(entity))
    }
}

fn check_value(entity: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::validation_empty_value(entity));
    }

    if value.contains(DELIMITER) {
        return Err(Error::validation_delimiter_in_value(entity));
    }

    Ok(())
}
