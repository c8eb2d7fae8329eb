use super::{EntityKey, EntityName, KeyPart, PrefixSortKey};
use crate::{Error, Result};

/// Exact-match key for the sort attribute of an index.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SortKey(KeyPart);

impl SortKey {
    pub fn new<E: EntityName>(_entity: E, value: impl Into<String>) -> Result<SortKey> {
        KeyPart::new::<E>(value).map(SortKey)
    }

    /// Parses an encoded sort key such as `USER#alice`.
    pub fn parse(raw: &str) -> Result<SortKey> {
        SortKey::try_from(KeyPart::decode(raw)?)
    }

    pub fn value(&self) -> &str {
        self.0.value().unwrap_or_default()
    }

    /// Returns `true` if this key falls under `prefix` in a `begins_with`
    /// scan.
    pub fn has_prefix(&self, prefix: &PrefixSortKey) -> bool {
        self.0.entity() == prefix.entity()
    }
}

impl TryFrom<KeyPart> for SortKey {
    type Error = Error;

    fn try_from(part: KeyPart) -> Result<SortKey> {
        if part.is_prefix() {
            return Err(Error::validation_empty_value(part.entity()));
        }
        Ok(SortKey(part))
    }
}

impl EntityKey for SortKey {
    fn key_part(&self) -> &KeyPart {
        &self.0
    }
}

impl core::fmt::Display for SortKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl core::fmt::Debug for SortKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "SortKey({})", self.0.redacted())
    }
}
