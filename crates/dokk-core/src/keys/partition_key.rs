use super::{EntityKey, EntityName, KeyPart};
use crate::{Error, Result};

/// Exact-match key for the partition attribute of an index.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PartitionKey(KeyPart);

impl PartitionKey {
    /// ```
    /// # use dokk_core::{EntityName, PartitionKey};
    /// # struct Group;
    /// # impl EntityName for Group { const NAME: &'static str = "GROUP"; }
    /// let pk = PartitionKey::new(Group, "group1").unwrap();
    /// assert_eq!(pk.to_string(), "GROUP#group1");
    /// ```
    pub fn new<E: EntityName>(_entity: E, value: impl Into<String>) -> Result<PartitionKey> {
        KeyPart::new::<E>(value).map(PartitionKey)
    }

    /// Parses an encoded partition key such as `GROUP#group1`.
    pub fn parse(raw: &str) -> Result<PartitionKey> {
        PartitionKey::try_from(KeyPart::decode(raw)?)
    }

    pub fn value(&self) -> &str {
        self.0.value().unwrap_or_default()
    }
}

impl TryFrom<KeyPart> for PartitionKey {
    type Error = Error;

    fn try_from(part: KeyPart) -> Result<PartitionKey> {
        if part.is_prefix() {
            return Err(Error::validation_empty_value(part.entity()));
        }
        Ok(PartitionKey(part))
    }
}

impl EntityKey for PartitionKey {
    fn key_part(&self) -> &KeyPart {
        &self.0
    }
}

impl core::fmt::Display for PartitionKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl core::fmt::Debug for PartitionKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "PartitionKey({})", self.0.redacted())
    }
}
