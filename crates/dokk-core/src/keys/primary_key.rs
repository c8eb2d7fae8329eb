use super::{EntityKey, PartitionKey, SortKey};
use crate::{Attributes, Index, Result, Value};

/// The `(partition, sort)` pair that identifies one item in the table.
///
/// Equality and hashing are by the encoded pair.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PrimaryKey {
    partition_key: PartitionKey,
    sort_key: SortKey,
}

impl PrimaryKey {
    pub fn new(partition_key: &PartitionKey, sort_key: &SortKey) -> PrimaryKey {
        PrimaryKey {
            partition_key: partition_key.clone(),
            sort_key: sort_key.clone(),
        }
    }

    /// Reads the key attributes of `index` from a raw item.
    pub fn from_attributes(index: &Index, attributes: &Attributes) -> Result<PrimaryKey> {
        let attr = |name: &str| {
            attributes
                .get(name)
                .and_then(Value::as_str)
                .ok_or_else(|| crate::Error::validation_malformed_key("missing key attribute"))
        };

        Ok(PrimaryKey {
            partition_key: PartitionKey::parse(attr(index.partition_attr())?)?,
            sort_key: SortKey::parse(attr(index.sort_attr())?)?,
        })
    }

    pub fn partition_key(&self) -> &PartitionKey {
        &self.partition_key
    }

    pub fn sort_key(&self) -> &SortKey {
        &self.sort_key
    }

    /// Encodes the key as the attribute map of `index`.
    pub fn serialize(&self, index: &Index) -> Attributes {
        let mut attributes = Attributes::with_capacity(2);
        attributes.insert(
            index.partition_attr().to_string(),
            Value::String(self.partition_key.encode()),
        );
        attributes.insert(
            index.sort_attr().to_string(),
            Value::String(self.sort_key.encode()),
        );
        attributes
    }
}

impl core::fmt::Debug for PrimaryKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "PrimaryKey({}, {})",
            self.partition_key.key_part().redacted(),
            self.sort_key.key_part().redacted()
        )
    }
}

/// Formats as `(USER#…, USER#…)`.
pub(crate) struct RedactedPrimaryKey<'a>(pub(crate) &'a PrimaryKey);

impl core::fmt::Display for RedactedPrimaryKey<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "({}, {})",
            self.0.partition_key.key_part().redacted(),
            self.0.sort_key.key_part().redacted()
        )
    }
}
