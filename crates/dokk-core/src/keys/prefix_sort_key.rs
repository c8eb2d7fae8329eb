use super::{EntityKey, EntityName, KeyPart};
use crate::{Error, Result};

/// Matches every sort key of one entity in a `begins_with` range scan.
///
/// Encodes to `{ENTITY}#` and is never used as an exact-match key.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PrefixSortKey(KeyPart);

impl PrefixSortKey {
    pub fn new<E: EntityName>(_entity: E) -> PrefixSortKey {
        PrefixSortKey(KeyPart::prefix::<E>())
    }

    /// Parses an encoded prefix. Only `TOKEN#` is accepted.
    pub fn parse(raw: &str) -> Result<PrefixSortKey> {
        PrefixSortKey::try_from(KeyPart::decode(raw)?)
    }
}

impl TryFrom<KeyPart> for PrefixSortKey {
    type Error = Error;

    fn try_from(part: KeyPart) -> Result<PrefixSortKey> {
        if !part.is_prefix() {
            return Err(Error::validation_prefix_with_value(part.entity()));
        }
        Ok(PrefixSortKey(part))
    }
}

impl EntityKey for PrefixSortKey {
    fn key_part(&self) -> &KeyPart {
        &self.0
    }
}

impl core::fmt::Display for PrefixSortKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl core::fmt::Debug for PrefixSortKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "PrefixSortKey({})", self.0)
    }
}
