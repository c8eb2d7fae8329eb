//! Typed composite keys.
//!
//! Every key attribute is encoded as `{ENTITY}#{value}`, where `ENTITY` is the
//! token of an [`EntityName`]. A key built from an entity alone encodes to
//! `{ENTITY}#` and is only usable as a prefix for `begins_with` range scans.

mod entity_name;
pub use entity_name::{is_valid_entity_name, EntityName};

mod key_part;
pub use key_part::{KeyPart, Redacted, DELIMITER};

mod partition_key;
pub use partition_key::PartitionKey;

mod prefix_sort_key;
pub use prefix_sort_key::PrefixSortKey;

pub(crate) mod primary_key;
pub use primary_key::PrimaryKey;

mod registry;
pub use registry::EntityRegistry;

mod sort_key;
pub use sort_key::SortKey;

/// A value that encodes to a single key attribute.
pub trait EntityKey {
    fn key_part(&self) -> &KeyPart;

    /// Token of the entity this key belongs to.
    fn entity(&self) -> &str {
        self.key_part().entity()
    }

    /// The encoded attribute value, e.g. `USER#alice`.
    fn encode(&self) -> String {
        self.key_part().to_string()
    }
}
