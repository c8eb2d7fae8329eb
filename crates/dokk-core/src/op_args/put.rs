use super::OpContext;
use crate::driver::operation;
use crate::{timestamp, Attributes, Condition, PartitionKey, PrimaryKey, SortKey, Value};

/// Writes a whole item, replacing any existing item with the same key.
///
/// `CreatedAt` is set to the current time when timestamps are enabled. Key
/// attributes always win over caller attributes of the same name.
#[derive(Debug, Clone)]
pub struct PutArg {
    key: PrimaryKey,
    attributes: Attributes,
    allow_overwrite: bool,
}

impl PutArg {
    pub fn new(partition_key: &PartitionKey, sort_key: &SortKey) -> PutArg {
        PutArg {
            key: PrimaryKey::new(partition_key, sort_key),
            attributes: Attributes::new(),
            allow_overwrite: true,
        }
    }

    pub fn attributes(mut self, attributes: Attributes) -> PutArg {
        self.attributes = attributes;
        self
    }

    pub fn set(mut self, name: impl Into<String>, value: impl Into<Value>) -> PutArg {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// When false, the put fails with a conflict if the key already exists.
    pub fn allow_overwrite(mut self, allow_overwrite: bool) -> PutArg {
        self.allow_overwrite = allow_overwrite;
        self
    }

    pub fn key(&self) -> &PrimaryKey {
        &self.key
    }

    pub fn to_operation(&self, cx: &OpContext<'_>) -> operation::Put {
        let mut item = self.attributes.clone();

        if cx.timestamps {
            item.insert(timestamp::CREATED_AT.to_string(), timestamp::now().into());
        }

        item.extend(self.key.serialize(cx.primary_index));

        let condition = if self.allow_overwrite {
            None
        } else {
            // Checked against the item with the same primary key, so the
            // partition attribute alone is enough.
            Some(Condition::attribute_not_exists(
                cx.primary_index.partition_attr(),
            ))
        };

        operation::Put {
            table: cx.table.to_string(),
            item,
            condition,
        }
    }
}
