use super::{OpContext, PutArg};
use crate::driver::operation;
use crate::{Attributes, PartitionKey, PrimaryKey, SortKey, Value};

/// Writes a new item. Fails with a conflict if the key already exists.
#[derive(Debug, Clone)]
pub struct InsertArg(PutArg);

impl InsertArg {
    pub fn new(partition_key: &PartitionKey, sort_key: &SortKey) -> InsertArg {
        InsertArg(PutArg::new(partition_key, sort_key).allow_overwrite(false))
    }

    pub fn attributes(self, attributes: Attributes) -> InsertArg {
        InsertArg(self.0.attributes(attributes))
    }

    pub fn set(self, name: impl Into<String>, value: impl Into<Value>) -> InsertArg {
        InsertArg(self.0.set(name, value))
    }

    pub fn key(&self) -> &PrimaryKey {
        self.0.key()
    }

    pub fn to_operation(&self, cx: &OpContext<'_>) -> operation::Put {
        self.0.to_operation(cx)
    }
}

impl From<InsertArg> for PutArg {
    fn from(value: InsertArg) -> Self {
        value.0
    }
}
