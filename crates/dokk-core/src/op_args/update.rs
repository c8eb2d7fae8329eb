use super::OpContext;
use crate::driver::operation;
use crate::{timestamp, Attributes, Condition, PartitionKey, PrimaryKey, SortKey, Value};

/// Sets attributes of one item, creating the item if it does not exist.
///
/// `UpdatedAt` is set to the current time when timestamps are enabled.
#[derive(Debug, Clone)]
pub struct UpdateArg {
    key: PrimaryKey,
    set: Attributes,
    condition: Option<Condition>,
}

impl UpdateArg {
    pub fn new(partition_key: &PartitionKey, sort_key: &SortKey) -> UpdateArg {
        UpdateArg {
            key: PrimaryKey::new(partition_key, sort_key),
            set: Attributes::new(),
            condition: None,
        }
    }

    pub fn attributes(mut self, attributes: Attributes) -> UpdateArg {
        self.set.extend(attributes);
        self
    }

    pub fn set(mut self, name: impl Into<String>, value: impl Into<Value>) -> UpdateArg {
        self.set.insert(name.into(), value.into());
        self
    }

    /// Only update when `condition` holds for the current item.
    pub fn condition(mut self, condition: Condition) -> UpdateArg {
        self.condition = Some(condition);
        self
    }

    pub fn key(&self) -> &PrimaryKey {
        &self.key
    }

    pub fn to_operation(&self, cx: &OpContext<'_>) -> operation::Update {
        let index = cx.primary_index;

        // Key attributes can't be updated; the key always wins.
        let mut set: Attributes = self
            .set
            .iter()
            .filter(|(name, _)| *name != index.partition_attr() && *name != index.sort_attr())
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();

        if cx.timestamps {
            set.insert(timestamp::UPDATED_AT.to_string(), timestamp::now().into());
        }

        operation::Update {
            table: cx.table.to_string(),
            key: self.key.serialize(index),
            set,
            condition: self.condition.clone(),
        }
    }
}
