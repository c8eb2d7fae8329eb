use super::OpContext;
use crate::driver::operation;
use crate::{Condition, PartitionKey, PrimaryKey, SortKey};

/// A transaction entry that writes nothing and cancels the transaction when
/// `condition` does not hold for the item.
#[derive(Debug, Clone)]
pub struct ConditionArg {
    key: PrimaryKey,
    condition: Condition,
}

impl ConditionArg {
    pub fn new(partition_key: &PartitionKey, sort_key: &SortKey, condition: Condition) -> Self {
        ConditionArg {
            key: PrimaryKey::new(partition_key, sort_key),
            condition,
        }
    }

    pub fn key(&self) -> &PrimaryKey {
        &self.key
    }

    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    pub fn to_operation(&self, cx: &OpContext<'_>) -> operation::ConditionCheck {
        operation::ConditionCheck {
            table: cx.table.to_string(),
            key: self.key.serialize(cx.primary_index),
            condition: self.condition.clone(),
        }
    }
}
