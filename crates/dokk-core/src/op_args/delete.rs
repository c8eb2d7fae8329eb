use super::OpContext;
use crate::driver::operation;
use crate::{Condition, PartitionKey, PrimaryKey, SortKey};

/// Deletes one item.
///
/// Deletes are idempotent by default: deleting a missing item succeeds.
#[derive(Debug, Clone)]
pub struct DeleteArg {
    key: PrimaryKey,
    condition: Option<Condition>,
    idempotent: bool,
}

impl DeleteArg {
    pub fn new(partition_key: &PartitionKey, sort_key: &SortKey) -> DeleteArg {
        DeleteArg {
            key: PrimaryKey::new(partition_key, sort_key),
            condition: None,
            idempotent: true,
        }
    }

    /// Only delete when `condition` holds for the current item.
    pub fn condition(mut self, condition: Condition) -> DeleteArg {
        self.condition = Some(condition);
        self
    }

    /// When false, deleting a missing item fails with a conflict.
    pub fn idempotent(mut self, idempotent: bool) -> DeleteArg {
        self.idempotent = idempotent;
        self
    }

    pub fn key(&self) -> &PrimaryKey {
        &self.key
    }

    pub fn to_operation(&self, cx: &OpContext<'_>) -> operation::Delete {
        let exists = (!self.idempotent)
            .then(|| Condition::attribute_exists(cx.primary_index.partition_attr()));

        let condition = match (exists, self.condition.clone()) {
            (Some(exists), Some(condition)) => Some(exists.and(condition)),
            (exists, condition) => exists.or(condition),
        };

        operation::Delete {
            table: cx.table.to_string(),
            key: self.key.serialize(cx.primary_index),
            condition,
        }
    }
}
