use super::*;

use crate::{Attributes, Condition};

/// Writes applied all together or not at all.
#[derive(Debug, Clone)]
pub struct TransactWrite {
    pub items: Vec<TransactItem>,
}

#[derive(Debug, Clone)]
pub enum TransactItem {
    Put(Put),
    Delete(Delete),
    Update(Update),
    ConditionCheck(ConditionCheck),
}

/// A guard that mutates nothing but cancels the transaction when its
/// condition does not hold.
#[derive(Debug, Clone)]
pub struct ConditionCheck {
    pub table: String,

    /// Primary key attributes of the item
    pub key: Attributes,

    pub condition: Condition,
}

impl TransactItem {
    pub fn table(&self) -> &str {
        match self {
            TransactItem::Put(put) => &put.table,
            TransactItem::Delete(delete) => &delete.table,
            TransactItem::Update(update) => &update.table,
            TransactItem::ConditionCheck(check) => &check.table,
        }
    }
}

impl From<TransactWrite> for Operation {
    fn from(value: TransactWrite) -> Self {
        Self::TransactWrite(value)
    }
}
