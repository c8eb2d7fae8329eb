use super::{ConditionArg, DeleteArg, InsertArg, OpContext, PutArg, UpdateArg};
use crate::driver::operation::TransactItem;
use crate::PrimaryKey;

/// One entry of a transactional write.
#[derive(Debug, Clone)]
pub enum WriteArg {
    Insert(InsertArg),
    Put(PutArg),
    Delete(DeleteArg),
    Update(UpdateArg),
    Condition(ConditionArg),
}

impl WriteArg {
    pub fn primary_key(&self) -> &PrimaryKey {
        match self {
            WriteArg::Insert(arg) => arg.key(),
            WriteArg::Put(arg) => arg.key(),
            WriteArg::Delete(arg) => arg.key(),
            WriteArg::Update(arg) => arg.key(),
            WriteArg::Condition(arg) => arg.key(),
        }
    }

    /// Operation name, for logs.
    pub fn name(&self) -> &'static str {
        match self {
            WriteArg::Insert(_) => "insert",
            WriteArg::Put(_) => "put",
            WriteArg::Delete(_) => "delete",
            WriteArg::Update(_) => "update",
            WriteArg::Condition(_) => "condition",
        }
    }

    pub fn to_transact_item(&self, cx: &OpContext<'_>) -> TransactItem {
        match self {
            WriteArg::Insert(arg) => TransactItem::Put(arg.to_operation(cx)),
            WriteArg::Put(arg) => TransactItem::Put(arg.to_operation(cx)),
            WriteArg::Delete(arg) => TransactItem::Delete(arg.to_operation(cx)),
            WriteArg::Update(arg) => TransactItem::Update(arg.to_operation(cx)),
            WriteArg::Condition(arg) => TransactItem::ConditionCheck(arg.to_operation(cx)),
        }
    }
}

impl From<InsertArg> for WriteArg {
    fn from(value: InsertArg) -> Self {
        WriteArg::Insert(value)
    }
}

impl From<PutArg> for WriteArg {
    fn from(value: PutArg) -> Self {
        WriteArg::Put(value)
    }
}

impl From<DeleteArg> for WriteArg {
    fn from(value: DeleteArg) -> Self {
        WriteArg::Delete(value)
    }
}

impl From<UpdateArg> for WriteArg {
    fn from(value: UpdateArg) -> Self {
        WriteArg::Update(value)
    }
}

impl From<ConditionArg> for WriteArg {
    fn from(value: ConditionArg) -> Self {
        WriteArg::Condition(value)
    }
}
