use super::update::apply_update;
use super::*;

use dokk_core::driver::operation::TransactItem;
use dokk_core::CancellationReason;

impl Store {
    /// Checks every entry against the current state first, then applies all
    /// of them. Nothing is written if any condition fails.
    pub(crate) fn transact_write(&mut self, op: operation::TransactWrite) -> Result<Response> {
        let mut keys = Vec::with_capacity(op.items.len());
        let mut reasons = Vec::with_capacity(op.items.len());

        for item in &op.items {
            let table = self.table(item.table())?;

            let (key_attrs, condition) = match item {
                TransactItem::Put(put) => (&put.item, put.condition.as_ref()),
                TransactItem::Delete(delete) => (&delete.key, delete.condition.as_ref()),
                TransactItem::Update(update) => (&update.key, update.condition.as_ref()),
                TransactItem::ConditionCheck(check) => (&check.key, Some(&check.condition)),
            };

            let key = table.key_of(key_attrs)?;

            if keys.iter().any(|(t, k)| *t == item.table() && *k == key) {
                return Err(MemoryError::validation(
                    "transaction request cannot include multiple operations on one item",
                ));
            }

            let failed = condition.is_some_and(|cond| !cond.eval(table.items.get(&key)));
            reasons.push(failed.then_some(CancellationReason::ConditionalCheckFailed));
            keys.push((item.table(), key));
        }

        if reasons.iter().any(Option::is_some) {
            return Err(Error::transaction_canceled(reasons));
        }

        let keys: Vec<ItemKey> = keys.into_iter().map(|(_, key)| key).collect();

        for (item, key) in op.items.into_iter().zip(keys) {
            let table = self.table_mut(item.table())?;

            match item {
                TransactItem::Put(put) => {
                    table.items.insert(key, put.item);
                }
                TransactItem::Delete(_) => {
                    table.items.remove(&key);
                }
                TransactItem::Update(update) => apply_update(table, key, update.key, update.set),
                TransactItem::ConditionCheck(_) => {}
            }
        }

        Ok(Response::Empty)
    }
}
