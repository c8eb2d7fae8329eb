use super::*;

impl Store {
    pub(crate) fn update(&mut self, op: operation::Update) -> Result<Response> {
        let table = self.table_mut(&op.table)?;
        let key = table.key_of(&op.key)?;

        if let Some(condition) = &op.condition {
            if !condition.eval(table.items.get(&key)) {
                return Err(Error::condition_check_failed());
            }
        }

        apply_update(table, key, op.key, op.set);

        Ok(Response::Empty)
    }
}

/// Sets attributes on an item, creating it from its key if needed.
pub(super) fn apply_update(table: &mut Table, key: ItemKey, key_attrs: Attributes, set: Attributes) {
    let item = table.items.entry(key).or_insert(key_attrs);
    item.extend(set);
}
