use super::*;

impl Store {
    pub(crate) fn put(&mut self, op: operation::Put) -> Result<Response> {
        let table = self.table_mut(&op.table)?;
        let key = table.key_of(&op.item)?;

        if let Some(condition) = &op.condition {
            if !condition.eval(table.items.get(&key)) {
                return Err(Error::condition_check_failed());
            }
        }

        table.items.insert(key, op.item);

        Ok(Response::Empty)
    }
}
