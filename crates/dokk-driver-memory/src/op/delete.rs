use super::*;

impl Store {
    pub(crate) fn delete(&mut self, op: operation::Delete) -> Result<Response> {
        let table = self.table_mut(&op.table)?;
        let key = table.key_of(&op.key)?;

        if let Some(condition) = &op.condition {
            if !condition.eval(table.items.get(&key)) {
                return Err(Error::condition_check_failed());
            }
        }

        table.items.remove(&key);

        Ok(Response::Empty)
    }
}
