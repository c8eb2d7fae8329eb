use super::*;

impl Store {
    pub(crate) fn get(&self, op: operation::Get) -> Result<Response> {
        let table = self.table(&op.table)?;
        let key = table.key_of(&op.key)?;

        let item = table
            .items
            .get(&key)
            .map(|item| project(item, op.projection.as_deref()));

        Ok(Response::item(item))
    }
}
