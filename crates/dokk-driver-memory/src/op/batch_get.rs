use super::*;

impl Store {
    pub(crate) fn batch_get(&self, op: operation::BatchGet, capacity: usize) -> Result<Response> {
        let table = self.table(&op.table)?;

        let mut items = vec![];
        let mut unprocessed_keys = vec![];

        for (i, key_attrs) in op.keys.into_iter().enumerate() {
            if i >= capacity {
                unprocessed_keys.push(key_attrs);
                continue;
            }

            let key = table.key_of(&key_attrs)?;
            if let Some(item) = table.items.get(&key) {
                items.push(project(item, op.projection.as_deref()));
            }
        }

        Ok(Response::batch_get(items, unprocessed_keys))
    }
}
