use super::*;

impl Store {
    pub(crate) fn create_table(&mut self, op: operation::CreateTable) -> Result<Response> {
        if self.tables.contains_key(&op.table) {
            return Err(MemoryError::resource_in_use(&op.table));
        }

        self.tables.insert(
            op.table,
            Table::new(op.primary_index, op.secondary_indices),
        );

        Ok(Response::Empty)
    }
}
