use super::Table;

use dokk_core::{driver::operation, EntityKey, Error, PrimaryKey, Result, WriteArg};

use std::collections::HashMap;

impl Table {
    /// Applies every write atomically: either all entries take effect or
    /// none do.
    ///
    /// An empty batch is a no-op. Batches larger than the store allows, or
    /// with two entries on the same key, are rejected before any request is
    /// made. When a condition fails, the returned conflict error carries the
    /// position and key of the first failing entry.
    pub async fn transact_write_items<I>(&self, items: I) -> Result<()>
    where
        I: IntoIterator<Item = WriteArg>,
    {
        let items = items.into_iter().collect::<Vec<_>>();

        if items.is_empty() {
            return Ok(());
        }

        let max = self.capability().max_transact_items;
        if items.len() > max {
            return Err(Error::validation_too_many_transact_items(items.len(), max));
        }

        let mut seen = HashMap::<&PrimaryKey, usize>::with_capacity(items.len());

        for (position, item) in items.iter().enumerate() {
            self.check_key(item.primary_key())?;

            if let Some(first) = seen.insert(item.primary_key(), position) {
                return Err(Error::validation_duplicate_transact_item(first, position));
            }
        }

        tracing::debug!(table = self.name(), items = items.len(), "transact_write_items");

        let cx = self.cx();
        let op = operation::TransactWrite {
            items: items.iter().map(|item| item.to_transact_item(&cx)).collect(),
        };

        match self.exec(op).await {
            Ok(response) => response.into_empty(),
            Err(err) => Err(self.classify_transaction_error(err, &items)),
        }
    }

    fn classify_transaction_error(&self, err: Error, items: &[WriteArg]) -> Error {
        if !err.is_conflict() {
            return err;
        }

        let Some((position, item)) = err
            .conflict_position()
            .and_then(|position| Some((position, items.get(position)?)))
        else {
            tracing::warn!(table = self.name(), "transaction condition failed");
            return err;
        };

        let key = item.primary_key();

        tracing::warn!(
            table = self.name(),
            position,
            op = item.name(),
            entity = key.partition_key().entity(),
            "transaction condition failed"
        );

        err.with_conflict_key(key.clone())
    }
}
