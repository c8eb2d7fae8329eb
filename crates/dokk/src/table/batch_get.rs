use super::Table;

use dokk_core::{driver::operation, Error, Item, PrimaryKey, Result};

/// Items found by [`Table::batch_get`], plus the keys the store did not
/// process. Callers retry unprocessed keys with their own backoff.
#[derive(Debug, Default)]
pub struct BatchGetResult {
    pub items: Vec<Item>,

    pub unprocessed_keys: Vec<PrimaryKey>,
}

impl Table {
    /// Reads several items in one request. Missing items are omitted.
    ///
    /// `attributes` restricts the returned attributes; all attributes are
    /// returned when it is empty.
    pub async fn batch_get(
        &self,
        keys: &[PrimaryKey],
        attributes: &[&str],
        consistent: bool,
    ) -> Result<BatchGetResult> {
        if keys.is_empty() {
            return Ok(BatchGetResult::default());
        }

        let max = self.capability().max_batch_get_items;
        if keys.len() > max {
            return Err(Error::validation_too_many_batch_get_keys(keys.len(), max));
        }

        for key in keys {
            self.check_key(key)?;
        }

        let primary_index = self.primary_index();

        let projection = (!attributes.is_empty()).then(|| {
            let mut projection = vec![
                primary_index.partition_attr().to_string(),
                primary_index.sort_attr().to_string(),
            ];
            for attr in attributes {
                if !projection.iter().any(|p| p.as_str() == *attr) {
                    projection.push(attr.to_string());
                }
            }
            projection
        });

        tracing::debug!(table = self.name(), keys = keys.len(), "batch_get");

        let page = self
            .exec(operation::BatchGet {
                table: self.name().to_string(),
                keys: keys.iter().map(|key| key.serialize(primary_index)).collect(),
                projection,
                consistent,
            })
            .await?
            .into_batch_get()?;

        let unprocessed_keys = page
            .unprocessed_keys
            .iter()
            .map(|raw| PrimaryKey::from_attributes(primary_index, raw))
            .collect::<Result<Vec<_>>>()?;

        if !unprocessed_keys.is_empty() {
            tracing::debug!(
                table = self.name(),
                unprocessed = unprocessed_keys.len(),
                "batch_get left keys unprocessed"
            );
        }

        Ok(BatchGetResult {
            items: page.items.into_iter().map(Item::from_raw).collect(),
            unprocessed_keys,
        })
    }
}
