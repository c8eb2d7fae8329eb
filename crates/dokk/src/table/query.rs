use super::Table;

use dokk_core::{EntityKey, Index, Item, PartitionKey, PrefixSortKey, QueryArg, Result};

use std::pin::pin;
use tokio_stream::{Stream, StreamExt};

impl Table {
    /// Returns every item of the partition whose sort key starts with the
    /// prefix's entity token, in sort-key order.
    ///
    /// Pages are fetched until `limit` items were collected or the store has
    /// no more. Querying an index whose attributes are swapped relative to
    /// the primary index, such as the inverse index, reads relations in the
    /// opposite direction.
    pub async fn query_prefix(
        &self,
        partition_key: &PartitionKey,
        prefix: &PrefixSortKey,
        index: &Index,
        limit: Option<usize>,
        forward: bool,
    ) -> Result<Vec<Item>> {
        let mut arg = QueryArg::prefix(partition_key, prefix)
            .index(index.clone())
            .forward(forward);

        if let Some(limit) = limit {
            arg = arg.limit(limit);
        }

        self.query(arg).await
    }

    /// Runs a key-condition query, following pagination until the limit is
    /// reached or the results are exhausted.
    pub async fn query(&self, arg: QueryArg) -> Result<Vec<Item>> {
        let mut stream = pin!(self.query_stream(arg));
        let mut items = vec![];

        while let Some(item) = stream.next().await {
            items.push(item?);
        }

        Ok(items)
    }

    /// Like [`query`](Table::query), but yields items as pages arrive. The
    /// next page is only requested once the current one is consumed.
    pub fn query_stream(&self, arg: QueryArg) -> impl Stream<Item = Result<Item>> + Send + 'static {
        let table = self.clone();

        async_stream::try_stream! {
            let index = table.resolve_index(arg.target_index())?;
            let arg = arg.index(index);
            arg.validate(table.capability())?;

            let limit = arg.total_limit();
            let mut returned = 0;
            let mut pages = 0;
            let mut exclusive_start_key = None;

            loop {
                let remaining = limit.map(|limit| limit - returned);
                let op = arg.to_operation(&table.cx(), exclusive_start_key.take(), remaining);
                let page = table.exec(op).await?.into_page()?;
                pages += 1;

                tracing::debug!(
                    table = table.name(),
                    index = arg.target_index().display_name(),
                    entity = arg.partition_key().entity(),
                    page = pages,
                    items = page.items.len(),
                    "query page"
                );

                for raw in page.items {
                    if limit.is_some_and(|limit| returned >= limit) {
                        break;
                    }
                    returned += 1;
                    yield Item::from_raw(raw);
                }

                if limit.is_some_and(|limit| returned >= limit) {
                    break;
                }

                match page.last_evaluated_key {
                    Some(key) => exclusive_start_key = Some(key),
                    None => break,
                }
            }
        }
    }
}
