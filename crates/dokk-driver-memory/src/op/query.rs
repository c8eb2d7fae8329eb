use super::*;

use dokk_core::Value;

impl Store {
    pub(crate) fn query(&self, op: operation::Query, page_size: usize) -> Result<Response> {
        let table = self.table(&op.table)?;
        let index = table.index(&op.index)?;

        // Items sorted by their position in the index: the index sort value,
        // then the table key for items sharing a sort value.
        let mut matches: Vec<((String, ItemKey), &Attributes)> = table
            .items
            .iter()
            .filter(|(_, item)| op.key_condition.matches(item))
            .filter_map(|(key, item)| {
                let (_, sort) = index_key(index, item)?;
                Some(((sort, key.clone()), item))
            })
            .collect();

        matches.sort_by(|a, b| a.0.cmp(&b.0));

        if !op.forward {
            matches.reverse();
        }

        let start = match &op.exclusive_start_key {
            None => 0,
            Some(start_key) => {
                let start = resume_position(index, table, start_key)?;
                matches
                    .iter()
                    .position(|(pos, _)| {
                        if op.forward {
                            *pos > start
                        } else {
                            *pos < start
                        }
                    })
                    .unwrap_or(matches.len())
            }
        };

        let page_limit = op.limit.map_or(page_size, |limit| limit.min(page_size));
        let page: Vec<&Attributes> = matches[start..]
            .iter()
            .take(page_limit)
            .map(|(_, item)| *item)
            .collect();

        // Like DynamoDB, a full page always carries a resume key, even when
        // nothing follows it.
        let last_evaluated_key = if page.len() == page_limit {
            page.last().map(|item| table.position_key(index, item))
        } else {
            None
        };

        let items = page
            .into_iter()
            .map(|item| project(item, op.projection.as_deref()))
            .collect();

        Ok(Response::page(items, last_evaluated_key))
    }
}

fn resume_position(
    index: &dokk_core::Index,
    table: &Table,
    start_key: &Attributes,
) -> Result<(String, ItemKey)> {
    let sort = start_key
        .get(index.sort_attr())
        .and_then(Value::as_str)
        .ok_or_else(|| MemoryError::validation("the exclusive start key is invalid"))?;

    Ok((sort.to_string(), table.key_of(start_key)?))
}
