use super::OpContext;
use crate::driver::operation;
use crate::driver::Capability;
use crate::{
    Attributes, Error, Index, KeyCondition, PartitionKey, PrefixSortKey, Result, SortCondition,
};

/// A key-condition query against one index.
///
/// Selects the items whose partition attribute equals `partition_key`,
/// optionally narrowed by a condition on the sort attribute. Results are
/// returned in sort-key order.
#[derive(Debug, Clone)]
pub struct QueryArg {
    partition_key: PartitionKey,
    sort: Option<SortCondition>,
    index: Index,
    attributes: Option<Vec<String>>,
    consistent: bool,
    limit: Option<usize>,
    forward: bool,
}

impl QueryArg {
    pub fn new(partition_key: &PartitionKey) -> QueryArg {
        QueryArg {
            partition_key: partition_key.clone(),
            sort: None,
            index: Index::PRIMARY,
            attributes: None,
            consistent: false,
            limit: None,
            forward: true,
        }
    }

    /// Selects every item of the partition whose sort key belongs to the
    /// prefix's entity.
    pub fn prefix(partition_key: &PartitionKey, prefix: &PrefixSortKey) -> QueryArg {
        QueryArg::new(partition_key).sort(SortCondition::begins_with(prefix))
    }

    pub fn sort(mut self, sort: SortCondition) -> QueryArg {
        self.sort = Some(sort);
        self
    }

    /// Query a secondary index instead of the primary index.
    pub fn index(mut self, index: Index) -> QueryArg {
        self.index = index;
        self
    }

    /// Attributes to return in addition to the index key attributes. Only the
    /// index key attributes are returned by default.
    pub fn attributes<I, S>(mut self, attributes: I) -> QueryArg
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes = Some(attributes.into_iter().map(Into::into).collect());
        self
    }

    pub fn consistent(mut self, consistent: bool) -> QueryArg {
        self.consistent = consistent;
        self
    }

    /// Maximum number of items returned in total, across pages.
    pub fn limit(mut self, limit: usize) -> QueryArg {
        self.limit = Some(limit);
        self
    }

    /// Ascending sort-key order when true, the default.
    pub fn forward(mut self, forward: bool) -> QueryArg {
        self.forward = forward;
        self
    }

    pub fn partition_key(&self) -> &PartitionKey {
        &self.partition_key
    }

    pub fn target_index(&self) -> &Index {
        &self.index
    }

    pub fn total_limit(&self) -> Option<usize> {
        self.limit
    }

    /// Checks the arguments before any request is made.
    pub fn validate(&self, capability: &Capability) -> Result<()> {
        if self.limit == Some(0) {
            return Err(Error::validation_invalid_limit());
        }

        if self.consistent && !self.index.is_primary() && !capability.consistent_secondary_reads {
            return Err(Error::validation_consistent_secondary_read(
                self.index.display_name(),
            ));
        }

        Ok(())
    }

    /// Lowers to the request for one page.
    ///
    /// `remaining` caps the page size when the query has a limit.
    pub fn to_operation(
        &self,
        cx: &OpContext<'_>,
        exclusive_start_key: Option<Attributes>,
        remaining: Option<usize>,
    ) -> operation::Query {
        let index = &self.index;

        let mut projection = vec![
            index.partition_attr().to_string(),
            index.sort_attr().to_string(),
        ];
        for attr in self.attributes.iter().flatten() {
            if !projection.contains(attr) {
                projection.push(attr.clone());
            }
        }

        operation::Query {
            table: cx.table.to_string(),
            index: index.clone(),
            key_condition: KeyCondition::new(index, &self.partition_key, self.sort.clone()),
            projection: Some(projection),
            consistent: self.consistent,
            limit: remaining,
            forward: self.forward,
            exclusive_start_key,
        }
    }
}
