use crate::keys::{EntityKey, PartitionKey, PrefixSortKey, SortKey};
use crate::{Attributes, Index, Value};

/// Selects the items of one partition of an index, optionally narrowed by a
/// condition on the sort attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyCondition {
    pub partition_attr: String,
    pub partition_value: String,
    pub sort_attr: String,
    pub sort: Option<SortCondition>,
}

/// A condition on the sort attribute of a query. Operands are encoded keys
/// and compare as UTF-8 byte strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortCondition {
    Eq(String),
    Lt(String),
    Le(String),
    Gt(String),
    Ge(String),
    Between(String, String),
    BeginsWith(String),
}

impl KeyCondition {
    pub fn new(index: &Index, partition_key: &PartitionKey, sort: Option<SortCondition>) -> Self {
        KeyCondition {
            partition_attr: index.partition_attr().to_string(),
            partition_value: partition_key.encode(),
            sort_attr: index.sort_attr().to_string(),
            sort,
        }
    }

    /// Returns `true` if the item belongs to the selected range.
    pub fn matches(&self, item: &Attributes) -> bool {
        let attr = |name: &str| item.get(name).and_then(Value::as_str);

        if attr(&self.partition_attr) != Some(self.partition_value.as_str()) {
            return false;
        }

        match (&self.sort, attr(&self.sort_attr)) {
            (None, _) => true,
            (Some(sort), Some(value)) => sort.matches(value),
            (Some(_), None) => false,
        }
    }
}

impl SortCondition {
    pub fn eq(key: &SortKey) -> SortCondition {
        SortCondition::Eq(key.encode())
    }

    pub fn lt(key: &SortKey) -> SortCondition {
        SortCondition::Lt(key.encode())
    }

    pub fn le(key: &SortKey) -> SortCondition {
        SortCondition::Le(key.encode())
    }

    pub fn gt(key: &SortKey) -> SortCondition {
        SortCondition::Gt(key.encode())
    }

    pub fn ge(key: &SortKey) -> SortCondition {
        SortCondition::Ge(key.encode())
    }

    pub fn between(low: &SortKey, high: &SortKey) -> SortCondition {
        SortCondition::Between(low.encode(), high.encode())
    }

    pub fn begins_with(prefix: &PrefixSortKey) -> SortCondition {
        SortCondition::BeginsWith(prefix.encode())
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            SortCondition::Eq(v) => value == v,
            SortCondition::Lt(v) => value < v.as_str(),
            SortCondition::Le(v) => value <= v.as_str(),
            SortCondition::Gt(v) => value > v.as_str(),
            SortCondition::Ge(v) => value >= v.as_str(),
            SortCondition::Between(low, high) => value >= low.as_str() && value <= high.as_str(),
            SortCondition::BeginsWith(prefix) => value.starts_with(prefix.as_str()),
        }
    }
}
