use super::OpContext;
use crate::driver::operation;
use crate::{PartitionKey, PrimaryKey, SortKey};

/// Reads one item by its primary key.
#[derive(Debug, Clone)]
pub struct GetArg {
    key: PrimaryKey,
    attributes: Option<Vec<String>>,
    consistent: bool,
}

impl GetArg {
    pub fn new(partition_key: &PartitionKey, sort_key: &SortKey) -> GetArg {
        GetArg {
            key: PrimaryKey::new(partition_key, sort_key),
            attributes: None,
            consistent: false,
        }
    }

    /// Only return these attributes. All attributes are returned by default;
    /// the primary key attributes are always returned.
    pub fn attributes<I, S>(mut self, attributes: I) -> GetArg
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes = Some(attributes.into_iter().map(Into::into).collect());
        self
    }

    /// Request a strongly consistent read.
    pub fn consistent(mut self, consistent: bool) -> GetArg {
        self.consistent = consistent;
        self
    }

    pub fn key(&self) -> &PrimaryKey {
        &self.key
    }

    pub fn to_operation(&self, cx: &OpContext<'_>) -> operation::Get {
        let projection = self.attributes.as_ref().map(|attributes| {
            let index = cx.primary_index;

            let mut projection = vec![
                index.partition_attr().to_string(),
                index.sort_attr().to_string(),
            ];
            for attr in attributes {
                if !projection.contains(attr) {
                    projection.push(attr.clone());
                }
            }
            projection
        });

        operation::Get {
            table: cx.table.to_string(),
            key: self.key.serialize(cx.primary_index),
            projection,
            consistent: self.consistent,
        }
    }
}
