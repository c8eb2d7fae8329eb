use super::*;

use crate::{Attributes, Index, KeyCondition};

#[derive(Debug, Clone)]
pub struct Query {
    pub table: String,

    /// Index to query; the primary index when unnamed
    pub index: Index,

    pub key_condition: KeyCondition,

    /// Attributes to return
    pub projection: Option<Vec<String>>,

    pub consistent: bool,

    /// Maximum number of items in this page
    pub limit: Option<usize>,

    /// Ascending sort order when true
    pub forward: bool,

    /// Resume after this key, as returned in the previous page
    pub exclusive_start_key: Option<Attributes>,
}

impl From<Query> for Operation {
    fn from(value: Query) -> Self {
        Self::Query(value)
    }
}
