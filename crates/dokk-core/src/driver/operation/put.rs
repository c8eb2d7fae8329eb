use super::*;

use crate::{Attributes, Condition};

#[derive(Debug, Clone)]
pub struct Put {
    pub table: String,

    /// The full item, key attributes included
    pub item: Attributes,

    pub condition: Option<Condition>,
}

impl From<Put> for Operation {
    fn from(value: Put) -> Self {
        Self::Put(value)
    }
}
