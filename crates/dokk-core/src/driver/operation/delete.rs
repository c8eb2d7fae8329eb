use super::*;

use crate::{Attributes, Condition};

#[derive(Debug, Clone)]
pub struct Delete {
    pub table: String,

    /// Primary key attributes of the item
    pub key: Attributes,

    pub condition: Option<Condition>,
}

impl From<Delete> for Operation {
    fn from(value: Delete) -> Self {
        Self::Delete(value)
    }
}
