use super::*;

use crate::{Attributes, Condition};

#[derive(Debug, Clone)]
pub struct Update {
    pub table: String,

    /// Primary key attributes of the item
    pub key: Attributes,

    /// Attributes to overwrite or create. Never contains key attributes.
    pub set: Attributes,

    pub condition: Option<Condition>,
}

impl From<Update> for Operation {
    fn from(value: Update) -> Self {
        Self::Update(value)
    }
}
