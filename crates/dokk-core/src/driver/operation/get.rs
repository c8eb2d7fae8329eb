use super::*;

use crate::Attributes;

#[derive(Debug, Clone)]
pub struct Get {
    pub table: String,

    /// Primary key attributes of the item
    pub key: Attributes,

    /// Attributes to return; all attributes when `None`
    pub projection: Option<Vec<String>>,

    pub consistent: bool,
}

impl From<Get> for Operation {
    fn from(value: Get) -> Self {
        Self::Get(value)
    }
}
