use super::*;

use crate::Attributes;

#[derive(Debug, Clone)]
pub struct BatchGet {
    pub table: String,

    /// Primary key attribute maps of the items to read
    pub keys: Vec<Attributes>,

    /// Attributes to return. Always includes the primary key attributes.
    pub projection: Option<Vec<String>>,

    pub consistent: bool,
}

impl From<BatchGet> for Operation {
    fn from(value: BatchGet) -> Self {
        Self::BatchGet(value)
    }
}
