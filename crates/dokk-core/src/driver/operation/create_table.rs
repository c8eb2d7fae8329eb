use super::*;

use crate::Index;

#[derive(Debug, Clone)]
pub struct CreateTable {
    pub table: String,

    pub primary_index: Index,

    /// Global secondary indices, projecting all attributes
    pub secondary_indices: Vec<Index>,
}

impl From<CreateTable> for Operation {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
