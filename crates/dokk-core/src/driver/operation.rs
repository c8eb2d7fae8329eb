//! Requests sent to a [`Driver`](super::Driver).
//!
//! Keys and items are plain attribute maps with keys already encoded; the
//! driver never sees typed keys.

mod batch_get;
pub use batch_get::BatchGet;

mod create_table;
pub use create_table::CreateTable;

mod delete;
pub use delete::Delete;

mod get;
pub use get::Get;

mod put;
pub use put::Put;

mod query;
pub use query::Query;

mod transact_write;
pub use transact_write::{ConditionCheck, TransactItem, TransactWrite};

mod update;
pub use update::Update;

#[derive(Debug, Clone)]
pub enum Operation {
    /// Create the table with its primary and secondary indices
    CreateTable(CreateTable),

    /// Write a whole item, optionally guarded by a condition
    Put(Put),

    /// Read one item by its primary key
    Get(Get),

    /// Delete one item by its primary key
    Delete(Delete),

    /// Set attributes of one item, creating it if needed
    Update(Update),

    /// Read one page of a key-condition query
    Query(Query),

    /// Read several items by primary key
    BatchGet(BatchGet),

    /// Apply several writes atomically
    TransactWrite(TransactWrite),
}

impl Operation {
    /// Operation name, for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::CreateTable(_) => "create_table",
            Operation::Put(_) => "put",
            Operation::Get(_) => "get",
            Operation::Delete(_) => "delete",
            Operation::Update(_) => "update",
            Operation::Query(_) => "query",
            Operation::BatchGet(_) => "batch_get",
            Operation::TransactWrite(_) => "transact_write",
        }
    }
}
