#[macro_use]
mod macros;

pub mod driver;
pub use driver::Driver;

pub mod error;
pub use error::{CancellationReason, Error};

pub mod expr;
pub use expr::{CompareOp, Condition, KeyCondition, SortCondition};

pub mod index;
pub use index::Index;

mod item;
pub use item::Item;

pub mod keys;
pub use keys::{
    EntityKey, EntityName, EntityRegistry, KeyPart, PartitionKey, PrefixSortKey, PrimaryKey,
    SortKey,
};

pub mod op_args;
pub use op_args::{
    ConditionArg, DeleteArg, GetArg, InsertArg, OpContext, PutArg, QueryArg, UpdateArg, WriteArg,
};

mod timestamp;
pub use timestamp::{CREATED_AT, UPDATED_AT};

mod value;
pub use value::{Attributes, Value};

/// A Result type alias that uses dokk's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
