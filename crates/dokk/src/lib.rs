//! Typed access to a single DynamoDB table holding many kinds of entities.
//!
//! Every item is addressed by a partition key and a sort key encoded as
//! `ENTITY#value`. Keys are built from marker types implementing
//! [`EntityName`], usually through `#[derive(EntityName)]`, so an item's kind
//! is part of its key and a [`PrefixSortKey`] selects one kind of item within
//! a partition.
//!
//! ```no_run
//! use dokk::{attributes, EntityName, Index, PartitionKey, PrefixSortKey, SortKey, Table};
//!
//! #[derive(EntityName)]
//! struct User;
//!
//! #[derive(EntityName)]
//! struct Group;
//!
//! # async fn run() -> dokk::Result<()> {
//! let table = Table::builder("dokk").connect("dynamodb://localhost:8000").await?;
//!
//! let alice = PartitionKey::new(User, "alice")?;
//! let group1 = SortKey::new(Group, "group1")?;
//! table
//!     .insert(&alice, &group1, attributes! { "Role" => "member" })
//!     .await?;
//!
//! // Every user in group1, through the inverse index
//! let users = table
//!     .query_prefix(
//!         &PartitionKey::new(Group, "group1")?,
//!         &PrefixSortKey::new(User),
//!         &Index::inverse(),
//!         None,
//!         true,
//!     )
//!     .await?;
//! assert_eq!(users[0].get_str("PK"), Some("alice"));
//! # Ok(())
//! # }
//! ```

extern crate self as dokk;

pub mod table;
pub use table::{BatchGetResult, Builder, Table};

pub mod driver {
    pub use dokk_core::async_trait;
    pub use dokk_core::driver::*;

    #[cfg(feature = "dynamodb")]
    pub use dokk_driver_dynamodb::DynamoDb;

    #[cfg(feature = "memory")]
    pub use dokk_driver_memory::Memory;
}

pub use dokk_core::{
    attributes, error, keys, op_args, Attributes, CancellationReason, CompareOp, Condition,
    ConditionArg, DeleteArg, EntityKey, EntityName, EntityRegistry, Error, GetArg, Index,
    InsertArg, Item, KeyPart, PartitionKey, PrefixSortKey, PrimaryKey, PutArg, QueryArg, Result,
    SortCondition, SortKey, UpdateArg, Value, WriteArg, CREATED_AT, UPDATED_AT,
};

pub use dokk_macros::EntityName;
