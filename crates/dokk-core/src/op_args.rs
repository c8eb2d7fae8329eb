//! Typed arguments for single-item operations and transactions.
//!
//! Arguments are plain data. Building one never touches the store; they are
//! lowered to driver [`operation`](crate::driver::operation)s with an
//! [`OpContext`] when executed.

mod condition;
pub use condition::ConditionArg;

mod delete;
pub use delete::DeleteArg;

mod get;
pub use get::GetArg;

mod insert;
pub use insert::InsertArg;

mod put;
pub use put::PutArg;

mod query;
pub use query::QueryArg;

mod update;
pub use update::UpdateArg;

mod write;
pub use write::WriteArg;

use crate::Index;

/// Table-wide settings needed to lower an argument.
#[derive(Debug, Clone, Copy)]
pub struct OpContext<'a> {
    pub table: &'a str,

    pub primary_index: &'a Index,

    /// Set `CreatedAt` / `UpdatedAt` on writes
    pub timestamps: bool,
}
