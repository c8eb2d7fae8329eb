//! Condition and key-condition expressions.
//!
//! These are backend neutral. The DynamoDB driver renders them to expression
//! strings with placeholders; the memory driver evaluates them directly.

mod condition;
pub use condition::{CompareOp, Condition};

mod key_condition;
pub use key_condition::{KeyCondition, SortCondition};
