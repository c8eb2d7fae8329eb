mod batch_get;
mod create_table;
mod delete;
mod get;
mod put;
mod query;
mod transact_write;
mod update;

use super::{
    ddb_condition, ddb_key_condition, ddb_key_schema, ddb_projection, item_from_ddb,
    item_to_ddb, store_error, DynamoDb, ExprAttrs,
};

use dokk_core::{
    driver::{operation, Response},
    Error, Result,
};

/// Renders the `SET` clause of an update expression, or `None` when there is
/// nothing to set.
fn ddb_update_expression(attrs: &mut ExprAttrs, set: &dokk_core::Attributes) -> Option<String> {
    if set.is_empty() {
        return None;
    }

    let assignments = set
        .iter()
        .map(|(name, value)| format!("{} = {}", attrs.name(name), attrs.value(value)))
        .collect::<Vec<_>>();

    Some(format!("SET {}", assignments.join(", ")))
}
