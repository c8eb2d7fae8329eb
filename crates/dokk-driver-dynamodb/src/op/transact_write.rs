use super::*;

use aws_sdk_dynamodb::{operation::transact_write_items::TransactWriteItemsError, types as ddb};
use dokk_core::{driver::operation::TransactItem, CancellationReason};

impl DynamoDb {
    pub(crate) async fn exec_transact_write(
        &self,
        op: operation::TransactWrite,
    ) -> Result<Response> {
        let transact_items = op
            .items
            .iter()
            .map(ddb_transact_item)
            .collect::<Result<Vec<_>>>()?;

        let res = self
            .client
            .transact_write_items()
            .set_transact_items(Some(transact_items))
            .send()
            .await;

        match res {
            Ok(_) => Ok(Response::Empty),
            Err(err) => {
                let reasons = match err.as_service_error() {
                    Some(TransactWriteItemsError::TransactionCanceledException(e)) => {
                        Some(cancellation_reasons(e.cancellation_reasons()))
                    }
                    _ => None,
                };

                match reasons {
                    Some(reasons) => Err(Error::transaction_canceled_by(reasons, err)),
                    None => Err(store_error(err)),
                }
            }
        }
    }
}

fn ddb_transact_item(item: &TransactItem) -> Result<ddb::TransactWriteItem> {
    let mut expr_attrs = ExprAttrs::default();

    let builder = match item {
        TransactItem::Put(put) => {
            let condition_expression = put
                .condition
                .as_ref()
                .map(|condition| ddb_condition(&mut expr_attrs, condition));
            let (names, values) = expr_attrs.into_parts();

            ddb::TransactWriteItem::builder().put(
                ddb::Put::builder()
                    .table_name(&put.table)
                    .set_item(Some(item_to_ddb(&put.item)))
                    .set_condition_expression(condition_expression)
                    .set_expression_attribute_names(names)
                    .set_expression_attribute_values(values)
                    .build()
                    .map_err(Error::store)?,
            )
        }
        TransactItem::Delete(delete) => {
            let condition_expression = delete
                .condition
                .as_ref()
                .map(|condition| ddb_condition(&mut expr_attrs, condition));
            let (names, values) = expr_attrs.into_parts();

            ddb::TransactWriteItem::builder().delete(
                ddb::Delete::builder()
                    .table_name(&delete.table)
                    .set_key(Some(item_to_ddb(&delete.key)))
                    .set_condition_expression(condition_expression)
                    .set_expression_attribute_names(names)
                    .set_expression_attribute_values(values)
                    .build()
                    .map_err(Error::store)?,
            )
        }
        TransactItem::Update(update) => {
            let update_expression = ddb_update_expression(&mut expr_attrs, &update.set);
            let condition_expression = update
                .condition
                .as_ref()
                .map(|condition| ddb_condition(&mut expr_attrs, condition));
            let (names, values) = expr_attrs.into_parts();

            // A transactional update needs an update expression, so an
            // update without attributes fails to build here.
            ddb::TransactWriteItem::builder().update(
                ddb::Update::builder()
                    .table_name(&update.table)
                    .set_key(Some(item_to_ddb(&update.key)))
                    .set_update_expression(update_expression)
                    .set_condition_expression(condition_expression)
                    .set_expression_attribute_names(names)
                    .set_expression_attribute_values(values)
                    .build()
                    .map_err(Error::store)?,
            )
        }
        TransactItem::ConditionCheck(check) => {
            let condition_expression = ddb_condition(&mut expr_attrs, &check.condition);
            let (names, values) = expr_attrs.into_parts();

            ddb::TransactWriteItem::builder().condition_check(
                ddb::ConditionCheck::builder()
                    .table_name(&check.table)
                    .set_key(Some(item_to_ddb(&check.key)))
                    .condition_expression(condition_expression)
                    .set_expression_attribute_names(names)
                    .set_expression_attribute_values(values)
                    .build()
                    .map_err(Error::store)?,
            )
        }
    };

    Ok(builder.build())
}

/// Maps the service's per-entry reasons, in submission order. Entries the
/// service reports with code `None` did not cause the cancellation.
fn cancellation_reasons(reasons: &[ddb::CancellationReason]) -> Vec<Option<CancellationReason>> {
    reasons
        .iter()
        .map(|reason| reason.code().and_then(CancellationReason::from_code))
        .collect()
}
