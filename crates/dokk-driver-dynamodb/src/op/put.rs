use super::*;

impl DynamoDb {
    pub(crate) async fn exec_put(&self, op: operation::Put) -> Result<Response> {
        let mut expr_attrs = ExprAttrs::default();
        let condition_expression = op
            .condition
            .as_ref()
            .map(|condition| ddb_condition(&mut expr_attrs, condition));
        let (names, values) = expr_attrs.into_parts();

        let res = self
            .client
            .put_item()
            .table_name(&op.table)
            .set_item(Some(item_to_ddb(&op.item)))
            .set_condition_expression(condition_expression)
            .set_expression_attribute_names(names)
            .set_expression_attribute_values(values)
            .send()
            .await;

        match res {
            Ok(_) => Ok(Response::Empty),
            Err(err) => {
                let failed = err
                    .as_service_error()
                    .is_some_and(|e| e.is_conditional_check_failed_exception());

                if failed {
                    Err(Error::condition_check_failed_by(err))
                } else {
                    Err(store_error(err))
                }
            }
        }
    }
}
