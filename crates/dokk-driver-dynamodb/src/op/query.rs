use super::*;

impl DynamoDb {
    /// Fetches a single page. The caller drives pagination with the returned
    /// `LastEvaluatedKey`.
    pub(crate) async fn exec_query(&self, op: operation::Query) -> Result<Response> {
        let mut expr_attrs = ExprAttrs::default();
        let key_condition_expression = ddb_key_condition(&mut expr_attrs, &op.key_condition);
        let projection = ddb_projection(&mut expr_attrs, op.projection.as_deref());
        let (names, values) = expr_attrs.into_parts();

        let limit = op
            .limit
            .map(|limit| i32::try_from(limit).unwrap_or(i32::MAX));

        let res = self
            .client
            .query()
            .table_name(&op.table)
            .set_index_name(op.index.name().map(str::to_string))
            .key_condition_expression(key_condition_expression)
            .set_projection_expression(projection)
            .set_expression_attribute_names(names)
            .set_expression_attribute_values(values)
            .consistent_read(op.consistent)
            .scan_index_forward(op.forward)
            .set_limit(limit)
            .set_exclusive_start_key(op.exclusive_start_key.as_ref().map(item_to_ddb))
            .send()
            .await
            .map_err(store_error)?;

        let items = res
            .items
            .unwrap_or_default()
            .iter()
            .map(item_from_ddb)
            .collect::<Result<Vec<_>>>()?;

        let last_evaluated_key = res
            .last_evaluated_key
            .filter(|key| !key.is_empty())
            .as_ref()
            .map(item_from_ddb)
            .transpose()?;

        Ok(Response::page(items, last_evaluated_key))
    }
}
