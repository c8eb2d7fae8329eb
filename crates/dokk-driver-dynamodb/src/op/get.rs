use super::*;

impl DynamoDb {
    pub(crate) async fn exec_get(&self, op: operation::Get) -> Result<Response> {
        let mut expr_attrs = ExprAttrs::default();
        let projection = ddb_projection(&mut expr_attrs, op.projection.as_deref());
        let (names, _) = expr_attrs.into_parts();

        let res = self
            .client
            .get_item()
            .table_name(&op.table)
            .set_key(Some(item_to_ddb(&op.key)))
            .set_projection_expression(projection)
            .set_expression_attribute_names(names)
            .consistent_read(op.consistent)
            .send()
            .await
            .map_err(store_error)?;

        let item = res.item.as_ref().map(item_from_ddb).transpose()?;

        Ok(Response::item(item))
    }
}
