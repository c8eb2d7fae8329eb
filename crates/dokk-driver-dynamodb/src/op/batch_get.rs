use super::*;

use aws_sdk_dynamodb::types::KeysAndAttributes;

impl DynamoDb {
    /// Issues one `BatchGetItem` request. Keys the service did not process
    /// are handed back to the caller rather than retried.
    pub(crate) async fn exec_batch_get(&self, op: operation::BatchGet) -> Result<Response> {
        let mut expr_attrs = ExprAttrs::default();
        let projection = ddb_projection(&mut expr_attrs, op.projection.as_deref());
        let (names, _) = expr_attrs.into_parts();

        let keys_and_attributes = KeysAndAttributes::builder()
            .set_keys(Some(op.keys.iter().map(item_to_ddb).collect()))
            .set_projection_expression(projection)
            .set_expression_attribute_names(names)
            .consistent_read(op.consistent)
            .build()
            .map_err(Error::store)?;

        let res = self
            .client
            .batch_get_item()
            .request_items(&op.table, keys_and_attributes)
            .send()
            .await
            .map_err(store_error)?;

        let items = res
            .responses
            .and_then(|mut responses| responses.remove(&op.table))
            .unwrap_or_default()
            .iter()
            .map(item_from_ddb)
            .collect::<Result<Vec<_>>>()?;

        let unprocessed_keys = res
            .unprocessed_keys
            .and_then(|mut unprocessed| unprocessed.remove(&op.table))
            .map(|unprocessed| unprocessed.keys)
            .unwrap_or_default()
            .iter()
            .map(item_from_ddb)
            .collect::<Result<Vec<_>>>()?;

        Ok(Response::batch_get(items, unprocessed_keys))
    }
}
