use super::*;

use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode, GlobalSecondaryIndex, Projection, ProjectionType,
    ScalarAttributeType,
};

impl DynamoDb {
    pub(crate) async fn exec_create_table(&self, op: operation::CreateTable) -> Result<Response> {
        // Every key attribute of every index is a string
        let mut defined_attributes = vec![];

        for index in std::iter::once(&op.primary_index).chain(&op.secondary_indices) {
            for attr in [index.partition_attr(), index.sort_attr()] {
                if !defined_attributes.contains(&attr) {
                    defined_attributes.push(attr);
                }
            }
        }

        let attribute_definitions = defined_attributes
            .into_iter()
            .map(|attr| {
                AttributeDefinition::builder()
                    .attribute_name(attr)
                    .attribute_type(ScalarAttributeType::S)
                    .build()
                    .map_err(Error::store)
            })
            .collect::<Result<Vec<_>>>()?;

        let mut gsis = vec![];

        for index in &op.secondary_indices {
            let Some(name) = index.name() else {
                return Err(Error::validation_invalid_index(
                    "secondary indices must be named",
                ));
            };

            gsis.push(
                GlobalSecondaryIndex::builder()
                    .index_name(name)
                    .set_key_schema(Some(ddb_key_schema(index)?))
                    .projection(
                        Projection::builder()
                            .projection_type(ProjectionType::All)
                            .build(),
                    )
                    .build()
                    .map_err(Error::store)?,
            );
        }

        self.client
            .create_table()
            .table_name(&op.table)
            .set_attribute_definitions(Some(attribute_definitions))
            .set_key_schema(Some(ddb_key_schema(&op.primary_index)?))
            .set_global_secondary_indexes(if gsis.is_empty() { None } else { Some(gsis) })
            .billing_mode(BillingMode::PayPerRequest)
            .send()
            .await
            .map_err(store_error)?;

        Ok(Response::Empty)
    }
}
