//! A DynamoDB driver for dokk, built on the AWS SDK.
//!
//! Each operation becomes exactly one request. Failed conditions map to
//! conflict errors, cancelled transactions carry the per-entry cancellation
//! reasons reported by the service, and everything else is a store error
//! tagged with the service error code. Nothing is retried here beyond what
//! the SDK's own retry policy does.

mod expr;
mod op;
mod value;

pub(crate) use expr::{ddb_condition, ddb_key_condition, ddb_projection, ExprAttrs};
pub(crate) use value::{item_from_ddb, item_to_ddb};

use dokk_core::{
    async_trait,
    driver::{operation::Operation, Capability, Driver, Response},
    Index, Result,
};

use aws_sdk_dynamodb::{
    error::{ProvideErrorMetadata, SdkError},
    types::{KeySchemaElement, KeyType},
    Client,
};
use url::Url;

/// Region used when the connection URL does not name one.
pub const DEFAULT_REGION: &str = "us-east-1";

#[derive(Debug)]
pub struct DynamoDb {
    /// Handle to the AWS SDK client
    client: Client,
}

impl DynamoDb {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Connects using a `dynamodb://` URL.
    ///
    /// With a host (`dynamodb://localhost:8000`), requests go to that
    /// endpoint over plain HTTP with static local credentials, which suits
    /// DynamoDB Local. Without one (`dynamodb://`), the ambient AWS
    /// configuration is used. The `region` query parameter overrides the
    /// region in both cases.
    pub async fn connect(url: &str) -> Result<Self> {
        let url = Url::parse(url).map_err(|err| {
            dokk_core::Error::invalid_connection_url(format!("malformed connection URL: {err}"))
        })?;

        if url.scheme() != "dynamodb" {
            return Err(dokk_core::Error::invalid_connection_url(format!(
                "connection URL does not have a `dynamodb` scheme; url={url}"
            )));
        }

        let mut region = None;

        for (name, value) in url.query_pairs() {
            match &*name {
                "region" if !value.is_empty() => region = Some(value.into_owned()),
                _ => {
                    return Err(dokk_core::Error::invalid_connection_url(format!(
                        "unknown or empty parameter `{name}` for the dynamodb driver"
                    )))
                }
            }
        }

        use aws_config::{BehaviorVersion, Region};
        use aws_sdk_dynamodb::config::Credentials;

        let mut aws_config = aws_config::defaults(BehaviorVersion::latest());

        match url.host_str().filter(|host| !host.is_empty()) {
            Some(host) => {
                let mut endpoint_url = format!("http://{host}");

                if let Some(port) = url.port() {
                    endpoint_url.push_str(&format!(":{port}"));
                }

                tracing::debug!(%endpoint_url, "connecting to a local DynamoDB endpoint");

                aws_config = aws_config
                    .region(Region::new(
                        region.unwrap_or_else(|| DEFAULT_REGION.to_string()),
                    ))
                    .credentials_provider(Credentials::new("dokk", "dokk", None, None, "dokk"))
                    .endpoint_url(endpoint_url);
            }
            None => {
                if let Some(region) = region {
                    aws_config = aws_config.region(Region::new(region));
                }
            }
        }

        let sdk_config = aws_config.load().await;

        Ok(Self::new(Client::new(&sdk_config)))
    }

    /// Connects with the ambient AWS configuration (environment, profile,
    /// instance metadata).
    pub async fn from_env() -> Self {
        let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(Client::new(&sdk_config))
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl Driver for DynamoDb {
    fn capability(&self) -> &Capability {
        &Capability::DYNAMODB
    }

    async fn exec(&self, op: Operation) -> Result<Response> {
        tracing::trace!(op = op.name(), "dynamodb request");

        match op {
            Operation::CreateTable(op) => self.exec_create_table(op).await,
            Operation::Put(op) => self.exec_put(op).await,
            Operation::Get(op) => self.exec_get(op).await,
            Operation::Delete(op) => self.exec_delete(op).await,
            Operation::Update(op) => self.exec_update(op).await,
            Operation::Query(op) => self.exec_query(op).await,
            Operation::BatchGet(op) => self.exec_batch_get(op).await,
            Operation::TransactWrite(op) => self.exec_transact_write(op).await,
        }
    }
}

fn ddb_key_schema(index: &Index) -> Result<Vec<KeySchemaElement>> {
    Ok(vec![
        KeySchemaElement::builder()
            .attribute_name(index.partition_attr())
            .key_type(KeyType::Hash)
            .build()
            .map_err(dokk_core::Error::store)?,
        KeySchemaElement::builder()
            .attribute_name(index.sort_attr())
            .key_type(KeyType::Range)
            .build()
            .map_err(dokk_core::Error::store)?,
    ])
}

/// Wraps an SDK failure as a store error, keeping the service error code.
fn store_error<E, R>(err: SdkError<E, R>) -> dokk_core::Error
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug + Send + Sync + 'static,
{
    match err.code().map(str::to_string) {
        Some(code) => dokk_core::Error::store_with_code(code, err),
        None => dokk_core::Error::store(err),
    }
}
