use dokk_core::{driver::Driver, Error, Result};

use std::sync::Arc;
use url::Url;

/// Opens the driver named by the URL scheme.
pub(super) async fn connect(url: &str) -> Result<Arc<dyn Driver>> {
    let parsed = Url::parse(url)
        .map_err(|err| Error::invalid_connection_url(format!("malformed URL: {err}")))?;

    match parsed.scheme() {
        "dynamodb" => connect_dynamodb(url).await,
        "memory" => connect_memory(url),
        scheme => Err(Error::invalid_connection_url(format!(
            "unsupported store; scheme={scheme}"
        ))),
    }
}

#[cfg(feature = "dynamodb")]
async fn connect_dynamodb(url: &str) -> Result<Arc<dyn Driver>> {
    let driver = dokk_driver_dynamodb::DynamoDb::connect(url).await?;
    Ok(Arc::new(driver))
}

#[cfg(not(feature = "dynamodb"))]
async fn connect_dynamodb(_url: &str) -> Result<Arc<dyn Driver>> {
    Err(Error::invalid_connection_url("`dynamodb` feature not enabled"))
}

#[cfg(feature = "memory")]
fn connect_memory(url: &str) -> Result<Arc<dyn Driver>> {
    let driver = dokk_driver_memory::Memory::connect(url)?;
    Ok(Arc::new(driver))
}

#[cfg(not(feature = "memory"))]
fn connect_memory(_url: &str) -> Result<Arc<dyn Driver>> {
    Err(Error::invalid_connection_url("`memory` feature not enabled"))
}
