use dokk_core::Driver;
use dokk_driver_dynamodb::DynamoDb;

#[tokio::test]
async fn connect_to_local_endpoint() {
    let driver = DynamoDb::connect("dynamodb://localhost:8000?region=eu-west-1")
        .await
        .unwrap();

    let config = driver.client().config();
    assert_eq!(config.region().map(|r| r.to_string()).as_deref(), Some("eu-west-1"));
    assert_eq!(driver.capability().max_transact_items, 100);
    assert!(!driver.capability().consistent_secondary_reads);
}

#[tokio::test]
async fn local_endpoint_defaults_region() {
    let driver = DynamoDb::connect("dynamodb://localhost:8000").await.unwrap();

    let config = driver.client().config();
    assert_eq!(config.region().map(|r| r.to_string()).as_deref(), Some("us-east-1"));
}

#[tokio::test]
async fn rejects_other_schemes() {
    let err = DynamoDb::connect("memory://").await.unwrap_err();
    assert!(err.is_invalid_connection_url());
}

#[tokio::test]
async fn rejects_unknown_parameters() {
    let err = DynamoDb::connect("dynamodb://localhost:8000?page_size=3")
        .await
        .unwrap_err();
    assert!(err.is_invalid_connection_url());
    assert!(err.to_string().contains("page_size"));
}

#[tokio::test]
async fn rejects_malformed_urls() {
    let err = DynamoDb::connect("not a url").await.unwrap_err();
    assert!(err.is_invalid_connection_url());
    assert!(!err.is_store());
}
