use dokk_core::driver::operation::{
    BatchGet, ConditionCheck, CreateTable, Delete, Get, Put, Query, TransactItem, TransactWrite,
    Update,
};
use dokk_core::driver::{Driver, Operation};
use dokk_core::{
    attributes, Attributes, CancellationReason, Condition, Index, KeyCondition, SortCondition,
};
use dokk_driver_memory::Memory;
use pretty_assertions::assert_eq;

const TABLE: &str = "test-table";

async fn setup(driver: Memory) -> Memory {
    driver
        .exec(Operation::CreateTable(CreateTable {
            table: TABLE.to_string(),
            primary_index: Index::PRIMARY,
            secondary_indices: vec![Index::INVERSE],
        }))
        .await
        .unwrap();
    driver
}

fn item(pk: &str, sk: &str) -> Attributes {
    attributes! { "PK" => pk, "SK" => sk }
}

fn put(pk: &str, sk: &str, condition: Option<Condition>) -> Put {
    Put {
        table: TABLE.to_string(),
        item: item(pk, sk),
        condition,
    }
}

fn query(pk: &str, prefix: &str, index: Index) -> Query {
    Query {
        table: TABLE.to_string(),
        key_condition: KeyCondition {
            partition_attr: index.partition_attr().to_string(),
            partition_value: pk.to_string(),
            sort_attr: index.sort_attr().to_string(),
            sort: Some(SortCondition::BeginsWith(prefix.to_string())),
        },
        index,
        projection: None,
        consistent: false,
        limit: None,
        forward: true,
        exclusive_start_key: None,
    }
}

async fn query_all(driver: &Memory, mut op: Query) -> (Vec<Attributes>, usize) {
    let mut items = vec![];
    let mut pages = 0;

    loop {
        let page = driver
            .exec(Operation::Query(op.clone()))
            .await
            .unwrap()
            .into_page()
            .unwrap();
        pages += 1;
        items.extend(page.items);

        match page.last_evaluated_key {
            Some(key) => op.exclusive_start_key = Some(key),
            None => return (items, pages),
        }
    }
}

#[tokio::test]
async fn put_get_delete() {
    let driver = setup(Memory::new()).await;

    driver
        .exec(put("GROUP#g1", "USER#alice", None).into())
        .await
        .unwrap();
    assert_eq!(driver.item_count(TABLE), 1);

    let found = driver
        .exec(
            Get {
                table: TABLE.to_string(),
                key: item("GROUP#g1", "USER#alice"),
                projection: Some(vec!["SK".to_string()]),
                consistent: true,
            }
            .into(),
        )
        .await
        .unwrap()
        .into_item()
        .unwrap();
    assert_eq!(found, Some(attributes! { "SK" => "USER#alice" }));

    driver
        .exec(
            Delete {
                table: TABLE.to_string(),
                key: item("GROUP#g1", "USER#alice"),
                condition: None,
            }
            .into(),
        )
        .await
        .unwrap();
    assert_eq!(driver.item_count(TABLE), 0);
}

#[tokio::test]
async fn failed_condition_is_a_conflict() {
    let driver = setup(Memory::new()).await;
    let not_exists = Some(Condition::attribute_not_exists("PK"));

    driver
        .exec(put("USER#alice", "USER#alice", not_exists.clone()).into())
        .await
        .unwrap();

    let err = driver
        .exec(put("USER#alice", "USER#alice", not_exists).into())
        .await
        .unwrap_err();
    assert!(err.is_conflict());
}

#[tokio::test]
async fn update_creates_missing_items() {
    let driver = setup(Memory::new()).await;

    driver
        .exec(
            Update {
                table: TABLE.to_string(),
                key: item("USER#bob", "USER#bob"),
                set: attributes! { "Plan" => "free" },
                condition: None,
            }
            .into(),
        )
        .await
        .unwrap();

    let found = driver
        .exec(
            Get {
                table: TABLE.to_string(),
                key: item("USER#bob", "USER#bob"),
                projection: None,
                consistent: false,
            }
            .into(),
        )
        .await
        .unwrap()
        .into_item()
        .unwrap()
        .unwrap();
    assert_eq!(found["Plan"], "free");
    assert_eq!(found["PK"], "USER#bob");
}

#[tokio::test]
async fn query_paginates_in_sort_order() {
    let driver = setup(Memory::new().with_page_size(3)).await;

    for i in (0..10).rev() {
        driver
            .exec(put("GROUP#g1", &format!("USER#{i:02}"), None).into())
            .await
            .unwrap();
    }
    driver
        .exec(put("GROUP#g1", "ADMIN#00", None).into())
        .await
        .unwrap();
    driver
        .exec(put("GROUP#g2", "USER#00", None).into())
        .await
        .unwrap();

    let (items, pages) = query_all(&driver, query("GROUP#g1", "USER#", Index::PRIMARY)).await;
    let sks: Vec<_> = items.iter().map(|i| i["SK"].as_str().unwrap()).collect();
    let expected: Vec<_> = (0..10).map(|i| format!("USER#{i:02}")).collect();
    assert_eq!(sks, expected);
    assert_eq!(pages, 4);

    let mut reverse = query("GROUP#g1", "USER#", Index::PRIMARY);
    reverse.forward = false;
    let (items, _) = query_all(&driver, reverse).await;
    let sks: Vec<_> = items.iter().map(|i| i["SK"].as_str().unwrap()).collect();
    let expected: Vec<_> = (0..10).rev().map(|i| format!("USER#{i:02}")).collect();
    assert_eq!(sks, expected);
}

#[tokio::test]
async fn full_last_page_still_carries_a_resume_key() {
    let driver = setup(Memory::new().with_page_size(2)).await;

    for sk in ["USER#a", "USER#b"] {
        driver
            .exec(put("GROUP#g1", sk, None).into())
            .await
            .unwrap();
    }

    let (items, pages) = query_all(&driver, query("GROUP#g1", "USER#", Index::PRIMARY)).await;
    assert_eq!(items.len(), 2);
    assert_eq!(pages, 2);
}

#[tokio::test]
async fn inverse_index_query() {
    let driver = setup(Memory::new().with_page_size(1)).await;

    for (pk, sk) in [
        ("USER#alice", "GROUP#g1"),
        ("USER#bob", "GROUP#g1"),
        ("USER#bob", "GROUP#g2"),
    ] {
        driver.exec(put(pk, sk, None).into()).await.unwrap();
    }

    let (items, _) = query_all(&driver, query("GROUP#g1", "USER#", Index::INVERSE)).await;
    let pks: Vec<_> = items.iter().map(|i| i["PK"].as_str().unwrap()).collect();
    assert_eq!(pks, ["USER#alice", "USER#bob"]);
}

#[tokio::test]
async fn unknown_index_is_a_store_error() {
    let driver = setup(Memory::new()).await;
    let index = Index::secondary("GSI_9", "A", "B").unwrap();

    let err = driver
        .exec(query("GROUP#g1", "USER#", index).into())
        .await
        .unwrap_err();
    assert!(err.is_store());
    assert_eq!(err.store_code(), Some("ValidationException"));
}

#[tokio::test]
async fn missing_table_is_a_store_error() {
    let driver = Memory::new();
    let err = driver
        .exec(put("USER#a", "USER#a", None).into())
        .await
        .unwrap_err();
    assert_eq!(err.store_code(), Some("ResourceNotFoundException"));
}

#[tokio::test]
async fn transaction_is_all_or_nothing() {
    let driver = setup(Memory::new()).await;
    let not_exists = Some(Condition::attribute_not_exists("PK"));

    driver
        .exec(put("USER#alice", "ORDER#1", None).into())
        .await
        .unwrap();

    let err = driver
        .exec(
            TransactWrite {
                items: vec![
                    TransactItem::Put(put("USER#bob", "ORDER#2", not_exists.clone())),
                    TransactItem::Put(put("USER#alice", "ORDER#1", not_exists)),
                    TransactItem::ConditionCheck(ConditionCheck {
                        table: TABLE.to_string(),
                        key: item("USER#carol", "ORDER#3"),
                        condition: Condition::attribute_not_exists("PK"),
                    }),
                ],
            }
            .into(),
        )
        .await
        .unwrap_err();

    assert!(err.is_conflict());
    assert_eq!(err.conflict_position(), Some(1));
    assert_eq!(
        err.cancellation_reasons(),
        Some(&[None, Some(CancellationReason::ConditionalCheckFailed), None][..])
    );
    assert_eq!(driver.item_count(TABLE), 1);
}

#[tokio::test]
async fn transaction_rejects_two_entries_on_one_item() {
    let driver = setup(Memory::new()).await;

    let err = driver
        .exec(
            TransactWrite {
                items: vec![
                    TransactItem::Put(put("USER#alice", "ORDER#1", None)),
                    TransactItem::Put(put("USER#alice", "ORDER#1", None)),
                ],
            }
            .into(),
        )
        .await
        .unwrap_err();

    assert_eq!(err.store_code(), Some("ValidationException"));
    assert_eq!(driver.item_count(TABLE), 0);
}

#[tokio::test]
async fn transaction_applies_every_entry() {
    let driver = setup(Memory::new()).await;

    driver
        .exec(put("GROUP#g1", "USER#alice", None).into())
        .await
        .unwrap();

    driver
        .exec(
            TransactWrite {
                items: vec![
                    TransactItem::Delete(Delete {
                        table: TABLE.to_string(),
                        key: item("GROUP#g1", "USER#alice"),
                        condition: Some(Condition::attribute_exists("PK")),
                    }),
                    TransactItem::Put(put("GROUP#g2", "USER#alice", None)),
                ],
            }
            .into(),
        )
        .await
        .unwrap();

    let (g1, _) = query_all(&driver, query("GROUP#g1", "USER#", Index::PRIMARY)).await;
    let (g2, _) = query_all(&driver, query("GROUP#g2", "USER#", Index::PRIMARY)).await;
    assert!(g1.is_empty());
    assert_eq!(g2.len(), 1);
}

#[tokio::test]
async fn batch_get_reports_unprocessed_keys() {
    let driver = setup(Memory::new().with_batch_get_capacity(2)).await;

    for sk in ["ORDER#1", "ORDER#2", "ORDER#3"] {
        driver
            .exec(put("USER#alice", sk, None).into())
            .await
            .unwrap();
    }

    let res = driver
        .exec(
            BatchGet {
                table: TABLE.to_string(),
                keys: vec![
                    item("USER#alice", "ORDER#1"),
                    item("USER#alice", "ORDER#9"),
                    item("USER#alice", "ORDER#3"),
                ],
                projection: None,
                consistent: true,
            }
            .into(),
        )
        .await
        .unwrap()
        .into_batch_get()
        .unwrap();

    assert_eq!(res.items, vec![item("USER#alice", "ORDER#1")]);
    assert_eq!(res.unprocessed_keys, vec![item("USER#alice", "ORDER#3")]);
}

#[test]
fn connect_url() {
    assert_eq!(Memory::connect("memory://").unwrap().page_size(), 100);
    assert_eq!(
        Memory::connect("memory://?page_size=7").unwrap().page_size(),
        7
    );

    for url in [
        "memory://?page_size=0",
        "memory://?page_size=x",
        "memory://?other=1",
        "dynamodb://localhost",
    ] {
        let err = Memory::connect(url).unwrap_err();
        assert!(err.is_invalid_connection_url(), "{url}: {err}");
    }
}
