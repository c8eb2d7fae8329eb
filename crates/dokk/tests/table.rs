mod support;
use support::*;

use dokk::driver::Memory;
use dokk::{
    attributes, Condition, DeleteArg, GetArg, Index, PutArg, Table, UpdateArg, Value, CREATED_AT,
    UPDATED_AT,
};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn insert_then_get_strips_entity_prefixes() {
    let test = setup().await;
    let alice = pk(User, "alice");

    test.table
        .insert(
            &alice,
            &sk(User, "alice"),
            attributes! { "Email" => "alice@example.com", "Age" => 34 },
        )
        .await
        .unwrap();

    let item = test
        .table
        .get(&alice, &sk(User, "alice"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(item.get_str("PK"), Some("alice"));
    assert_eq!(item.get_str("SK"), Some("alice"));
    assert_eq!(item.get_str("Email"), Some("alice@example.com"));
    assert_eq!(item.get("Age"), Some(&Value::I64(34)));
    assert!(item.contains(CREATED_AT));
    assert_eq!(test.ops(), ["put", "get"]);
}

#[tokio::test]
async fn missing_item_is_none() {
    let test = setup().await;

    let item = test
        .table
        .get(&pk(User, "nobody"), &sk(User, "nobody"))
        .await
        .unwrap();

    assert!(item.is_none());
}

#[tokio::test]
async fn insert_twice_conflicts_and_keeps_original() {
    let test = setup().await;
    let alice = pk(User, "alice");
    let profile = sk(User, "alice");

    test.table
        .insert(&alice, &profile, attributes! { "Email" => "first@example.com" })
        .await
        .unwrap();

    let err = test
        .table
        .insert(&alice, &profile, attributes! { "Email" => "second@example.com" })
        .await
        .unwrap_err();

    assert!(err.is_conflict());
    assert!(!err.is_store());
    assert_eq!(err.conflict_key(), Some(&key(&alice, &profile)));
    assert!(!err.to_string().contains("alice"));

    let item = test.table.get(&alice, &profile).await.unwrap().unwrap();
    assert_eq!(item.get_str("Email"), Some("first@example.com"));
}

#[tokio::test]
async fn key_attributes_override_caller_attributes() {
    let test = setup().await;
    let alice = pk(User, "alice");

    test.table
        .insert(
            &alice,
            &sk(Group, "group1"),
            attributes! { "PK" => "USER#mallory", "SK" => "GROUP#other" },
        )
        .await
        .unwrap();

    let item = test
        .table
        .get(&alice, &sk(Group, "group1"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(item.get_str("PK"), Some("alice"));
    assert_eq!(item.get_str("SK"), Some("group1"));
}

#[tokio::test]
async fn put_overwrites_unless_told_not_to() {
    let test = setup().await;
    let alice = pk(User, "alice");
    let profile = sk(User, "alice");

    test.table
        .put(&alice, &profile, attributes! { "Email" => "old@example.com" }, true)
        .await
        .unwrap();
    test.table
        .put(&alice, &profile, attributes! { "Email" => "new@example.com" }, true)
        .await
        .unwrap();

    let item = test.table.get(&alice, &profile).await.unwrap().unwrap();
    assert_eq!(item.get_str("Email"), Some("new@example.com"));

    let err = test
        .table
        .put(&alice, &profile, attributes! {}, false)
        .await
        .unwrap_err();
    assert!(err.is_conflict());

    // The builder form behaves the same
    let err = test
        .table
        .put_with(PutArg::new(&alice, &profile).allow_overwrite(false))
        .await
        .unwrap_err();
    assert!(err.is_conflict());
}

#[tokio::test]
async fn delete_is_idempotent_by_default() {
    let test = setup().await;
    let alice = pk(User, "alice");
    let profile = sk(User, "alice");

    test.table.delete(&alice, &profile, None).await.unwrap();

    let err = test
        .table
        .delete_with(DeleteArg::new(&alice, &profile).idempotent(false))
        .await
        .unwrap_err();
    assert!(err.is_conflict());
    assert_eq!(err.conflict_key(), Some(&key(&alice, &profile)));
}

#[tokio::test]
async fn delete_with_unmet_condition_keeps_item() {
    let test = setup().await;
    let alice = pk(User, "alice");
    let profile = sk(User, "alice");

    test.table
        .insert(&alice, &profile, attributes! { "Status" => "active" })
        .await
        .unwrap();

    let err = test
        .table
        .delete(&alice, &profile, Some(Condition::eq("Status", "deleted")))
        .await
        .unwrap_err();
    assert!(err.is_conflict());
    assert!(test.table.get(&alice, &profile).await.unwrap().is_some());

    test.table
        .delete(&alice, &profile, Some(Condition::eq("Status", "active")))
        .await
        .unwrap();
    assert!(test.table.get(&alice, &profile).await.unwrap().is_none());
}

#[tokio::test]
async fn update_sets_attributes_and_timestamp() {
    let test = setup().await;
    let alice = pk(User, "alice");
    let profile = sk(User, "alice");

    test.table
        .update_attributes(&alice, &profile, attributes! { "Email" => "alice@example.com" })
        .await
        .unwrap();

    let item = test.table.get(&alice, &profile).await.unwrap().unwrap();
    assert_eq!(item.get_str("Email"), Some("alice@example.com"));
    assert!(item.contains(UPDATED_AT));
    assert!(!item.contains(CREATED_AT));

    let err = test
        .table
        .update(
            UpdateArg::new(&alice, &profile)
                .set("Email", "mallory@example.com")
                .condition(Condition::eq("Email", "someone@example.com")),
        )
        .await
        .unwrap_err();
    assert!(err.is_conflict());

    let item = test.table.get(&alice, &profile).await.unwrap().unwrap();
    assert_eq!(item.get_str("Email"), Some("alice@example.com"));
}

#[tokio::test]
async fn timestamps_can_be_disabled() {
    let test = setup_with(Memory::new(), |builder| {
        builder.timestamps(false);
    })
    .await;
    let alice = pk(User, "alice");
    let profile = sk(User, "alice");

    test.table
        .insert(&alice, &profile, attributes! { "Email" => "alice@example.com" })
        .await
        .unwrap();

    let item = test.table.get(&alice, &profile).await.unwrap().unwrap();
    assert!(!item.contains(CREATED_AT));
    assert_eq!(item.len(), 3);
}

#[tokio::test]
async fn get_with_projection() {
    let test = setup().await;
    let alice = pk(User, "alice");
    let profile = sk(User, "alice");

    test.table
        .insert(
            &alice,
            &profile,
            attributes! { "Email" => "alice@example.com", "Age" => 34 },
        )
        .await
        .unwrap();

    let item = test
        .table
        .get_with(GetArg::new(&alice, &profile).attributes(["Email"]).consistent(true))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(item.len(), 3);
    assert_eq!(item.get_str("PK"), Some("alice"));
    assert_eq!(item.get_str("SK"), Some("alice"));
    assert_eq!(item.get_str("Email"), Some("alice@example.com"));
    assert!(!item.contains("Age"));
}

#[tokio::test]
async fn custom_primary_index() {
    let test = setup_with(Memory::new(), |builder| {
        builder
            .primary_index(Index::primary_with("pk", "sk").unwrap())
            .indices([Index::secondary("by_sort", "sk", "pk").unwrap()]);
    })
    .await;
    let alice = pk(User, "alice");
    let profile = sk(User, "alice");

    test.table
        .insert(&alice, &profile, attributes! {})
        .await
        .unwrap();

    let item = test.table.get(&alice, &profile).await.unwrap().unwrap();
    assert_eq!(item.get_str("pk"), Some("alice"));
    assert!(!item.contains("PK"));
}

#[tokio::test]
async fn registered_entities_reject_other_keys_before_any_request() {
    let test = setup_with(Memory::new(), |builder| {
        builder.entity::<User>().entity::<Group>();
    })
    .await;

    test.table
        .insert(&pk(User, "alice"), &sk(Group, "group1"), attributes! {})
        .await
        .unwrap();

    let err = test
        .table
        .insert(&pk(User, "alice"), &sk(Order, "1"), attributes! {})
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert_eq!(err.to_string(), "validation failed: unknown entity `ORDER`");
    assert_eq!(test.ops(), ["put"]);
}

#[tokio::test]
async fn missing_table_is_a_store_error() {
    init_tracing();

    let table = Table::builder("missing").build(Memory::new()).unwrap();

    let err = table
        .get(&pk(User, "alice"), &sk(User, "alice"))
        .await
        .unwrap_err();

    assert!(err.is_store());
    assert_eq!(err.store_code(), Some("ResourceNotFoundException"));
}

#[tokio::test]
async fn builder_rejects_bad_configuration() {
    let err = Table::builder("").build(Memory::new()).unwrap_err();
    assert!(err.is_validation());

    let err = Table::builder("dokk")
        .index(Index::primary())
        .build(Memory::new())
        .unwrap_err();
    assert!(err.is_validation());
}

#[tokio::test]
async fn connect_by_url() {
    init_tracing();

    let table = Table::builder("dokk")
        .connect("memory://?page_size=2")
        .await
        .unwrap();
    table.create_table().await.unwrap();
    assert_eq!(table.name(), "dokk");
    assert_eq!(table.indices(), [Index::inverse()]);

    let err = Table::builder("dokk")
        .connect("postgresql://localhost/dokk")
        .await
        .unwrap_err();
    assert!(err.is_invalid_connection_url());

    let err = Table::builder("dokk").connect("not a url").await.unwrap_err();
    assert!(err.is_invalid_connection_url());
}
