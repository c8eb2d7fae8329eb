use dokk_core::{
    EntityKey, EntityName, EntityRegistry, KeyPart, PartitionKey, PrefixSortKey, PrimaryKey,
    SortKey,
};
use pretty_assertions::assert_eq;

struct User;

impl EntityName for User {
    const NAME: &'static str = "USER";
}

struct Group;

impl EntityName for Group {
    const NAME: &'static str = "GROUP";
}

struct Order;

impl EntityName for Order {
    const NAME: &'static str = "ORDER";
}

struct Impostor;

impl EntityName for Impostor {
    const NAME: &'static str = "USER";
}

const VALUES: &[&str] = &[
    "alice",
    "bob@example.com",
    "0",
    "2020-02-15T19:09:38",
    "a b c",
    "ü",
];

#[test]
fn partition_and_sort_keys_encode() {
    let pk = PartitionKey::new(Group, "group1").unwrap();
    let sk = SortKey::new(User, "alice").unwrap();

    assert_eq!(pk.encode(), "GROUP#group1");
    assert_eq!(pk.to_string(), "GROUP#group1");
    assert_eq!(pk.entity(), "GROUP");
    assert_eq!(pk.value(), "group1");
    assert_eq!(sk.encode(), "USER#alice");
}

#[test]
fn decode_inverts_encode() {
    for value in VALUES {
        let pk = PartitionKey::new(User, *value).unwrap();
        let parsed = PartitionKey::parse(&pk.encode()).unwrap();
        assert_eq!(parsed, pk);
        assert_eq!(parsed.value(), *value);

        let part = KeyPart::decode(&pk.encode()).unwrap();
        assert_eq!((part.entity(), part.value()), ("USER", Some(*value)));
    }
}

#[test]
fn invalid_values_are_rejected() {
    for value in ["", "#", "a#b", "#alice", "alice#"] {
        assert!(PartitionKey::new(User, value).unwrap_err().is_validation());
        assert!(SortKey::new(User, value).unwrap_err().is_validation());
    }
}

#[test]
fn prefix_is_a_proper_prefix_of_every_sort_key() {
    let prefix = PrefixSortKey::new(User);
    assert_eq!(prefix.encode(), "USER#");

    for value in VALUES {
        let sk = SortKey::new(User, *value).unwrap();
        let encoded = sk.encode();
        assert!(encoded.starts_with(&prefix.encode()));
        assert!(encoded.len() > prefix.encode().len());
        assert!(sk.has_prefix(&prefix));
    }

    let other = SortKey::new(Order, "alice").unwrap();
    assert!(!other.encode().starts_with(&prefix.encode()));
    assert!(!other.has_prefix(&prefix));
}

#[test]
fn prefix_parse_rejects_values() {
    assert_eq!(PrefixSortKey::parse("USER#").unwrap(), PrefixSortKey::new(User));
    assert!(PrefixSortKey::parse("USER#alice")
        .unwrap_err()
        .is_validation());
    assert!(PartitionKey::parse("USER#").unwrap_err().is_validation());
}

#[test]
fn keys_hash_by_encoding() {
    use std::collections::HashSet;

    let a = PrimaryKey::new(
        &PartitionKey::new(Group, "g1").unwrap(),
        &SortKey::new(User, "alice").unwrap(),
    );
    let b = PrimaryKey::new(
        &PartitionKey::parse("GROUP#g1").unwrap(),
        &SortKey::parse("USER#alice").unwrap(),
    );

    let set: HashSet<_> = [a.clone(), b].into_iter().collect();
    assert_eq!(set.len(), 1);
    assert!(set.contains(&a));
}

#[test]
fn debug_never_shows_values() {
    let pk = PartitionKey::new(User, "alice").unwrap();
    let sk = SortKey::new(Order, "order-1").unwrap();
    let key = PrimaryKey::new(&pk, &sk);

    assert_eq!(format!("{pk:?}"), "PartitionKey(USER#…)");
    assert_eq!(format!("{sk:?}"), "SortKey(ORDER#…)");
    assert_eq!(format!("{key:?}"), "PrimaryKey(USER#…, ORDER#…)");
    assert_eq!(format!("{:?}", PrefixSortKey::new(User)), "PrefixSortKey(USER#)");
}

#[test]
fn primary_key_serializes_per_index() {
    let key = PrimaryKey::new(
        &PartitionKey::new(Group, "g1").unwrap(),
        &SortKey::new(User, "alice").unwrap(),
    );

    let attrs = key.serialize(&dokk_core::Index::PRIMARY);
    assert_eq!(attrs["PK"], "GROUP#g1");
    assert_eq!(attrs["SK"], "USER#alice");

    let round_trip = PrimaryKey::from_attributes(&dokk_core::Index::PRIMARY, &attrs).unwrap();
    assert_eq!(round_trip, key);
}

#[test]
fn registry_decodes_registered_entities() {
    let mut registry = EntityRegistry::new();
    registry
        .register::<User>()
        .unwrap()
        .register::<Group>()
        .unwrap();

    assert!(registry.contains("USER"));
    assert_eq!(registry.entities().collect::<Vec<_>>(), ["USER", "GROUP"]);

    let part = registry.decode("GROUP#g1").unwrap();
    assert!(part.is::<Group>());
    assert_eq!(part.value(), Some("g1"));

    let err = registry.decode("ORDER#1").unwrap_err();
    assert!(err.is_validation());
    assert_eq!(err.to_string(), "validation failed: unknown entity `ORDER`");
}

#[test]
fn registry_rejects_token_reuse() {
    let mut registry = EntityRegistry::new();
    registry.register::<User>().unwrap();

    // registering the same type again is fine
    registry.register::<User>().unwrap();

    let err = registry.register::<Impostor>().unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn decode_as_requires_the_entity() {
    assert!(KeyPart::decode_as::<User>("USER#alice").is_ok());
    assert!(KeyPart::decode_as::<User>("GROUP#alice")
        .unwrap_err()
        .is_validation());
}
