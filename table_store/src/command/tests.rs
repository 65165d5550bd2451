use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::command::{CreateCommand, DeleteCommand, UpdateCommand};
use crate::errors::StoreError;
use crate::record::TableRecord;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Person {
    id: i64,
    name: String,
    email: String,
    age: i32,
}

impl TableRecord for Person {
    type Id = i64;

    fn table_name() -> &'static str {
        "people"
    }

    fn identifier_column() -> &'static str {
        "id"
    }

    fn columns() -> &'static [&'static str] {
        &["id", "name", "email", "age"]
    }
}

#[test]
fn create_preserves_field_order() {
    let command = CreateCommand::<Person>::builder()
        .set("name", "Ada")
        .set("email", "ada@example.com")
        .set("age", 36)
        .build()
        .unwrap();

    let columns: Vec<&str> = command.fields().iter().map(|(c, _)| c.as_str()).collect();
    assert_eq!(columns, vec!["name", "email", "age"]);
    assert_eq!(command.fields()[2].1, json!(36));
}

#[test]
fn create_rejects_identifier_column() {
    let err = CreateCommand::<Person>::builder()
        .set("id", 7)
        .set("name", "Ada")
        .build()
        .unwrap_err();

    assert!(matches!(
        err,
        StoreError::IdentifierNotWritable { column: "id", .. }
    ));
}

#[test]
fn create_rejects_unknown_column() {
    let err = CreateCommand::<Person>::builder()
        .set("nickname", "ada")
        .build()
        .unwrap_err();

    match err {
        StoreError::UnknownColumn { table, column } => {
            assert_eq!(table, "people");
            assert_eq!(column, "nickname");
        }
        other => panic!("expected UnknownColumn, got {:?}", other),
    }
}

#[test]
fn create_rejects_duplicate_column() {
    let err = CreateCommand::<Person>::builder()
        .set("name", "Ada")
        .set("name", "Grace")
        .build()
        .unwrap_err();

    assert!(matches!(err, StoreError::DuplicateColumn { .. }));
}

#[test]
fn create_rejects_empty_column_set() {
    let err = CreateCommand::<Person>::builder().build().unwrap_err();
    assert!(matches!(err, StoreError::EmptyColumnSet { table: "people" }));
}

#[test]
fn create_rejects_malformed_column_name() {
    let err = CreateCommand::<Person>::builder()
        .set("name; --", "Ada")
        .build()
        .unwrap_err();

    assert!(matches!(err, StoreError::Identifier(_)));
}

#[test]
fn update_carries_identifier_and_set_list() {
    let command = UpdateCommand::<Person>::builder(42)
        .set("age", 37)
        .build()
        .unwrap();

    assert_eq!(*command.id(), 42);
    assert_eq!(command.fields().len(), 1);
    assert_eq!(command.fields()[0].0.as_str(), "age");
    assert_eq!(command.fields()[0].1, json!(37));
}

#[test]
fn update_rejects_identifier_in_set_list() {
    let err = UpdateCommand::<Person>::builder(42)
        .set("id", 43)
        .build()
        .unwrap_err();

    assert!(matches!(err, StoreError::IdentifierNotWritable { .. }));
}

#[test]
fn update_rejects_empty_set_list() {
    let err = UpdateCommand::<Person>::builder(42).build().unwrap_err();
    assert!(matches!(err, StoreError::EmptyColumnSet { .. }));
}

#[test]
fn delete_holds_identifier_only() {
    let command = DeleteCommand::<Person>::new(42);
    assert_eq!(*command.id(), 42);
}
