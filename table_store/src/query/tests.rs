use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::errors::StoreError;
use crate::query::{Comparator, QueryCommand, SqlCompiler};
use crate::record::TableRecord;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Person {
    id: i64,
    name: String,
    age: i32,
    status: i32,
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
        &["id", "name", "age", "status"]
    }
}

fn compile(command: &QueryCommand<Person>) -> (String, Vec<serde_json::Value>) {
    let compiled = SqlCompiler::compile_select(command).unwrap();
    (compiled.sql, compiled.params)
}

#[test]
fn single_comparator_operator_mapping() {
    let cases: Vec<(Comparator, &str)> = vec![
        (Comparator::eq(36), "SELECT * FROM people WHERE age = $1"),
        (Comparator::ne(36), "SELECT * FROM people WHERE age != $1"),
        (Comparator::gt(36), "SELECT * FROM people WHERE age > $1"),
        (Comparator::gte(36), "SELECT * FROM people WHERE age >= $1"),
        (Comparator::lt(36), "SELECT * FROM people WHERE age < $1"),
        (Comparator::lte(36), "SELECT * FROM people WHERE age <= $1"),
    ];

    for (comparator, expected) in cases {
        let command = QueryCommand::<Person>::builder()
            .filter("age", comparator)
            .build()
            .unwrap();
        let (sql, params) = compile(&command);
        assert_eq!(sql, expected);
        assert_eq!(params, vec![json!(36)]);
    }
}

#[test]
fn gte_compiles_with_operand_as_parameter() {
    let command = QueryCommand::<Person>::builder()
        .filter("age", Comparator::gte(18))
        .build()
        .unwrap();

    let (sql, params) = compile(&command);
    assert_eq!(sql, "SELECT * FROM people WHERE age >= $1");
    assert_eq!(params, vec![json!(18)]);
}

#[test]
fn in_expands_one_placeholder_per_candidate() {
    let command = QueryCommand::<Person>::builder()
        .filter("status", Comparator::in_values([1, 2, 3]))
        .build()
        .unwrap();

    let (sql, params) = compile(&command);
    assert_eq!(sql, "SELECT * FROM people WHERE status IN ($1, $2, $3)");
    assert_eq!(params, vec![json!(1), json!(2), json!(3)]);
}

#[test]
fn not_in_expands_like_in() {
    let command = QueryCommand::<Person>::builder()
        .filter("status", Comparator::not_in_values([4, 5]))
        .build()
        .unwrap();

    let (sql, params) = compile(&command);
    assert_eq!(sql, "SELECT * FROM people WHERE status NOT IN ($1, $2)");
    assert_eq!(params, vec![json!(4), json!(5)]);
}

#[test]
fn like_binds_pattern_as_string_parameter() {
    let command = QueryCommand::<Person>::builder()
        .filter("name", Comparator::like("Ada%"))
        .build()
        .unwrap();

    let (sql, params) = compile(&command);
    assert_eq!(sql, "SELECT * FROM people WHERE name LIKE $1");
    assert_eq!(params, vec![json!("Ada%")]);

    let command = QueryCommand::<Person>::builder()
        .filter("name", Comparator::not_like("%test%"))
        .build()
        .unwrap();

    let (sql, _) = compile(&command);
    assert_eq!(sql, "SELECT * FROM people WHERE name NOT LIKE $1");
}

#[test]
fn clauses_follow_insertion_order() {
    let command = QueryCommand::<Person>::builder()
        .filter("age", Comparator::gte(18))
        .filter("status", Comparator::in_values([1, 2]))
        .filter("name", Comparator::like("A%"))
        .build()
        .unwrap();

    let (sql, params) = compile(&command);
    assert_eq!(
        sql,
        "SELECT * FROM people WHERE age >= $1 AND status IN ($2, $3) AND name LIKE $4"
    );
    assert_eq!(params, vec![json!(18), json!(1), json!(2), json!("A%")]);
}

#[test]
fn compilation_is_deterministic() {
    let build = || {
        QueryCommand::<Person>::builder()
            .filter("status", Comparator::in_values([3, 1, 2]))
            .filter("age", Comparator::lt(65))
            .build()
            .unwrap()
    };

    let first = SqlCompiler::compile_select(&build()).unwrap();
    let second = SqlCompiler::compile_select(&build()).unwrap();

    assert_eq!(first.sql, second.sql);
    assert_eq!(first.params, second.params);
}

#[test]
fn placeholder_count_matches_parameter_count() {
    let command = QueryCommand::<Person>::builder()
        .filter("status", Comparator::in_values([1, 2, 3, 4]))
        .filter("age", Comparator::gte(18))
        .filter("name", Comparator::ne("nobody"))
        .build()
        .unwrap();

    let (sql, params) = compile(&command);
    assert_eq!(sql.matches('$').count(), params.len());
    assert_eq!(params.len(), 6);
}

#[test]
fn empty_predicate_set_is_rejected_at_build() {
    let err = QueryCommand::<Person>::builder().build().unwrap_err();
    assert!(matches!(err, StoreError::EmptyPredicate));
}

#[test]
fn empty_in_operand_is_rejected_at_compile() {
    let command = QueryCommand::<Person>::builder()
        .filter("status", Comparator::in_values(Vec::<i32>::new()))
        .build()
        .unwrap();

    let err = SqlCompiler::compile_select(&command).unwrap_err();
    match err {
        StoreError::EmptyOperand { column, operator } => {
            assert_eq!(column, "status");
            assert_eq!(operator, "IN");
        }
        other => panic!("expected EmptyOperand, got {:?}", other),
    }
}

#[test]
fn empty_not_in_operand_is_rejected_at_compile() {
    let command = QueryCommand::<Person>::builder()
        .filter("status", Comparator::not_in_values(Vec::<i32>::new()))
        .build()
        .unwrap();

    let err = SqlCompiler::compile_select(&command).unwrap_err();
    assert!(matches!(err, StoreError::EmptyOperand { .. }));
}

#[test]
fn unknown_column_is_rejected_at_build() {
    let err = QueryCommand::<Person>::builder()
        .filter("nickname", Comparator::eq("ada"))
        .build()
        .unwrap_err();

    assert!(matches!(err, StoreError::UnknownColumn { .. }));
}

#[test]
fn duplicate_column_is_rejected_at_build() {
    let err = QueryCommand::<Person>::builder()
        .filter("age", Comparator::gte(18))
        .filter("age", Comparator::lt(65))
        .build()
        .unwrap_err();

    assert!(matches!(err, StoreError::DuplicateColumn { .. }));
}

#[test]
fn identifier_column_is_queryable() {
    let command = QueryCommand::<Person>::builder()
        .filter("id", Comparator::in_values([1i64, 2, 3]))
        .build()
        .unwrap();

    let (sql, _) = compile(&command);
    assert_eq!(sql, "SELECT * FROM people WHERE id IN ($1, $2, $3)");
}

#[test]
fn malformed_column_name_is_rejected_at_build() {
    let err = QueryCommand::<Person>::builder()
        .filter("age; DROP TABLE people; --", Comparator::gte(18))
        .build()
        .unwrap_err();

    assert!(matches!(err, StoreError::Identifier(_)));
}
