//! Record metadata trait.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

/// Metadata a record type declares about its table.
///
/// The identifier column is the record's unique key: assigned by the store
/// on insert and immutable afterwards. `columns()` lists every column,
/// identifier included, and drives command validation.
///
/// ```
/// use table_store::TableRecord;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// pub struct Person {
///     pub id: i64,
///     pub name: String,
///     pub age: i32,
/// }
///
/// impl TableRecord for Person {
///     type Id = i64;
///
///     fn table_name() -> &'static str {
///         "people"
///     }
///
///     fn identifier_column() -> &'static str {
///         "id"
///     }
///
///     fn columns() -> &'static [&'static str] {
///         &["id", "name", "age"]
///     }
/// }
/// ```
pub trait TableRecord:
    Clone + Send + Sync + Debug + Serialize + for<'de> Deserialize<'de>
{
    /// The type of the identifier column (i32, i64, Uuid, String, ...).
    type Id: Clone
        + Send
        + Sync
        + Debug
        + Unpin
        + for<'q> sqlx::Encode<'q, sqlx::Postgres>
        + for<'r> sqlx::Decode<'r, sqlx::Postgres>
        + sqlx::Type<sqlx::Postgres>;

    /// The table name in the database.
    fn table_name() -> &'static str;

    /// The identifier (primary key) column name.
    fn identifier_column() -> &'static str;

    /// All column names, identifier included.
    fn columns() -> &'static [&'static str];
}
