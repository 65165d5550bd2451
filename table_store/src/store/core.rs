use std::marker::PhantomData;

use sqlx::pool::PoolConnection;
use sqlx::{PgPool, Postgres};

use crate::errors::StoreError;
use crate::record::TableRecord;
use crate::validation::{ValidatedFieldName, ValidatedTableName};

/// Typed store over one table.
///
/// Holds the pool plus the statements whose shape never changes between
/// calls. Stores keep no other state: no caching, no memoization, so every
/// call reflects the database at call time.
#[derive(Clone)]
pub struct TableStore<T: TableRecord> {
    pub(crate) pool: PgPool,
    pub(crate) table: ValidatedTableName,
    pub(crate) identifier: ValidatedFieldName,
    pub(crate) get_sql: String,
    pub(crate) get_all_sql: String,
    pub(crate) delete_sql: String,
    pub(crate) _record: PhantomData<T>,
}

impl<T: TableRecord> std::fmt::Debug for TableStore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableStore")
            .field("table", &self.table)
            .field("identifier", &self.identifier)
            .finish()
    }
}

impl<T: TableRecord> TableStore<T> {
    /// Build a store for `T`'s table, validating the declared table and
    /// column names up front. A misdeclared [`TableRecord`] impl fails
    /// here, not at first use.
    pub fn new(pool: PgPool) -> Result<Self, StoreError> {
        let table = ValidatedTableName::new(T::table_name())?;
        let identifier = ValidatedFieldName::new(T::identifier_column())?;

        for column in T::columns() {
            ValidatedFieldName::new(column)?;
        }
        if !T::columns().contains(&T::identifier_column()) {
            return Err(StoreError::UnknownColumn {
                table: T::table_name(),
                column: T::identifier_column().to_string(),
            });
        }

        let get_sql = format!(
            "SELECT * FROM {} WHERE {} = $1 LIMIT 1",
            table, identifier
        );
        let get_all_sql = format!("SELECT * FROM {}", table);
        let delete_sql = format!("DELETE FROM {} WHERE {} = $1", table, identifier);

        Ok(Self {
            pool,
            table,
            identifier,
            get_sql,
            get_all_sql,
            delete_sql,
            _record: PhantomData,
        })
    }

    /// The pool this store draws connections from.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// The validated table name.
    pub fn table(&self) -> &ValidatedTableName {
        &self.table
    }

    /// Check out one connection for one statement. The guard returns it to
    /// the pool when dropped, on success and error paths alike.
    pub(crate) async fn acquire(&self) -> Result<PoolConnection<Postgres>, StoreError> {
        self.pool.acquire().await.map_err(StoreError::acquire)
    }
}
