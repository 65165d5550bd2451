use async_trait::async_trait;
use sqlx::postgres::PgRow;

use super::core::TableStore;
use crate::command::{CreateCommand, DeleteCommand, UpdateCommand};
use crate::errors::StoreError;
use crate::query::{CompiledQuery, QueryCommand, SqlCompiler};
use crate::record::TableRecord;
use crate::traits::Crud;

// Binds one dynamic value as a typed parameter. Strings are sniffed for
// RFC3339 timestamps and UUIDs so such columns compare with their native
// types rather than as text.
macro_rules! bind_value {
    ($query:expr, $value:expr) => {
        match $value {
            serde_json::Value::String(s) => {
                if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(&s) {
                    $query.bind(dt.with_timezone(&chrono::Utc))
                } else if let Ok(id) = uuid::Uuid::parse_str(&s) {
                    $query.bind(id)
                } else {
                    $query.bind(s)
                }
            }
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    if i >= i32::MIN as i64 && i <= i32::MAX as i64 {
                        $query.bind(i as i32)
                    } else {
                        $query.bind(i)
                    }
                } else if let Some(f) = n.as_f64() {
                    $query.bind(f)
                } else {
                    $query.bind(n.to_string())
                }
            }
            serde_json::Value::Bool(b) => $query.bind(b),
            serde_json::Value::Null => $query.bind(Option::<String>::None),
            other => $query.bind(other.to_string()),
        }
    };
}

#[async_trait]
impl<T> Crud for TableStore<T>
where
    T: TableRecord + for<'r> sqlx::FromRow<'r, PgRow> + Unpin,
{
    type Record = T;

    async fn get(&self, id: &T::Id) -> Result<Option<T>, StoreError> {
        let mut conn = self.acquire().await?;

        sqlx::query_as::<_, T>(&self.get_sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| StoreError::execution(T::table_name(), "get", e))
    }

    async fn get_all(&self) -> Result<Vec<T>, StoreError> {
        let mut conn = self.acquire().await?;

        sqlx::query_as::<_, T>(&self.get_all_sql)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| StoreError::execution(T::table_name(), "get_all", e))
    }

    async fn create(&self, command: CreateCommand<T>) -> Result<T, StoreError> {
        let (columns, params) = command.into_parts();

        let column_list = columns
            .iter()
            .map(|column| column.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let placeholders = (1..=params.len())
            .map(|i| format!("${}", i))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING *",
            self.table, column_list, placeholders
        );

        tracing::debug!("[CREATE] table: {} sql: {}", T::table_name(), sql);

        let mut conn = self.acquire().await?;
        let mut query = sqlx::query_as::<_, T>(&sql);
        for param in params {
            query = bind_value!(query, param);
        }

        query
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| StoreError::execution(T::table_name(), "create", e))
    }

    async fn update(&self, command: UpdateCommand<T>) -> Result<(), StoreError> {
        let (id, fields) = command.into_parts();
        let (columns, params): (Vec<_>, Vec<_>) = fields.into_iter().unzip();

        // Identifier is bound last, after the SET parameters.
        let set_clause = columns
            .iter()
            .enumerate()
            .map(|(i, column)| format!("{} = ${}", column, i + 1))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "UPDATE {} SET {} WHERE {} = ${}",
            self.table,
            set_clause,
            self.identifier,
            params.len() + 1
        );

        tracing::debug!("[UPDATE] table: {} sql: {}", T::table_name(), sql);

        let mut conn = self.acquire().await?;
        let mut query = sqlx::query(&sql);
        for param in params {
            query = bind_value!(query, param);
        }

        let result = query
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|e| StoreError::execution(T::table_name(), "update", e))?;

        // An identifier matching no row still counts as success.
        tracing::debug!(
            "[UPDATE] table: {} rows_affected: {}",
            T::table_name(),
            result.rows_affected()
        );

        Ok(())
    }

    async fn delete(&self, command: DeleteCommand<T>) -> Result<bool, StoreError> {
        let mut conn = self.acquire().await?;

        let result = sqlx::query(&self.delete_sql)
            .bind(command.into_id())
            .execute(&mut *conn)
            .await
            .map_err(|e| StoreError::execution(T::table_name(), "delete", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn query(&self, command: QueryCommand<T>) -> Result<Vec<T>, StoreError> {
        // Compile before touching the pool; validation failures never hold
        // a connection.
        let CompiledQuery { sql, params } = SqlCompiler::compile_select(&command)?;

        tracing::debug!("[QUERY] table: {} sql: {}", T::table_name(), sql);

        let mut conn = self.acquire().await?;
        let mut query = sqlx::query_as::<_, T>(&sql);
        for param in params {
            query = bind_value!(query, param);
        }

        query
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| StoreError::execution(T::table_name(), "query", e))
    }
}
