use thiserror::Error;

use crate::validation::ValidationError;

/// Errors produced by command construction, query compilation, and statement
/// execution.
///
/// Validation variants (everything above `ConstraintViolation`) are reported
/// before any connection is acquired. An absent row is never an error; `get`
/// returns `Ok(None)` for that case.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("query issued with no field constraints")]
    EmptyPredicate,

    #[error("{operator} on column '{column}' given an empty candidate list")]
    EmptyOperand {
        column: String,
        operator: &'static str,
    },

    #[error("table '{table}' has no column '{column}'")]
    UnknownColumn {
        table: &'static str,
        column: String,
    },

    #[error("column '{column}' is the identifier of table '{table}' and cannot appear in a value set")]
    IdentifierNotWritable {
        table: &'static str,
        column: &'static str,
    },

    #[error("command for table '{table}' sets no columns")]
    EmptyColumnSet { table: &'static str },

    #[error("column '{column}' appears more than once in the command")]
    DuplicateColumn { column: String },

    #[error("invalid identifier: {0}")]
    Identifier(#[from] ValidationError),

    #[error("constraint violation on table '{table}': {source}")]
    ConstraintViolation {
        table: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("timed out waiting for a pooled connection: {0}")]
    Timeout(#[source] sqlx::Error),

    #[error("database connectivity failure: {0}")]
    Connectivity(#[source] sqlx::Error),

    #[error("{operation} on table '{table}' failed: {source}")]
    QueryExecution {
        table: &'static str,
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl StoreError {
    /// Classify a pool acquisition failure.
    pub(crate) fn acquire(source: sqlx::Error) -> Self {
        match &source {
            sqlx::Error::PoolTimedOut => StoreError::Timeout(source),
            _ => StoreError::Connectivity(source),
        }
    }

    /// Classify a statement execution failure. Constraint rejections keep
    /// their own variant; everything else passes through unchanged under
    /// `QueryExecution`.
    pub(crate) fn execution(
        table: &'static str,
        operation: &'static str,
        source: sqlx::Error,
    ) -> Self {
        match &source {
            sqlx::Error::Database(db)
                if !matches!(db.kind(), sqlx::error::ErrorKind::Other) =>
            {
                StoreError::ConstraintViolation { table, source }
            }
            sqlx::Error::PoolTimedOut => StoreError::Timeout(source),
            sqlx::Error::PoolClosed | sqlx::Error::Io(_) | sqlx::Error::Tls(_) => {
                StoreError::Connectivity(source)
            }
            _ => StoreError::QueryExecution {
                table,
                operation,
                source,
            },
        }
    }
}
