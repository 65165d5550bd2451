//! The CRUD operation contract.

use async_trait::async_trait;

use crate::command::{CreateCommand, DeleteCommand, UpdateCommand};
use crate::errors::StoreError;
use crate::query::QueryCommand;
use crate::record::TableRecord;

/// The six operations a table store exposes. This is the entire external
/// surface per record type; each call runs exactly one statement over one
/// pooled connection.
#[async_trait]
pub trait Crud {
    /// The record type this store reads and writes.
    type Record: TableRecord;

    /// Fetch the row whose identifier equals `id`. `Ok(None)` means no such
    /// row; it is an expected outcome, not an error.
    async fn get(
        &self,
        id: &<Self::Record as TableRecord>::Id,
    ) -> Result<Option<Self::Record>, StoreError>;

    /// Fetch every row. Unconditional full-table scan with no built-in
    /// limiting; the caller bears the cost on large tables.
    async fn get_all(&self) -> Result<Vec<Self::Record>, StoreError>;

    /// Insert one row and return it as stored, identifier included. Store
    /// rejections (duplicate key, NOT NULL, ...) surface as
    /// [`StoreError::ConstraintViolation`] and are never retried.
    async fn create(
        &self,
        command: CreateCommand<Self::Record>,
    ) -> Result<Self::Record, StoreError>;

    /// Change the named columns of the row matching the command's
    /// identifier. An identifier matching no row still succeeds; callers
    /// needing existence confirmation should `get` first.
    async fn update(&self, command: UpdateCommand<Self::Record>) -> Result<(), StoreError>;

    /// Delete the row matching the command's identifier, at most one row by
    /// identifier uniqueness. Returns whether a row was deleted.
    async fn delete(&self, command: DeleteCommand<Self::Record>) -> Result<bool, StoreError>;

    /// Compile the command's predicates into one parameterized SELECT and
    /// return every matching row. Compilation failures are reported before
    /// any connection is acquired.
    async fn query(
        &self,
        command: QueryCommand<Self::Record>,
    ) -> Result<Vec<Self::Record>, StoreError>;
}
