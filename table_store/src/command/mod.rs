//! Write-side command shapes.
//!
//! Commands are transient, caller-built value objects. Their builders
//! validate column sets against the record type's metadata, so a command
//! that reaches the executor is well-formed by construction: the identifier
//! column never appears in a value set, and every named column exists.

mod create;
mod delete;
mod update;

#[cfg(test)]
mod tests;

pub use create::{CreateCommand, CreateCommandBuilder};
pub use delete::DeleteCommand;
pub use update::{UpdateCommand, UpdateCommandBuilder};

use crate::errors::StoreError;
use crate::record::TableRecord;
use crate::validation::ValidatedFieldName;

/// Validate a column for use in a value set: well-formed, declared by the
/// record type, and not the identifier.
fn writable_column<T: TableRecord>(column: &str) -> Result<ValidatedFieldName, StoreError> {
    let name = ValidatedFieldName::new(column)?;

    if !T::columns().contains(&name.as_str()) {
        return Err(StoreError::UnknownColumn {
            table: T::table_name(),
            column: column.to_string(),
        });
    }

    if name.as_str() == T::identifier_column() {
        return Err(StoreError::IdentifierNotWritable {
            table: T::table_name(),
            column: T::identifier_column(),
        });
    }

    Ok(name)
}
