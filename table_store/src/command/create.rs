use std::marker::PhantomData;

use serde_json::Value;

use super::writable_column;
use crate::errors::StoreError;
use crate::record::TableRecord;
use crate::validation::ValidatedFieldName;

/// Column/value set for an INSERT. The identifier column is assigned by the
/// store and cannot appear here.
#[derive(Debug, Clone)]
pub struct CreateCommand<T: TableRecord> {
    fields: Vec<(ValidatedFieldName, Value)>,
    _record: PhantomData<T>,
}

impl<T: TableRecord> CreateCommand<T> {
    pub fn builder() -> CreateCommandBuilder<T> {
        CreateCommandBuilder {
            fields: Vec::new(),
            _record: PhantomData,
        }
    }

    pub fn fields(&self) -> &[(ValidatedFieldName, Value)] {
        &self.fields
    }

    /// Split into column list and parameter list, preserving order.
    pub(crate) fn into_parts(self) -> (Vec<ValidatedFieldName>, Vec<Value>) {
        self.fields.into_iter().unzip()
    }
}

/// Builder for [`CreateCommand`]. Setters stage values; all validation
/// happens at [`build`](CreateCommandBuilder::build).
#[derive(Debug, Clone)]
pub struct CreateCommandBuilder<T: TableRecord> {
    fields: Vec<(String, Value)>,
    _record: PhantomData<T>,
}

impl<T: TableRecord> CreateCommandBuilder<T> {
    pub fn set(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.fields.push((column.to_string(), value.into()));
        self
    }

    pub fn build(self) -> Result<CreateCommand<T>, StoreError> {
        if self.fields.is_empty() {
            return Err(StoreError::EmptyColumnSet {
                table: T::table_name(),
            });
        }

        let mut fields: Vec<(ValidatedFieldName, Value)> = Vec::with_capacity(self.fields.len());
        for (column, value) in self.fields {
            let name = writable_column::<T>(&column)?;
            if fields.iter().any(|(existing, _)| *existing == name) {
                return Err(StoreError::DuplicateColumn { column });
            }
            fields.push((name, value));
        }

        Ok(CreateCommand {
            fields,
            _record: PhantomData,
        })
    }
}
