use std::marker::PhantomData;

use serde_json::Value;

use super::writable_column;
use crate::errors::StoreError;
use crate::record::TableRecord;
use crate::validation::ValidatedFieldName;

/// Identifier plus the subset of columns to change. Columns not named are
/// left unmodified.
#[derive(Debug, Clone)]
pub struct UpdateCommand<T: TableRecord> {
    id: T::Id,
    fields: Vec<(ValidatedFieldName, Value)>,
}

impl<T: TableRecord> UpdateCommand<T> {
    pub fn builder(id: T::Id) -> UpdateCommandBuilder<T> {
        UpdateCommandBuilder {
            id,
            fields: Vec::new(),
            _record: PhantomData,
        }
    }

    pub fn id(&self) -> &T::Id {
        &self.id
    }

    pub fn fields(&self) -> &[(ValidatedFieldName, Value)] {
        &self.fields
    }

    pub(crate) fn into_parts(self) -> (T::Id, Vec<(ValidatedFieldName, Value)>) {
        (self.id, self.fields)
    }
}

/// Builder for [`UpdateCommand`]. The identifier is required up front; the
/// set list is validated at [`build`](UpdateCommandBuilder::build) and must
/// not be empty.
#[derive(Debug, Clone)]
pub struct UpdateCommandBuilder<T: TableRecord> {
    id: T::Id,
    fields: Vec<(String, Value)>,
    _record: PhantomData<T>,
}

impl<T: TableRecord> UpdateCommandBuilder<T> {
    pub fn set(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.fields.push((column.to_string(), value.into()));
        self
    }

    pub fn build(self) -> Result<UpdateCommand<T>, StoreError> {
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

        Ok(UpdateCommand {
            id: self.id,
            fields,
        })
    }
}
