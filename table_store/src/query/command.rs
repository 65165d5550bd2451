use std::marker::PhantomData;

use super::comparator::Comparator;
use crate::errors::StoreError;
use crate::record::TableRecord;
use crate::validation::ValidatedFieldName;

/// Column-to-comparator mapping, combined with logical AND.
///
/// Holds at least one predicate; clause emission order is insertion order,
/// so the same command always compiles to the same statement. Constraining
/// the identifier column is allowed here, unlike in the write commands.
#[derive(Debug, Clone)]
pub struct QueryCommand<T: TableRecord> {
    predicates: Vec<(ValidatedFieldName, Comparator)>,
    _record: PhantomData<T>,
}

impl<T: TableRecord> QueryCommand<T> {
    pub fn builder() -> QueryCommandBuilder<T> {
        QueryCommandBuilder {
            predicates: Vec::new(),
            _record: PhantomData,
        }
    }

    pub fn predicates(&self) -> &[(ValidatedFieldName, Comparator)] {
        &self.predicates
    }
}

/// Builder for [`QueryCommand`]. Column names are validated at
/// [`build`](QueryCommandBuilder::build); an empty predicate set is a
/// construction error, not a full-table scan.
#[derive(Debug, Clone)]
pub struct QueryCommandBuilder<T: TableRecord> {
    predicates: Vec<(String, Comparator)>,
    _record: PhantomData<T>,
}

impl<T: TableRecord> QueryCommandBuilder<T> {
    pub fn filter(mut self, column: &str, comparator: Comparator) -> Self {
        self.predicates.push((column.to_string(), comparator));
        self
    }

    pub fn build(self) -> Result<QueryCommand<T>, StoreError> {
        if self.predicates.is_empty() {
            return Err(StoreError::EmptyPredicate);
        }

        let mut predicates: Vec<(ValidatedFieldName, Comparator)> =
            Vec::with_capacity(self.predicates.len());
        for (column, comparator) in self.predicates {
            let name = ValidatedFieldName::new(&column)?;
            if !T::columns().contains(&name.as_str()) {
                return Err(StoreError::UnknownColumn {
                    table: T::table_name(),
                    column,
                });
            }
            if predicates.iter().any(|(existing, _)| *existing == name) {
                return Err(StoreError::DuplicateColumn { column });
            }
            predicates.push((name, comparator));
        }

        Ok(QueryCommand {
            predicates,
            _record: PhantomData,
        })
    }
}
