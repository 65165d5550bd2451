use serde_json::Value;

use super::command::QueryCommand;
use super::comparator::Comparator;
use crate::errors::StoreError;
use crate::record::TableRecord;
use crate::validation::{ValidatedFieldName, ValidatedTableName};

/// A compiled statement: SQL text plus its parameters, in placeholder order.
///
/// The number of `$n` placeholders in `sql` always equals `params.len()`.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledQuery {
    pub sql: String,
    pub params: Vec<Value>,
}

/// Pure translation from query commands to parameterized SQL.
///
/// Identical input yields byte-identical output; nothing here touches a
/// connection.
pub struct SqlCompiler;

impl SqlCompiler {
    /// Compile to `SELECT * FROM <table> WHERE <clauses>`.
    pub fn compile_select<T: TableRecord>(
        command: &QueryCommand<T>,
    ) -> Result<CompiledQuery, StoreError> {
        let table = ValidatedTableName::new(T::table_name())?;
        let (where_clause, params) = Self::build_where_clause(command.predicates())?;

        Ok(CompiledQuery {
            sql: format!("SELECT * FROM {} WHERE {}", table, where_clause),
            params,
        })
    }

    /// Build the AND-joined clause list and parameter list, in emission
    /// order.
    pub fn build_where_clause(
        predicates: &[(ValidatedFieldName, Comparator)],
    ) -> Result<(String, Vec<Value>), StoreError> {
        if predicates.is_empty() {
            return Err(StoreError::EmptyPredicate);
        }

        let mut params = Vec::new();
        let mut param_counter = 1;

        let clauses = predicates
            .iter()
            .map(|(column, comparator)| {
                Self::build_clause(column, comparator, &mut params, &mut param_counter)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok((clauses.join(" AND "), params))
    }

    fn build_clause(
        column: &ValidatedFieldName,
        comparator: &Comparator,
        params: &mut Vec<Value>,
        param_counter: &mut usize,
    ) -> Result<String, StoreError> {
        match comparator {
            Comparator::Equal(value)
            | Comparator::NotEqual(value)
            | Comparator::GreaterThan(value)
            | Comparator::GreaterThanOrEqualTo(value)
            | Comparator::LesserThan(value)
            | Comparator::LesserThanOrEqualTo(value) => {
                params.push(value.clone());
                let clause = format!(
                    "{} {} ${}",
                    column,
                    comparator.sql_operator(),
                    param_counter
                );
                *param_counter += 1;
                Ok(clause)
            }
            Comparator::In(values) | Comparator::NotIn(values) => {
                // An empty candidate list would compile to invalid SQL (or a
                // vacuous truth); it is a programming error.
                if values.is_empty() {
                    return Err(StoreError::EmptyOperand {
                        column: column.as_str().to_string(),
                        operator: comparator.sql_operator(),
                    });
                }

                let placeholders: Vec<String> = values
                    .iter()
                    .map(|_| {
                        let placeholder = format!("${}", param_counter);
                        *param_counter += 1;
                        placeholder
                    })
                    .collect();
                params.extend(values.iter().cloned());

                Ok(format!(
                    "{} {} ({})",
                    column,
                    comparator.sql_operator(),
                    placeholders.join(", ")
                ))
            }
            Comparator::Like(pattern) | Comparator::NotLike(pattern) => {
                params.push(Value::String(pattern.clone()));
                let clause = format!(
                    "{} {} ${}",
                    column,
                    comparator.sql_operator(),
                    param_counter
                );
                *param_counter += 1;
                Ok(clause)
            }
        }
    }
}
