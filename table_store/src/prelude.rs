//! Convenience re-exports for common table-store usage

// Core traits
pub use crate::record::TableRecord;
pub use crate::traits::Crud;

// Commands and predicates
pub use crate::command::{CreateCommand, DeleteCommand, UpdateCommand};
pub use crate::query::{Comparator, CompiledQuery, QueryCommand, SqlCompiler};

// Error types
pub use crate::errors::StoreError;

// Core store functionality
pub use crate::store::TableStore;

// Validation
pub use crate::validation::{ValidatedFieldName, ValidatedTableName, ValidationError};

// Common external dependencies that are frequently used
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use serde_json::json;
pub use sqlx::{FromRow, PgPool, Row};
pub use uuid::Uuid;
