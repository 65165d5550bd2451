//! Table Store - typed CRUD and predicate queries over single PostgreSQL tables
//!
//! This crate provides the core data-access types: the record/command model,
//! the comparator algebra and SQL compiler, and the connection-per-operation
//! CRUD executor.

pub mod command;
pub mod errors;
pub mod prelude;
pub mod query;
pub mod record;
pub mod store;
pub mod traits;
pub mod validation;

pub use command::{CreateCommand, DeleteCommand, UpdateCommand};
pub use errors::StoreError;
pub use query::{Comparator, CompiledQuery, QueryCommand, SqlCompiler};
pub use record::TableRecord;
pub use store::TableStore;
pub use traits::Crud;
pub use validation::{ValidatedFieldName, ValidatedTableName, ValidationError};

use sqlx::PgPool;

pub type DbPool = PgPool;
