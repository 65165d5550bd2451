//! Error types for the Rowhaus crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RowhausError {
    #[error("Database connection error: {0}")]
    DatabaseConnection(#[from] sqlx::Error),

    #[error("Store not found: {0}")]
    StoreNotFound(String),

    #[error("Store already registered: {0}")]
    StoreAlreadyRegistered(String),
}
