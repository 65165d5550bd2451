//! # Rowhaus
//!
//! A typed CRUD and dynamic predicate query layer for single PostgreSQL
//! tables, built on sqlx.
//!
//! Each store is parameterized over a record type and its identifier column.
//! Write commands are validated at construction so the identifier can never
//! appear in a value set, and queries compile from a per-column comparator
//! mapping into one parameterized statement.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rowhaus::prelude::*;
//!
//! #[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
//! pub struct User {
//!     pub id: i64,
//!     pub name: String,
//!     pub email: String,
//! }
//!
//! impl TableRecord for User {
//!     type Id = i64;
//!
//!     fn table_name() -> &'static str {
//!         "users"
//!     }
//!
//!     fn identifier_column() -> &'static str {
//!         "id"
//!     }
//!
//!     fn columns() -> &'static [&'static str] {
//!         &["id", "name", "email"]
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::new(
//!         "localhost".to_string(), 5432, "rowhaus".to_string(),
//!         "postgres".to_string(), "password".to_string(),
//!         1, 5, 30, 600, 3600,
//!     );
//!
//!     let rowhaus = Rowhaus::new(config).await?;
//!     let users = TableStore::<User>::new(rowhaus.pool().clone())?;
//!
//!     let command = CreateCommand::<User>::builder()
//!         .set("name", "Ada Lovelace")
//!         .set("email", "ada@example.com")
//!         .build()?;
//!
//!     let created = users.create(command).await?;
//!     println!("created user {}", created.id);
//!
//!     let adults = users
//!         .query(
//!             QueryCommand::<User>::builder()
//!                 .filter("name", Comparator::like("Ada%"))
//!                 .build()?,
//!         )
//!         .await?;
//!     println!("{} matching users", adults.len());
//!
//!     Ok(())
//! }
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod core;
pub mod errors;
pub mod prelude;

// Re-export the main public types for convenience
pub use crate::core::Rowhaus;
pub use crate::errors::RowhausError;

// Re-export centralized config
pub use config::{AppConfig, ConfigError, DatabaseConfig};

// Re-export the member crate used in the public API
pub use table_store;

// Re-export external dependencies used in public API
pub use async_trait;
pub use sqlx;
