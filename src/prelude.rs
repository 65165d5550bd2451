//! Convenience re-exports for common Rowhaus usage
//!
//! # Example
//!
//! ```rust
//! use rowhaus::prelude::*;
//! ```

// Core Rowhaus components
pub use crate::core::Rowhaus;
pub use crate::errors::RowhausError;

// Re-export centralized config
pub use config::{AppConfig, ConfigError, DatabaseConfig};

// Re-export commonly used table-store types for convenience
pub use table_store::prelude::*;

// Re-export the table_store module itself
pub use table_store;

// Common external dependencies
pub use anyhow;
pub use async_trait;
pub use sqlx;
pub use tokio;
