//! Core Rowhaus functionality
//!
//! The main coordinator: owns the connection pool and a registry of named
//! stores.

use sqlx::PgPool;
use std::collections::HashMap;
use std::time::Duration;
use table_store::Crud;

use crate::errors::RowhausError;
use config::DatabaseConfig;

/// Coordinator that manages the database connection and registered stores.
pub struct Rowhaus {
    pool: PgPool,
    stores: HashMap<String, Box<dyn std::any::Any + Send + Sync>>,
}

impl Rowhaus {
    /// Connect a pool per the configuration. Pool sizing and timeouts live
    /// entirely here; the stores impose none of their own.
    pub async fn new(config: DatabaseConfig) -> Result<Self, RowhausError> {
        let connection_string = config.connection_string();

        let mut pool_options = sqlx::postgres::PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds));

        if config.max_lifetime_seconds > 0 {
            pool_options =
                pool_options.max_lifetime(Duration::from_secs(config.max_lifetime_seconds));
        }

        let pool = pool_options.connect(&connection_string).await?;

        Ok(Self {
            pool,
            stores: HashMap::new(),
        })
    }

    /// Get database pool reference
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Register a store under a given name
    pub fn register_store<S>(&mut self, name: String, store: S) -> Result<(), RowhausError>
    where
        S: Crud + Send + Sync + 'static,
    {
        if self.stores.contains_key(&name) {
            return Err(RowhausError::StoreAlreadyRegistered(name));
        }

        self.stores.insert(name, Box::new(store));
        Ok(())
    }

    /// Get a registered store by name
    pub fn get_store<S>(&self, name: &str) -> Result<&S, RowhausError>
    where
        S: Crud + Send + Sync + 'static,
    {
        self.stores
            .get(name)
            .and_then(|store| store.downcast_ref::<S>())
            .ok_or_else(|| RowhausError::StoreNotFound(name.to_string()))
    }

    /// Get a mutable reference to a registered store by name
    pub fn get_store_mut<S>(&mut self, name: &str) -> Result<&mut S, RowhausError>
    where
        S: Crud + Send + Sync + 'static,
    {
        self.stores
            .get_mut(name)
            .and_then(|store| store.downcast_mut::<S>())
            .ok_or_else(|| RowhausError::StoreNotFound(name.to_string()))
    }

    /// List all registered store names
    pub fn list_stores(&self) -> Vec<&String> {
        self.stores.keys().collect()
    }

    /// Remove a store by name
    pub fn unregister_store(&mut self, name: &str) -> Result<(), RowhausError> {
        self.stores
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| RowhausError::StoreNotFound(name.to_string()))
    }

    /// Check database connection health
    pub async fn health_check(&self) -> Result<(), RowhausError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}
