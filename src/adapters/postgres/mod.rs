//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresPautaRepository` - Pauta persistence
//! - `connect` - Pool construction from `DatabaseConfig`
//! - `synchronize` - Creates the schema on startup

mod pauta_repository;
mod schema;

pub use pauta_repository::PostgresPautaRepository;
pub use schema::{synchronize, PAUTAS_DDL};

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::domain::foundation::DomainError;

/// Builds a connection pool using the configured limits and timeouts.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, DomainError> {
    PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
        .max_lifetime(config.max_lifetime())
        .connect(&config.url)
        .await
        .map_err(|e| DomainError::database(format!("Failed to connect to database: {}", e)))
}
