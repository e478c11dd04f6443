/// Shared infrastructure concerns
///
/// This module contains infrastructure implementations that are shared across
/// modules: the PostgreSQL connection pool, its configuration and migrations.
pub mod database;

// Re-exports for convenience
pub use database::{Database, DatabaseConfig, DbConnection, DbPool};
