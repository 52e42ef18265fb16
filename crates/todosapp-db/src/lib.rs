//! # Todosapp DB
//!
//! PostgreSQL connection pool and schema migrations for the Todosapp API.
//!
//! The SQL files in the workspace `migrations/` directory are the single
//! source of truth for the schema. They are embedded into the binary by
//! [`MIGRATOR`] and applied before anything reads or writes a row.
//!
//! # Example
//!
//! ```ignore
//! use todosapp_db::{init_db_pool, run_migrations};
//!
//! let pool = init_db_pool(&config.database).await?;
//! run_migrations(&pool).await?;
//! ```

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::PgPoolOptions;
use todosapp_config::DatabaseConfig;

pub use sqlx::PgPool;

/// Embedded migrations. Each one runs inside its own transaction.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Creates a PostgreSQL connection pool.
///
/// The pool is cheaply cloneable; build it once at startup and share it
/// through the application state.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await?;

    tracing::info!(
        max_connections = config.max_connections,
        "Database pool initialized"
    );

    Ok(pool)
}

/// Applies every pending migration.
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}
