use std::{str::FromStr, time::Duration};

use business::domain::errors::RepositoryError;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error")]
    ConnectionError,
    #[error("database.migration_error")]
    MigrationError,
}

/// Configuration for the database connection
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default values
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
        }
    }

    fn is_in_memory(&self) -> bool {
        self.connection_string.contains(":memory:")
    }
}

/// Creates a SQLite connection pool, creating the database file if needed.
///
/// An in-memory database lives only as long as its connection, so it gets a
/// single connection that is never recycled.
pub async fn create_sqlite_pool(config: &DatabaseConfig) -> Result<SqlitePool, DatabaseError> {
    let options = SqliteConnectOptions::from_str(&config.connection_string)
        .map_err(|e| {
            tracing::error!("Invalid database url {}: {}", config.connection_string, e);
            DatabaseError::ConnectionError
        })?
        .create_if_missing(true);

    let mut pool_options = SqlitePoolOptions::new().acquire_timeout(config.acquire_timeout);
    pool_options = if config.is_in_memory() {
        pool_options
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
    } else {
        pool_options.max_connections(config.max_connections)
    };

    let pool = pool_options.connect_with(options).await.map_err(|e| {
        tracing::error!("Could not open database: {}", e);
        DatabaseError::ConnectionError
    })?;

    Ok(pool)
}

/// Runs the migrations embedded at compile time
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), DatabaseError> {
    sqlx::migrate!("./migrations").run(pool).await.map_err(|e| {
        tracing::error!("Migration failed: {}", e);
        DatabaseError::MigrationError
    })
}

pub(crate) fn storage_error(err: sqlx::Error) -> RepositoryError {
    tracing::error!("Local store failure: {}", err);
    RepositoryError::database_error()
}

#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    let pool = create_sqlite_pool(&DatabaseConfig::new("sqlite::memory:".to_string()))
        .await
        .unwrap();
    run_migrations(&pool).await.unwrap();
    pool
}
