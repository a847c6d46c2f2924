use persistence::db::{DatabaseConfig, create_sqlite_pool, run_migrations};
use sqlx::SqlitePool;

const DEFAULT_DATABASE_URL: &str = "sqlite://inventory.db";

/// Database location
///
/// Environment variables:
/// - DATABASE_URL: SQLite connection string (default: "sqlite://inventory.db")
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
}

impl DatabaseSettings {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            url: lookup("DATABASE_URL")
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
        }
    }
}

/// Opens the local store and brings its schema up to date
///
/// # Errors
/// Returns error if the database cannot be opened or migrated
pub async fn init_database(settings: &DatabaseSettings) -> anyhow::Result<SqlitePool> {
    let pool = create_sqlite_pool(&DatabaseConfig::new(settings.url.clone())).await?;
    run_migrations(&pool).await?;
    tracing::info!("Local store ready at {}", settings.url);
    Ok(pool)
}
