use dotenvy::dotenv;

mod config;
mod setup;

use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, runner::Runner};

/// Inventory host entry point
///
/// Initializes the application, wires dependencies, and runs one session:
/// login, refresh from the remote catalog, inventory report.
///
/// - config/: Application configuration (database, remote catalog, session, report)
/// - setup/: Dependency injection and the session runner
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env()?;

    // 4. Initialize database
    let pool = database_config::init_database(&config.database).await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(pool, &config).await?;

    // 6. Run session
    Runner::run(&config, container).await?;

    Ok(())
}
