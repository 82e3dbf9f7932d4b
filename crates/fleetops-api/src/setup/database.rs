//! Database pool and migrations.

use std::path::Path;
use std::time::Duration;

use fleetops_core::Config;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Connect the pool and bring the schema up to date.
pub async fn setup_database(config: &Config) -> Result<PgPool, anyhow::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections())
        .acquire_timeout(Duration::from_secs(config.db_timeout_seconds()))
        .connect(config.database_url())
        .await?;

    tracing::info!(
        max_connections = config.db_max_connections(),
        "Database pool connected"
    );

    run_migrations(&pool).await?;

    Ok(pool)
}

async fn run_migrations(pool: &PgPool) -> Result<(), anyhow::Error> {
    let migrations_path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../migrations");
    let migrator = Migrator::new(migrations_path).await?;
    migrator.run(pool).await?;

    tracing::info!("Database migrations applied");
    Ok(())
}
