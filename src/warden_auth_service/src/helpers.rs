use secrecy::ExposeSecret;
use sqlx::{PgPool, migrate::MigrateError, postgres::PgPoolOptions};
use warden_adapters::config::PostgresSetting;

/// Errors raised while preparing the database
#[derive(Debug, thiserror::Error)]
pub enum DatabaseSetupError {
    #[error("Failed to connect to PostgreSQL: {0}")]
    Connect(#[from] sqlx::Error),
    #[error("Failed to run migrations: {0}")]
    Migrate(#[from] MigrateError),
}

/// Connect to PostgreSQL and run all pending migrations
///
/// # Returns
/// A configured PgPool ready for use
pub async fn configure_postgresql(setting: &PostgresSetting) -> Result<PgPool, DatabaseSetupError> {
    let pg_pool = get_postgres_pool(setting.url.expose_secret()).await?;

    run_migrations(&pg_pool).await?;

    Ok(pg_pool)
}

/// Apply the embedded migrations to `pool`
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Create a PostgreSQL connection pool
///
/// # Arguments
/// * `url` - Database connection URL
pub async fn get_postgres_pool(url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new().max_connections(5).connect(url).await
}
