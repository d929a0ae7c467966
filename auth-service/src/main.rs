use color_eyre::eyre::Result;
use warden::{
    Argon2Hasher, AuthService, AuthServiceSetting, ExposeSecret, JwtTokenIssuer,
    PostgresAccountStore, configure_postgresql,
};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    // Load configuration
    let config = AuthServiceSetting::load()?;

    // Setup database connection pool and run migrations
    let pg_pool = configure_postgresql(&config.postgres).await?;
    tracing::info!(
        database = %redact_credentials(config.postgres.url.expose_secret()),
        "connected to PostgreSQL"
    );

    let account_store = PostgresAccountStore::new(pg_pool);
    let token_issuer = JwtTokenIssuer::new(
        config.auth.access_token.jwt_config(),
        config.auth.refresh_token.jwt_config(),
    );

    let auth_service = AuthService::new(account_store, Argon2Hasher::default(), token_issuer);

    let listener = tokio::net::TcpListener::bind(&config.app_address).await?;
    auth_service
        .run_standalone(listener, Some(config.auth.allowed_origins.clone()))
        .await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}

// Drop the userinfo part of a connection URL before logging it
fn redact_credentials(url: &str) -> &str {
    match url.rsplit_once('@') {
        Some((_, host)) => host,
        None => url,
    }
}
