//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod app;
mod config;

use account::{AccountConfig, PgAccountRepository, account_router};
use campaign::{PgCampaignRepository, campaign_router};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,account=info,campaign=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    // Database connection
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await?;

    tracing::info!(
        max_connections = config.database_max_connections,
        "Connected to database"
    );

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    let account_config = match config.password_pepper.clone() {
        Some(pepper) => AccountConfig::with_pepper(pepper),
        None => {
            tracing::warn!("PASSWORD_PEPPER not set; hashing passwords without a pepper");
            AccountConfig::development()
        }
    };

    // Build router
    let app = app::build_app(
        account_router(PgAccountRepository::new(pool.clone()), account_config),
        campaign_router(PgCampaignRepository::new(pool.clone())),
        &config.frontend_origins,
    );

    // Start server
    tracing::info!("Listening on {}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
