//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, content store client, and the Axum
//! server lifecycle.

use crate::application::services::CatalogService;
use crate::config::Config;
use crate::infrastructure::content::HttpContentStore;
use crate::infrastructure::persistence::PgHotelIndex;
use crate::routes::{RateLimit, app_router};
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - HTTP content store client
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - The content store client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    let index = Arc::new(PgHotelIndex::new(Arc::new(pool)));
    let content = Arc::new(
        HttpContentStore::new(
            Duration::from_secs(config.content_fetch_timeout),
            config.content_fetch_retries,
        )
        .context("Failed to build content store client")?,
    );

    let catalog_service = CatalogService::new(index, content, config.base_url.clone())
        .with_max_backfill_rounds(config.backfill_max_rounds)
        .with_resolve_concurrency(config.resolve_concurrency);
    let state = AppState::new(Arc::new(catalog_service)).with_docs_url(config.docs_url.clone());

    let app = app_router(
        state,
        RateLimit {
            per_second: config.rate_limit_per_second,
            burst_size: config.rate_limit_burst,
            behind_proxy: config.behind_proxy,
        },
    );

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
