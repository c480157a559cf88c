//! HTTP server initialization and runtime setup.
//!
//! Wires the database pool, repositories, and services together, then runs
//! the Axum server.

use crate::application::services::{LinkService, RedirectService, StatsService};
use crate::config::Config;
use crate::infrastructure::persistence::{PgClickRepository, PgLinkRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Connects the PostgreSQL pool, applies migrations, builds the service
/// graph, and serves until the process is stopped.
///
/// # Errors
///
/// Returns an error if the database connection, migration run, address
/// parse, or server bind fails.
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let pool = Arc::new(pool);
    let link_repository = Arc::new(PgLinkRepository::new(pool.clone()));
    let click_repository = Arc::new(PgClickRepository::new(pool));

    let state = AppState::new(
        Arc::new(LinkService::new(link_repository.clone())),
        Arc::new(RedirectService::new(
            link_repository.clone(),
            click_repository.clone(),
            config.click_failure_policy,
        )),
        Arc::new(StatsService::new(link_repository, click_repository)),
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
