//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorturls`               - Create a short link
//! - `GET  /shorturls/{code}/stats`  - Click statistics for a link
//! - `GET  /{code}`                  - Short link redirect
//! - `GET  /health`                  - Liveness probe
//!
//! Static routes (`/health`, `/shorturls/...`) win over the `/{code}`
//! capture, so those names can never be shadowed by a link.

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler, stats_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/shorturls", post(shorten_handler))
        .route("/shorturls/{code}/stats", get(stats_handler))
        .route("/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
