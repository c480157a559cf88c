//! Handler for short link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns metadata, total click count, and recent events for a short link.
///
/// # Endpoint
///
/// `GET /shorturls/{code}/stats`
///
/// # Response
///
/// Link metadata plus the unbounded total click count and up to 50 most
/// recent events, newest first. Available for expired links too.
///
/// # Errors
///
/// Returns 404 Not Found if the code was never allocated.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.stats_service.get_stats(&code).await?;
    Ok(Json(stats.into()))
}
