//! Health check handler.

use axum::Json;

use crate::api::dto::health::HealthResponse;

/// Liveness probe.
///
/// `GET /health` always returns `200 {"status":"ok"}` while the process serves
/// requests.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
