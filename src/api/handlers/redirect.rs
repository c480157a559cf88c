//! Handler for short link redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::domain::entities::ClickContext;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_host::client_ip;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Resolve the code (lookup + expiration check)
/// 2. Record a click event with the request metadata
/// 3. Return `302 Found` with the `Location` header
///
/// The click is written before the redirect is returned; whether a failed
/// click write fails the redirect is decided by the configured
/// [`crate::application::services::ClickFailurePolicy`].
///
/// # Errors
///
/// - 404 - unknown code
/// - 410 - validity window has passed (the row stays in place)
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let context = ClickContext {
        referer: header_string(&headers, header::REFERER.as_str()),
        user_agent: header_string(&headers, header::USER_AGENT.as_str()),
        ip: client_ip(&headers),
        country_hint: header_string(&headers, "cf-ipcountry"),
    };

    let original_url = state
        .redirect_service
        .resolve_and_record(&code, context)
        .await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, original_url)]).into_response())
}

fn header_string(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
}
